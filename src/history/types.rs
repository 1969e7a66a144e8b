use serde::{Deserialize, Serialize};

use crate::estimator::Confidence;

/// How the PPI behind a measurement was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementMethod {
    /// Calibrated against a physical reference object
    Manual,
    /// Estimated from the device table or category fallback
    AutoDetected,
}

impl MeasurementMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementMethod::Manual => "manual",
            MeasurementMethod::AutoDetected => "auto-detected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(MeasurementMethod::Manual),
            "auto-detected" => Some(MeasurementMethod::AutoDetected),
            _ => None,
        }
    }
}

/// Snapshot of the device estimate at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub device_name: Option<String>,
    pub confidence: Confidence,
    pub ppi: f64,
}

/// A persisted user measurement.
#[derive(Debug, Clone, Serialize)]
pub struct RingSizeMeasurement {
    pub id: i64,
    /// Resolved letter size from the chart
    pub size: String,
    pub diameter_mm: f64,
    pub circumference_mm: f64,
    pub measurement_method: MeasurementMethod,
    pub device_info: Option<DeviceSnapshot>,
    /// RFC 3339 creation time
    pub created_at: String,
}

/// Measurement fields supplied by the caller; id and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMeasurement {
    pub size: String,
    pub diameter_mm: f64,
    pub circumference_mm: f64,
    pub measurement_method: MeasurementMethod,
    pub device_info: Option<DeviceSnapshot>,
}
