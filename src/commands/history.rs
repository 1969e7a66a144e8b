//! Tauri commands for the measurement history.
//!
//! Each command opens the store in the app data directory, performs one
//! synchronous operation, and returns. Saving resolves the letter size and
//! circumference from the submitted diameter before persisting.

use tauri::{AppHandle, Manager, State};
use tracing::info;

use crate::error::RingSizerError;
use crate::history::{
    DeviceSnapshot, MeasurementHistory, MeasurementMethod, NewMeasurement, RingSizeMeasurement,
};
use crate::sizing::{self, SizeChart};

fn open_history(app: &AppHandle) -> Result<MeasurementHistory, String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| RingSizerError::History(format!("Failed to get data dir: {}", e)))?;
    MeasurementHistory::new(&data_dir.join("measurements.db"))
}

/// Persist a measurement and return the stored record.
///
/// The stored diameter is the true, unrounded value; only the letter size
/// is snapped to the chart.
#[tauri::command]
pub fn save_measurement(
    app: AppHandle,
    chart: State<'_, SizeChart>,
    diameter_mm: f64,
    measurement_method: MeasurementMethod,
    device_info: Option<DeviceSnapshot>,
) -> Result<RingSizeMeasurement, String> {
    let entry = chart.nearest(diameter_mm);
    let measurement = NewMeasurement {
        size: entry.letter.clone(),
        diameter_mm,
        circumference_mm: sizing::circumference_mm(diameter_mm),
        measurement_method,
        device_info,
    };

    let history = open_history(&app)?;
    let saved = history.add(&measurement)?;
    info!("Measurement {} saved as size {}", saved.id, saved.size);
    Ok(saved)
}

/// List retained measurements, newest first.
#[tauri::command]
pub fn list_measurements(app: AppHandle) -> Result<Vec<RingSizeMeasurement>, String> {
    open_history(&app)?.list()
}

/// The most recent measurement, if any.
#[tauri::command]
pub fn latest_measurement(app: AppHandle) -> Result<Option<RingSizeMeasurement>, String> {
    open_history(&app)?.latest()
}

/// Remove one measurement. Missing ids are a silent no-op.
#[tauri::command]
pub fn delete_measurement(app: AppHandle, id: i64) -> Result<(), String> {
    let removed = open_history(&app)?.remove(id)?;
    if removed {
        info!("Deleted measurement {}", id);
    }
    Ok(())
}

/// Empty the measurement history.
#[tauri::command]
pub fn clear_measurements(app: AppHandle) -> Result<(), String> {
    open_history(&app)?.clear()
}
