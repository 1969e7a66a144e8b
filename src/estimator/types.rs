//! Type definitions for the device PPI lookup engine.
//!
//! These types support both TOML deserialization (for the device table)
//! and JSON serialization (for frontend communication).

use serde::{Deserialize, Serialize};

// =============================================================================
// REFERENCE DATA TYPES (loaded from TOML)
// =============================================================================

/// How well-attested a PPI value is.
///
/// Describes the reference data (or the match tier that produced an
/// estimate), not the geometric quality of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One known device model in the PPI database.
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePpiRecord {
    /// Display name, e.g. "iPhone 15 Pro"
    pub signature: String,
    /// Physical pixel width in portrait (or primary) orientation
    pub width_px: u32,
    /// Physical pixel height in portrait (or primary) orientation
    pub height_px: u32,
    /// Default device-pixel-ratio the device reports
    pub device_pixel_ratio: f64,
    /// Manufacturer-known pixels per inch
    pub ppi: f64,
    /// How well-attested the ppi value is
    pub confidence: Confidence,
}

/// Root configuration loaded from device_ppi.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct PpiDatabase {
    /// Known device records, in priority order (earlier entries win ties)
    pub devices: Vec<DevicePpiRecord>,
}

// =============================================================================
// OUTPUT TYPES (serialized to frontend)
// =============================================================================

/// Result of resolving the current display's pixel density.
#[derive(Debug, Clone, Serialize)]
pub struct PpiLookupResult {
    /// Estimated pixels per inch to use for rendering
    pub ppi: f64,
    /// True when a reference record matched within tolerance
    pub matched: bool,
    /// Matched device signature, or the inferred category label
    pub device_name: Option<String>,
    /// Reliability tier of the estimate
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_deserialize() {
        let c: Confidence = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(c, Confidence::High);

        let c: Confidence = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(c, Confidence::Medium);

        let c: Confidence = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(c, Confidence::Low);
    }

    #[test]
    fn test_record_deserialize_from_toml() {
        let toml_src = r#"
            signature = "iPhone 15 Pro"
            width_px = 1179
            height_px = 2556
            device_pixel_ratio = 3.0
            ppi = 460
            confidence = "high"
        "#;
        let record: DevicePpiRecord = toml::from_str(toml_src).unwrap();
        assert_eq!(record.signature, "iPhone 15 Pro");
        assert_eq!(record.width_px, 1179);
        assert_eq!(record.ppi, 460.0);
        assert_eq!(record.confidence, Confidence::High);
    }

    #[test]
    fn test_lookup_result_serialize() {
        let result = PpiLookupResult {
            ppi: 483.0,
            matched: true,
            device_name: Some("iPhone 15 Pro".to_string()),
            confidence: Confidence::High,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("483"));
        assert!(json.contains("iPhone 15 Pro"));
        assert!(json.contains(r#""confidence":"high""#));
    }
}
