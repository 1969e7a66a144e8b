//! TOML loading for the device PPI database.
//!
//! Provides two loading methods:
//! - `default_database()` - Loads the embedded table compiled into the binary
//! - `load_database(path)` - Loads a custom table from a file path

use anyhow::Result;
use std::path::Path;

use super::types::PpiDatabase;

/// Default device table embedded in the binary at compile time.
/// Loaded from `config/device_ppi.toml`.
const DEFAULT_DEVICES: &str = include_str!("../../config/device_ppi.toml");

/// Load a device table from a TOML file at the given path.
///
/// # Arguments
/// * `path` - Path to the TOML file containing device records
///
/// # Returns
/// * `Ok(PpiDatabase)` - Parsed and validated device table
/// * `Err` - If the file cannot be read, the TOML is invalid, or a record
///   carries out-of-range values
pub fn load_database(path: &Path) -> Result<PpiDatabase> {
    let content = std::fs::read_to_string(path)?;
    let db: PpiDatabase = toml::from_str(&content)?;
    validate(&db)?;
    Ok(db)
}

/// Get the default device table embedded in the binary.
///
/// Covers current iPhones and iPads, mainstream Android phones and tablets,
/// Apple and Windows laptops, and common desktop monitors.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_database() -> PpiDatabase {
    let db: PpiDatabase =
        toml::from_str(DEFAULT_DEVICES).expect("embedded device_ppi.toml must be valid TOML");
    validate(&db).expect("embedded device_ppi.toml must pass validation");
    db
}

fn validate(db: &PpiDatabase) -> Result<()> {
    anyhow::ensure!(!db.devices.is_empty(), "device table has no entries");
    for device in &db.devices {
        anyhow::ensure!(
            device.width_px > 0 && device.height_px > 0,
            "{}: zero pixel dimension",
            device.signature
        );
        anyhow::ensure!(
            device.device_pixel_ratio >= 1.0,
            "{}: device pixel ratio below 1.0",
            device.signature
        );
        anyhow::ensure!(device.ppi > 0.0, "{}: nonpositive ppi", device.signature);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::engine::{EXACT_DIMENSION_TOLERANCE_PX, EXACT_RATIO_TOLERANCE};
    use crate::estimator::types::Confidence;

    #[test]
    fn test_default_database_loads() {
        let db = default_database();
        assert!(db.devices.len() >= 20, "expected a populated device table");
    }

    #[test]
    fn test_known_flagship_present() {
        let db = default_database();
        let iphone = db
            .devices
            .iter()
            .find(|d| d.signature == "iPhone 15 Pro")
            .expect("iPhone 15 Pro should be in the table");
        assert_eq!(iphone.width_px, 1179);
        assert_eq!(iphone.height_px, 2556);
        assert_eq!(iphone.device_pixel_ratio, 3.0);
        assert_eq!(iphone.ppi, 460.0);
        assert_eq!(iphone.confidence, Confidence::High);
    }

    #[test]
    fn test_entries_pairwise_distinguishable() {
        // Every record must be findable by its own signature dimensions.
        // Two records inside each other's exact-match tolerance would
        // shadow whichever comes second.
        let db = default_database();
        for (i, a) in db.devices.iter().enumerate() {
            for b in db.devices.iter().skip(i + 1) {
                let same_w = (f64::from(a.width_px) - f64::from(b.width_px)).abs()
                    <= EXACT_DIMENSION_TOLERANCE_PX;
                let same_h = (f64::from(a.height_px) - f64::from(b.height_px)).abs()
                    <= EXACT_DIMENSION_TOLERANCE_PX;
                let same_ratio =
                    (a.device_pixel_ratio - b.device_pixel_ratio).abs() <= EXACT_RATIO_TOLERANCE;
                assert!(
                    !(same_w && same_h && same_ratio),
                    "{} and {} are indistinguishable at exact tolerance",
                    a.signature,
                    b.signature
                );
            }
        }
    }

    #[test]
    fn test_load_database_rejects_bad_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("devices.toml");
        std::fs::write(
            &path,
            r#"
                [[devices]]
                signature = "Broken"
                width_px = 0
                height_px = 100
                device_pixel_ratio = 2.0
                ppi = 300
                confidence = "low"
            "#,
        )
        .unwrap();
        assert!(load_database(&path).is_err());
    }

    #[test]
    fn test_load_database_rejects_empty_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("devices.toml");
        std::fs::write(&path, "devices = []\n").unwrap();
        assert!(load_database(&path).is_err());
    }

    #[test]
    fn test_load_database_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("devices.toml");
        std::fs::write(&path, DEFAULT_DEVICES).unwrap();
        let db = load_database(&path).unwrap();
        assert_eq!(db.devices.len(), default_database().devices.len());
    }
}
