//! Manual display calibration commands.
//!
//! When the user calibrates against a physical reference object, the
//! resulting PPI is stored as a preference. A stored calibration takes
//! precedence over auto-detection in the frontend, and measurements made
//! with it carry the "manual" method.

use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::error::RingSizerError;

pub(crate) const PREFERENCES_FILE: &str = "preferences.json";
pub(crate) const CALIBRATED_PPI_KEY: &str = "calibrated_ppi";

#[tauri::command]
pub fn set_calibrated_ppi(app: AppHandle, ppi: f64) -> Result<(), String> {
    if !ppi.is_finite() || ppi <= 0.0 {
        return Err(
            RingSizerError::Calibration(format!("PPI must be positive, got {}", ppi)).into(),
        );
    }
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(CALIBRATED_PPI_KEY, serde_json::json!(ppi));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })?;
    info!("Stored display calibration: {:.1} PPI", ppi);
    Ok(())
}

#[tauri::command]
pub fn get_calibrated_ppi(app: AppHandle) -> Result<Option<f64>, String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    Ok(store
        .get(CALIBRATED_PPI_KEY)
        .and_then(|v| v.as_f64())
        .filter(|ppi| ppi.is_finite() && *ppi > 0.0))
}

#[tauri::command]
pub fn clear_calibrated_ppi(app: AppHandle) -> Result<(), String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.delete(CALIBRATED_PPI_KEY);
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}
