//! Tauri commands for display introspection.

use tauri::Window;
use tracing::{info, warn};

use crate::device::{self, DeviceResolution, ScalingCheck};

/// Snapshot the current monitor's resolution and scale factor.
///
/// Falls back to a zeroed snapshot with a 1.0 ratio when the monitor
/// cannot be determined; never fails.
#[tauri::command]
pub fn detect_resolution(window: Window) -> DeviceResolution {
    match window.current_monitor() {
        Ok(Some(monitor)) => {
            let size = monitor.size();
            info!(
                "Detected monitor: {}x{} px at scale {}",
                size.width,
                size.height,
                monitor.scale_factor()
            );
            DeviceResolution::from_physical(size.width, size.height, monitor.scale_factor())
        }
        _ => {
            warn!("Could not determine current monitor, assuming unscaled display");
            DeviceResolution::from_logical(0.0, 0.0, None)
        }
    }
}

/// Check whether the reported device-pixel-ratio corresponds to a
/// standard OS/browser zoom level.
#[tauri::command]
pub fn check_scaling(device_pixel_ratio: f64) -> ScalingCheck {
    device::detect_scaling(device_pixel_ratio)
}
