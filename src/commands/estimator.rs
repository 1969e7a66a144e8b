//! Tauri command for PPI estimation.

use tauri::State;
use tracing::info;

use crate::device::DeviceResolution;
use crate::estimator::{PpiEngine, PpiLookupResult};

/// Resolve a pixel-density estimate from webview-reported screen metrics.
///
/// Total over its inputs: an unrecognized device degrades to a
/// low-confidence category fallback instead of erroring.
#[tauri::command]
pub fn estimate_ppi(
    engine: State<'_, PpiEngine>,
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: Option<f64>,
    user_agent: String,
) -> PpiLookupResult {
    let resolution = DeviceResolution::from_logical(css_width, css_height, device_pixel_ratio);
    let result = engine.lookup(&resolution, &user_agent);
    info!(
        "PPI estimate for {}x{}: {:.1} ({:?}, matched={})",
        resolution.device_width_px,
        resolution.device_height_px,
        result.ppi,
        result.confidence,
        result.matched
    );
    result
}
