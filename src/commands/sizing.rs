//! Tauri commands for size conversions and rendering math.

use tauri::State;

use crate::error::RingSizerError;
use crate::sizing::{self, ChartEntry, SizeChart};

/// List the discrete sizes offered by the chart, in diameter order.
#[tauri::command]
pub fn list_sizes(chart: State<'_, SizeChart>) -> Vec<ChartEntry> {
    chart.entries().to_vec()
}

/// The chart entry closest to a diameter. Out-of-range diameters resolve
/// to the nearest chart end.
#[tauri::command]
pub fn nearest_size(chart: State<'_, SizeChart>, diameter_mm: f64) -> ChartEntry {
    chart.nearest(diameter_mm).clone()
}

/// Diameter for a letter size, for quick-select buttons.
#[tauri::command]
pub fn diameter_for_size(chart: State<'_, SizeChart>, letter: String) -> Result<f64, String> {
    chart
        .diameter_for(&letter)
        .ok_or_else(|| RingSizerError::UnknownSize(letter).into())
}

/// On-screen circle diameter in CSS pixels, with the visual floor applied.
#[tauri::command]
pub fn rendered_size_px(diameter_mm: f64, ppi: f64, device_pixel_ratio: f64) -> f64 {
    sizing::display_diameter_px(diameter_mm, ppi, device_pixel_ratio)
}
