//! Conversion math between physical millimetres and on-screen pixels.

use std::f64::consts::PI;

pub const MM_PER_INCH: f64 = 25.4;

/// Smallest circle the UI will draw, in CSS pixels. Applied for
/// renderability only; mm readouts never use the floored value.
pub const MIN_RENDER_PX: f64 = 40.0;

/// Advisory diameter range for UI controls, in millimetres. The math
/// itself accepts any positive diameter; enforcing the range is the
/// caller's concern.
pub const DIAMETER_MIN_MM: f64 = 10.0;
pub const DIAMETER_MAX_MM: f64 = 30.0;

/// Circumference for a diameter. Always derived, never stored.
pub fn circumference_mm(diameter_mm: f64) -> f64 {
    diameter_mm * PI
}

/// True on-screen diameter in CSS pixels for a physical diameter.
///
/// Converts millimetres to physical pixels via the resolved PPI, then
/// divides by the device-pixel-ratio so the drawn circle matches physical
/// size regardless of display density.
pub fn rendered_diameter_px(diameter_mm: f64, ppi: f64, device_pixel_ratio: f64) -> f64 {
    diameter_mm * (ppi / MM_PER_INCH) / device_pixel_ratio
}

/// Rendered diameter with the visual floor applied.
pub fn display_diameter_px(diameter_mm: f64, ppi: f64, device_pixel_ratio: f64) -> f64 {
    rendered_diameter_px(diameter_mm, ppi, device_pixel_ratio).max(MIN_RENDER_PX)
}
