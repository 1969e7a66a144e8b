use serde::Serialize;

/// Snapshot of the host display at estimator-activation time.
///
/// Captured fresh each time the measuring tool is opened and never
/// persisted. Physical dimensions are derived as logical x ratio, rounded
/// to the nearest pixel, so with a ratio >= 1 they are always at least the
/// logical dimensions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeviceResolution {
    /// Logical (CSS) screen width in device-independent pixels.
    pub css_width: f64,
    /// Logical (CSS) screen height in device-independent pixels.
    pub css_height: f64,
    /// Ratio of physical to logical pixels.
    pub device_pixel_ratio: f64,
    /// Physical screen width in hardware pixels.
    pub device_width_px: u32,
    /// Physical screen height in hardware pixels.
    pub device_height_px: u32,
}

impl DeviceResolution {
    /// Build a snapshot from webview-reported logical dimensions.
    ///
    /// A missing, non-finite, or nonpositive pixel ratio defaults to 1.0.
    /// Ratios below 1.0 are kept as reported; no correction is attempted.
    pub fn from_logical(css_width: f64, css_height: f64, device_pixel_ratio: Option<f64>) -> Self {
        let ratio = match device_pixel_ratio {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => 1.0,
        };
        Self {
            css_width,
            css_height,
            device_pixel_ratio: ratio,
            device_width_px: (css_width * ratio).round() as u32,
            device_height_px: (css_height * ratio).round() as u32,
        }
    }

    /// Build a snapshot from a monitor's physical dimensions and scale factor.
    pub fn from_physical(width_px: u32, height_px: u32, scale_factor: f64) -> Self {
        let ratio = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self {
            css_width: f64::from(width_px) / ratio,
            css_height: f64::from(height_px) / ratio,
            device_pixel_ratio: ratio,
            device_width_px: width_px,
            device_height_px: height_px,
        }
    }
}
