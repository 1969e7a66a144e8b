use serde::Serialize;

/// Device-pixel-ratios produced by standard OS scaling and browser zoom
/// steps. Anything outside these (within tolerance) means the user has a
/// custom zoom applied and on-screen sizes cannot be trusted.
pub const STANDARD_RATIOS: [f64; 8] = [1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

/// How far a reported ratio may sit from a standard one and still count
/// as standard.
pub const RATIO_TOLERANCE: f64 = 0.1;

const SCALING_ADVISORY: &str =
    "Your display appears to use a non-standard zoom level. Reset the OS \
     display scaling or browser zoom to 100% before measuring, or calibrate \
     against a reference object such as a credit card.";

/// Result of checking a device-pixel-ratio against standard zoom levels.
#[derive(Debug, Clone, Serialize)]
pub struct ScalingCheck {
    pub is_scaled: bool,
    /// Advisory text for the user; present only when scaling was detected.
    pub suggested_action: Option<String>,
}

/// Check whether a device-pixel-ratio corresponds to a standard OS/browser
/// zoom level. Pure and total; only ever produces an advisory, never an
/// error.
pub fn detect_scaling(device_pixel_ratio: f64) -> ScalingCheck {
    let standard = STANDARD_RATIOS
        .iter()
        .any(|ratio| (ratio - device_pixel_ratio).abs() <= RATIO_TOLERANCE);

    if standard {
        ScalingCheck {
            is_scaled: false,
            suggested_action: None,
        }
    } else {
        ScalingCheck {
            is_scaled: true,
            suggested_action: Some(SCALING_ADVISORY.to_string()),
        }
    }
}
