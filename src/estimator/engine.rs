//! Tiered PPI lookup against the device table.
//!
//! The `PpiEngine` takes a display resolution snapshot and a user-agent
//! string, then produces a pixel-density estimate with a confidence tier.
//! Absence of a match degrades confidence instead of erroring; the lookup
//! is total over its input domain.

use tracing::debug;

use crate::device::{classify_user_agent, DeviceCategory, DeviceResolution};

use super::types::*;

// Match tolerances and the phone correction are empirical tuning
// constants, not physical limits. Treat them as adjustable parameters.

/// Per-dimension pixel tolerance for an exact match.
pub const EXACT_DIMENSION_TOLERANCE_PX: f64 = 10.0;
/// Device-pixel-ratio tolerance for an exact match.
pub const EXACT_RATIO_TOLERANCE: f64 = 0.1;
/// Per-dimension pixel tolerance for an approximate match.
pub const APPROX_DIMENSION_TOLERANCE_PX: f64 = 50.0;
/// Device-pixel-ratio tolerance for an approximate match.
pub const APPROX_RATIO_TOLERANCE: f64 = 0.3;
/// Scale-up applied to phone-class results to compensate for a systematic
/// underestimate on small screens.
pub const PHONE_PPI_CORRECTION: f64 = 1.05;

/// The pixel-density lookup engine.
///
/// Resolves a best-effort PPI for the current device in three tiers:
/// exact table match, approximate table match, then a coarse
/// category-based fallback.
pub struct PpiEngine {
    db: PpiDatabase,
}

impl PpiEngine {
    /// Create a new engine over the given device table.
    ///
    /// # Arguments
    /// * `db` - Device table (typically from `default_database()` or
    ///   `load_database()`)
    pub fn new(db: PpiDatabase) -> Self {
        Self { db }
    }

    /// Resolve a PPI estimate for the given display snapshot.
    ///
    /// Never fails: unknown devices fall back to a representative PPI for
    /// their form-factor category at low confidence. Phone-class devices
    /// (per the user agent) get the fixed correction applied on top,
    /// whether or not the table matched.
    pub fn lookup(&self, resolution: &DeviceResolution, user_agent: &str) -> PpiLookupResult {
        let category = classify_user_agent(user_agent);

        let mut result = self
            .exact_match(resolution)
            .or_else(|| self.approximate_match(resolution))
            .unwrap_or_else(|| Self::category_fallback(category, resolution.device_pixel_ratio));

        if category == DeviceCategory::Phone {
            result.ppi *= PHONE_PPI_CORRECTION;
        }

        debug!(
            "PPI lookup: {}x{} @ {} -> {:.1} ppi (matched={}, {:?})",
            resolution.device_width_px,
            resolution.device_height_px,
            resolution.device_pixel_ratio,
            result.ppi,
            result.matched,
            result.confidence
        );

        result
    }

    /// First record whose dimensions and ratio all sit within the exact
    /// tolerances.
    fn exact_match(&self, resolution: &DeviceResolution) -> Option<PpiLookupResult> {
        self.db
            .devices
            .iter()
            .find(|record| {
                Self::within(
                    record,
                    resolution,
                    EXACT_DIMENSION_TOLERANCE_PX,
                    EXACT_RATIO_TOLERANCE,
                )
            })
            .map(|record| PpiLookupResult {
                ppi: record.ppi,
                matched: true,
                device_name: Some(record.signature.clone()),
                confidence: record.confidence,
            })
    }

    /// Best record within the relaxed tolerances, minimizing the summed
    /// absolute pixel differences. Earlier table entries win exact ties.
    fn approximate_match(&self, resolution: &DeviceResolution) -> Option<PpiLookupResult> {
        let mut best: Option<(&DevicePpiRecord, f64)> = None;

        for record in &self.db.devices {
            if !Self::within(
                record,
                resolution,
                APPROX_DIMENSION_TOLERANCE_PX,
                APPROX_RATIO_TOLERANCE,
            ) {
                continue;
            }
            let distance = (f64::from(record.width_px) - f64::from(resolution.device_width_px))
                .abs()
                + (f64::from(record.height_px) - f64::from(resolution.device_height_px)).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((record, distance));
            }
        }

        best.map(|(record, _)| PpiLookupResult {
            ppi: record.ppi,
            matched: true,
            device_name: Some(format!("{} (approximate)", record.signature)),
            confidence: Confidence::Medium,
        })
    }

    /// Representative PPI for a form-factor category, conditioned on the
    /// device-pixel-ratio.
    fn category_fallback(category: DeviceCategory, device_pixel_ratio: f64) -> PpiLookupResult {
        let ppi = match category {
            DeviceCategory::Phone => {
                if device_pixel_ratio >= 3.0 {
                    460.0
                } else if device_pixel_ratio >= 2.0 {
                    326.0
                } else {
                    264.0
                }
            }
            DeviceCategory::Tablet => 264.0,
            DeviceCategory::Laptop => 227.0,
            DeviceCategory::Desktop | DeviceCategory::Unknown => {
                if device_pixel_ratio >= 2.0 {
                    227.0
                } else {
                    96.0
                }
            }
        };

        PpiLookupResult {
            ppi,
            matched: false,
            device_name: Some(category.label().to_string()),
            confidence: Confidence::Low,
        }
    }

    fn within(
        record: &DevicePpiRecord,
        resolution: &DeviceResolution,
        dimension_tolerance: f64,
        ratio_tolerance: f64,
    ) -> bool {
        (f64::from(record.width_px) - f64::from(resolution.device_width_px)).abs()
            <= dimension_tolerance
            && (f64::from(record.height_px) - f64::from(resolution.device_height_px)).abs()
                <= dimension_tolerance
            && (record.device_pixel_ratio - resolution.device_pixel_ratio).abs() <= ratio_tolerance
    }

    /// Access the underlying device table.
    pub fn database(&self) -> &PpiDatabase {
        &self.db
    }
}
