//! Host display introspection.
//!
//! Everything the estimator knows about the measuring device comes from
//! here: a one-shot resolution snapshot, a coarse platform classification
//! derived from the user-agent string, and a check for non-standard OS
//! zoom levels that would skew on-screen measurements.

mod platform;
mod resolution;
mod scaling;

pub use platform::{classify_user_agent, DeviceCategory};
pub use resolution::DeviceResolution;
pub use scaling::{detect_scaling, ScalingCheck, RATIO_TOLERANCE, STANDARD_RATIOS};
