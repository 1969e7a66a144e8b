//! Device pixel-density estimation.
//!
//! This module resolves a best-effort pixels-per-inch value for the
//! current display by matching its resolution signature against a
//! TOML-driven table of known devices.
//!
//! # Architecture
//!
//! - **Database**: Loaded from TOML config at startup (or embedded defaults)
//! - **Lookup**: Exact match -> approximate match -> category fallback,
//!   with confidence degrading at each tier instead of erroring
//! - **Phone correction**: A fixed scale-up applied to phone-class devices
//!
//! # Example
//!
//! ```ignore
//! use ringsizer::device::DeviceResolution;
//! use ringsizer::estimator::{default_database, PpiEngine};
//!
//! let engine = PpiEngine::new(default_database());
//! let resolution = DeviceResolution::from_logical(393.0, 852.0, Some(3.0));
//! let result = engine.lookup(&resolution, "Mozilla/5.0 (iPhone; ...)");
//!
//! println!("{} PPI ({:?})", result.ppi, result.confidence);
//! ```

mod database;
mod engine;
mod types;

pub use database::{default_database, load_database};
pub use engine::{
    PpiEngine, APPROX_DIMENSION_TOLERANCE_PX, APPROX_RATIO_TOLERANCE,
    EXACT_DIMENSION_TOLERANCE_PX, EXACT_RATIO_TOLERANCE, PHONE_PPI_CORRECTION,
};
pub use types::*;
