//! Tauri command layer.
//!
//! Thin wrappers over the device, estimator, sizing, and history modules.
//! Fallible commands surface errors as strings for the frontend.

pub mod calibration;
pub mod device;
pub mod estimator;
pub mod history;
pub mod sizing;
