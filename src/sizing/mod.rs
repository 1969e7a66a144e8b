//! Ring size chart and conversion math.
//!
//! Two-way mapping between physical diameters and discrete letter sizes,
//! plus the mm-to-pixel math that drives the on-screen measuring circle.

mod calculator;
mod chart;

pub use calculator::{
    circumference_mm, display_diameter_px, rendered_diameter_px, DIAMETER_MAX_MM, DIAMETER_MIN_MM,
    MIN_RENDER_PX, MM_PER_INCH,
};
pub use chart::{default_chart, load_chart, ChartEntry, SizeChart};
