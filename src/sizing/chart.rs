//! TOML loading for the ring size chart.
//!
//! The chart is a fixed, ordered table of letter sizes with strictly
//! increasing diameters. Circumferences are derived at load time and never
//! stored in the config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::calculator::circumference_mm;

/// Default chart embedded in the binary at compile time.
/// Loaded from `config/size_chart.toml`.
const DEFAULT_CHART: &str = include_str!("../../config/size_chart.toml");

#[derive(Debug, Clone, Deserialize)]
struct ChartConfig {
    sizes: Vec<ChartRow>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartRow {
    letter: String,
    diameter_mm: f64,
}

/// One ring size: letter label, inner diameter, derived circumference.
#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    pub letter: String,
    pub diameter_mm: f64,
    pub circumference_mm: f64,
}

/// Ordered ring size chart. Never empty; diameters strictly increase.
#[derive(Debug, Clone)]
pub struct SizeChart {
    entries: Vec<ChartEntry>,
}

impl SizeChart {
    fn from_config(config: ChartConfig) -> Result<Self> {
        anyhow::ensure!(!config.sizes.is_empty(), "size chart has no entries");
        for pair in config.sizes.windows(2) {
            anyhow::ensure!(
                pair[0].diameter_mm < pair[1].diameter_mm,
                "size chart diameters must strictly increase ({} -> {})",
                pair[0].letter,
                pair[1].letter
            );
        }
        let entries = config
            .sizes
            .into_iter()
            .map(|row| ChartEntry {
                circumference_mm: circumference_mm(row.diameter_mm),
                letter: row.letter,
                diameter_mm: row.diameter_mm,
            })
            .collect();
        Ok(Self { entries })
    }

    /// All chart entries in diameter order.
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// The entry whose diameter is closest to the given value.
    ///
    /// First minimal entry wins, so earlier (smaller) sizes take exact
    /// ties. Out-of-range diameters resolve to the nearest chart end.
    pub fn nearest(&self, diameter_mm: f64) -> &ChartEntry {
        let mut best = &self.entries[0];
        for entry in &self.entries {
            if (entry.diameter_mm - diameter_mm).abs() < (best.diameter_mm - diameter_mm).abs() {
                best = entry;
            }
        }
        best
    }

    /// Direct diameter lookup for a letter size (case-insensitive).
    pub fn diameter_for(&self, letter: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.letter.eq_ignore_ascii_case(letter))
            .map(|entry| entry.diameter_mm)
    }
}

/// Load a size chart from a TOML file at the given path.
pub fn load_chart(path: &Path) -> Result<SizeChart> {
    let content = std::fs::read_to_string(path)?;
    let config: ChartConfig = toml::from_str(&content)?;
    SizeChart::from_config(config)
}

/// Get the default chart embedded in the binary (UK/AU letters A-Z).
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_chart() -> SizeChart {
    let config: ChartConfig =
        toml::from_str(DEFAULT_CHART).expect("embedded size_chart.toml must be valid TOML");
    SizeChart::from_config(config).expect("embedded size_chart.toml must pass validation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_chart_loads_a_to_z() {
        let chart = default_chart();
        assert_eq!(chart.entries().len(), 26);
        assert_eq!(chart.entries()[0].letter, "A");
        assert_eq!(chart.entries()[25].letter, "Z");
    }

    #[test]
    fn test_diameters_strictly_increase() {
        let chart = default_chart();
        for pair in chart.entries().windows(2) {
            assert!(pair[0].diameter_mm < pair[1].diameter_mm);
        }
    }

    #[test]
    fn test_circumference_derived_from_diameter() {
        let chart = default_chart();
        for entry in chart.entries() {
            assert!((entry.circumference_mm - entry.diameter_mm * PI).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nearest_exact_hit() {
        let chart = default_chart();
        for entry in chart.entries() {
            assert_eq!(chart.nearest(entry.diameter_mm).letter, entry.letter);
        }
    }

    #[test]
    fn test_nearest_minimal_difference() {
        let chart = default_chart();
        // 16.3 sits between K (16.10) and L (16.51); K is 0.20 away, L 0.21
        assert_eq!(chart.nearest(16.3).letter, "K");
        // 16.4 is 0.30 from K, 0.11 from L
        assert_eq!(chart.nearest(16.4).letter, "L");
    }

    #[test]
    fn test_nearest_exact_tie_takes_earlier_entry() {
        // Diameters exactly representable in binary so the midpoint is a
        // true tie
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(
            &path,
            r#"
                [[sizes]]
                letter = "A"
                diameter_mm = 12.0

                [[sizes]]
                letter = "B"
                diameter_mm = 13.0
            "#,
        )
        .unwrap();
        let chart = load_chart(&path).unwrap();
        assert_eq!(chart.nearest(12.5).letter, "A");
    }

    #[test]
    fn test_out_of_range_clamps_to_chart_ends() {
        let chart = default_chart();
        assert_eq!(chart.nearest(5.0).letter, "A");
        assert_eq!(chart.nearest(40.0).letter, "Z");
    }

    #[test]
    fn test_diameter_for_letter() {
        let chart = default_chart();
        assert_eq!(chart.diameter_for("P"), Some(18.14));
        assert_eq!(chart.diameter_for("p"), Some(18.14));
        assert_eq!(chart.diameter_for("AA"), None);
    }

    #[test]
    fn test_quick_select_round_trip() {
        let chart = default_chart();
        for entry in chart.entries() {
            let diameter = chart.diameter_for(&entry.letter).unwrap();
            assert_eq!(chart.nearest(diameter).letter, entry.letter);
        }
    }

    #[test]
    fn test_load_chart_rejects_unsorted() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(
            &path,
            r#"
                [[sizes]]
                letter = "B"
                diameter_mm = 12.45

                [[sizes]]
                letter = "A"
                diameter_mm = 12.04
            "#,
        )
        .unwrap();
        assert!(load_chart(&path).is_err());
    }

    #[test]
    fn test_load_chart_rejects_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(&path, "sizes = []\n").unwrap();
        assert!(load_chart(&path).is_err());
    }
}
