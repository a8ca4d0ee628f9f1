//! Static size chart catalog.
//!
//! Charts are defined as const tables in [`charts`] and are read-only for
//! the lifetime of the process; any update is a deploy-time replacement.

pub mod charts;

use std::fmt;

/// Body dimension tracked by size charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Chest,
    Waist,
    Hips,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Chest, Dimension::Waist, Dimension::Hips];

    /// Wire/display key (lowercase)
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Chest => "chest",
            Dimension::Waist => "waist",
            Dimension::Hips => "hips",
        }
    }

    /// Human-readable label for chart table headers
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Chest => "Chest (cm)",
            Dimension::Waist => "Waist (cm)",
            Dimension::Hips => "Hips (cm)",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-size measurement bound: a closed interval or a single reference value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementRange {
    Interval { min: f64, max: f64 },
    Reference(f64),
}

impl MeasurementRange {
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            MeasurementRange::Interval { min, max } => value >= min && value <= max,
            MeasurementRange::Reference(v) => (value - v).abs() < f64::EPSILON,
        }
    }

    /// Distance in cm from `value` to the nearest boundary; 0 inside the range
    pub fn distance_to(&self, value: f64) -> f64 {
        match *self {
            MeasurementRange::Interval { min, max } => {
                if value < min {
                    min - value
                } else if value > max {
                    value - max
                } else {
                    0.0
                }
            }
            MeasurementRange::Reference(v) => (value - v).abs(),
        }
    }

    /// Interval width in cm; reference values have zero width
    pub fn width(&self) -> f64 {
        match *self {
            MeasurementRange::Interval { min, max } => max - min,
            MeasurementRange::Reference(_) => 0.0,
        }
    }

    /// Signed side of `value` relative to the range: negative when the value
    /// is above the range (the size runs small), positive when below it (the
    /// size runs large), zero inside.
    pub fn side_of(&self, value: f64) -> i32 {
        match *self {
            MeasurementRange::Interval { min, max } => {
                if value > max {
                    -1
                } else if value < min {
                    1
                } else {
                    0
                }
            }
            MeasurementRange::Reference(v) => {
                if value > v {
                    -1
                } else if value < v {
                    1
                } else {
                    0
                }
            }
        }
    }
}

impl fmt::Display for MeasurementRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn trim(v: f64) -> String {
            if v.fract() == 0.0 {
                format!("{}", v as i64)
            } else {
                format!("{v}")
            }
        }
        match *self {
            MeasurementRange::Interval { min, max } => {
                write!(f, "{}-{}", trim(min), trim(max))
            }
            MeasurementRange::Reference(v) => f.write_str(&trim(v)),
        }
    }
}

/// One ordered chart row: a size label with its per-dimension ranges
#[derive(Debug, Clone, Copy)]
pub struct SizeRow {
    pub size: &'static str,
    pub chest: MeasurementRange,
    pub waist: MeasurementRange,
    pub hips: MeasurementRange,
}

impl SizeRow {
    pub fn range(&self, dimension: Dimension) -> MeasurementRange {
        match dimension {
            Dimension::Chest => self.chest,
            Dimension::Waist => self.waist,
            Dimension::Hips => self.hips,
        }
    }
}

/// A garment size chart for one category.
///
/// Row order is the size order; "adjacent" sizes for alternative selection
/// are defined by it.
#[derive(Debug, Clone, Copy)]
pub struct SizeChart {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub rows: &'static [SizeRow],
}

impl SizeChart {
    /// Position of a size label in chart order, case-insensitive
    pub fn position(&self, size: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.size.eq_ignore_ascii_case(size))
    }

    /// Mean interval width for a dimension across the chart, used to
    /// normalize out-of-range deviations. Falls back to `fallback` when the
    /// chart only carries reference values for the dimension.
    pub fn typical_width(&self, dimension: Dimension, fallback: f64) -> f64 {
        let widths: Vec<f64> = self
            .rows
            .iter()
            .map(|row| row.range(dimension).width())
            .filter(|w| *w > 0.0)
            .collect();

        if widths.is_empty() {
            fallback
        } else {
            widths.iter().sum::<f64>() / widths.len() as f64
        }
    }
}

/// Repository of all size charts, keyed by category slug
#[derive(Debug, Clone, Copy)]
pub struct SizeChartCatalog {
    charts: &'static [SizeChart],
}

impl SizeChartCatalog {
    /// Catalog backed by the built-in chart tables
    pub fn builtin() -> Self {
        Self {
            charts: charts::ALL_CHARTS,
        }
    }

    /// Exact slug lookup; `None` is a legitimate "no chart for category"
    pub fn chart(&self, slug: &str) -> Option<&'static SizeChart> {
        self.charts.iter().find(|chart| chart.slug == slug)
    }

    /// All category slugs in catalog order
    pub fn slugs(&self) -> Vec<&'static str> {
        self.charts.iter().map(|chart| chart.slug).collect()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl Default for SizeChartCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_slug() {
        let catalog = SizeChartCatalog::builtin();
        let chart = catalog.chart("tshirts").expect("tshirts chart");
        assert_eq!(chart.title, "T-Shirts");
        assert!(chart.rows.len() >= 4);
    }

    #[test]
    fn test_lookup_unknown_slug_is_none() {
        let catalog = SizeChartCatalog::builtin();
        assert!(catalog.chart("swimwear").is_none());
    }

    #[test]
    fn test_tshirts_reference_rows() {
        // The M and L rows every downstream fit test relies on
        let chart = SizeChartCatalog::builtin().chart("tshirts").unwrap();
        let m = &chart.rows[chart.position("M").unwrap()];
        assert_eq!(m.chest, MeasurementRange::Interval { min: 92.0, max: 98.0 });
        assert_eq!(m.waist, MeasurementRange::Interval { min: 76.0, max: 82.0 });
        assert_eq!(m.hips, MeasurementRange::Interval { min: 94.0, max: 100.0 });

        let l = &chart.rows[chart.position("L").unwrap()];
        assert_eq!(l.chest, MeasurementRange::Interval { min: 98.0, max: 104.0 });
    }

    #[test]
    fn test_range_distance() {
        let range = MeasurementRange::Interval { min: 92.0, max: 98.0 };
        assert_eq!(range.distance_to(95.0), 0.0);
        assert_eq!(range.distance_to(90.0), 2.0);
        assert_eq!(range.distance_to(101.0), 3.0);

        let reference = MeasurementRange::Reference(86.0);
        assert_eq!(reference.distance_to(86.0), 0.0);
        assert_eq!(reference.distance_to(90.0), 4.0);
    }

    #[test]
    fn test_range_side() {
        let range = MeasurementRange::Interval { min: 92.0, max: 98.0 };
        assert_eq!(range.side_of(95.0), 0);
        // Body above the range: the size runs small
        assert_eq!(range.side_of(100.0), -1);
        // Body below the range: the size runs large
        assert_eq!(range.side_of(90.0), 1);
    }

    #[test]
    fn test_range_display() {
        let range = MeasurementRange::Interval { min: 92.0, max: 98.0 };
        assert_eq!(range.to_string(), "92-98");
        assert_eq!(MeasurementRange::Reference(86.0).to_string(), "86");
    }

    #[test]
    fn test_typical_width_fallback_for_reference_only() {
        let chart = SizeChartCatalog::builtin().chart("jeans").unwrap();
        // Jeans track chest as a nominal reference value only
        assert_eq!(chart.typical_width(Dimension::Chest, 6.0), 6.0);
        assert!(chart.typical_width(Dimension::Waist, 6.0) > 0.0);
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let chart = SizeChartCatalog::builtin().chart("tshirts").unwrap();
        assert_eq!(chart.position("m"), chart.position("M"));
        assert_eq!(chart.position("XXXL"), None);
    }
}
