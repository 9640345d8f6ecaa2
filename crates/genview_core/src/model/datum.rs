//! Series rows and the generic point shape consumed by the projector

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metrics a series row can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Generation,
    Secondary,
    Efficiency,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Generation, Metric::Secondary, Metric::Efficiency];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Generation => "Generation",
            Metric::Secondary => "Secondary",
            Metric::Efficiency => "Efficiency",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything with a year and a few named metrics.
///
/// Summary statistics only depend on this shape, so generated rows and
/// externally fetched predictions are summarized the same way.
pub trait SeriesPoint {
    fn year(&self) -> i32;

    /// Value of `metric`, or `None` when this point does not carry it
    fn value(&self, metric: Metric) -> Option<f64>;
}

/// One generated row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearDatum {
    pub year: i32,
    pub generation: f64,
    pub secondary_metric: f64,
    pub efficiency: f64,
}

impl SeriesPoint for YearDatum {
    fn year(&self) -> i32 {
        self.year
    }

    fn value(&self, metric: Metric) -> Option<f64> {
        Some(match metric {
            Metric::Generation => self.generation,
            Metric::Secondary => self.secondary_metric,
            Metric::Efficiency => self.efficiency,
        })
    }
}

/// A `{year, predictedValue}` pair as returned by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub year: i32,
    #[serde(alias = "predictedValue")]
    pub predicted_value: f64,
}

impl SeriesPoint for PredictionPoint {
    fn year(&self) -> i32 {
        self.year
    }

    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Generation => Some(self.predicted_value),
            _ => None,
        }
    }
}
