//! Derived summaries of a series

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::datum::Metric;

/// Metric values observed at one year of a series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub year: i32,
    pub values: BTreeMap<Metric, f64>,
}

impl MetricSnapshot {
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }
}

/// Current, projected and growth figures for a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Values at the first year
    pub current: MetricSnapshot,
    /// Values at the last year
    pub projected: MetricSnapshot,
    /// Rounded percentage change from current to projected
    pub growth_percent: BTreeMap<Metric, i64>,
}

impl SummaryStats {
    /// Growth for `metric`, zero when the metric is not tracked
    #[must_use]
    pub fn growth(&self, metric: Metric) -> i64 {
        self.growth_percent.get(&metric).copied().unwrap_or(0)
    }
}

/// Whole-series totals shown alongside the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesAggregate {
    pub total_generation: f64,
    pub mean_generation: f64,
    /// `None` when the series carries no efficiency figures
    pub mean_efficiency: Option<f64>,
    pub peak_year: i32,
    pub peak_generation: f64,
}
