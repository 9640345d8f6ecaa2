//! Summary statistics over a series
//!
//! Works on any [`SeriesPoint`], so generated rows and fetched predictions
//! are summarized identically.

use std::collections::BTreeMap;

use crate::error::StatsError;
use crate::model::{Metric, MetricSnapshot, SeriesAggregate, SeriesPoint, SummaryStats};

fn snapshot<P: SeriesPoint>(point: &P) -> MetricSnapshot {
    MetricSnapshot {
        year: point.year(),
        values: Metric::ALL
            .into_iter()
            .filter_map(|metric| point.value(metric).map(|v| (metric, v)))
            .collect(),
    }
}

/// Rounded percentage change, zero when `current` is zero
#[must_use]
pub fn growth_percent(current: f64, projected: f64) -> i64 {
    if current == 0.0 {
        return 0;
    }
    let growth = ((projected - current) / current * 100.0).round();
    if growth.is_finite() { growth as i64 } else { 0 }
}

/// Current (first point), projected (last point) and growth per metric
pub fn project<P: SeriesPoint>(series: &[P]) -> Result<SummaryStats, StatsError> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Err(StatsError::EmptySeries);
    };

    let current = snapshot(first);
    let projected = snapshot(last);

    let growth_percent: BTreeMap<Metric, i64> = current
        .values
        .iter()
        .filter_map(|(metric, &from)| {
            projected
                .get(*metric)
                .map(|to| (*metric, growth_percent(from, to)))
        })
        .collect();

    Ok(SummaryStats {
        current,
        projected,
        growth_percent,
    })
}

/// Totals, means and the peak generation year
pub fn aggregate<P: SeriesPoint>(series: &[P]) -> Result<SeriesAggregate, StatsError> {
    let first = series.first().ok_or(StatsError::EmptySeries)?;

    let mut total_generation = 0.0;
    let mut peak_year = first.year();
    let mut peak_generation = f64::MIN;
    let mut efficiency_sum = 0.0;
    let mut efficiency_count = 0usize;

    for point in series {
        let generation = point.value(Metric::Generation).unwrap_or(0.0);
        total_generation += generation;
        if generation > peak_generation {
            peak_generation = generation;
            peak_year = point.year();
        }
        if let Some(efficiency) = point.value(Metric::Efficiency) {
            efficiency_sum += efficiency;
            efficiency_count += 1;
        }
    }

    Ok(SeriesAggregate {
        total_generation,
        mean_generation: total_generation / series.len() as f64,
        mean_efficiency: (efficiency_count > 0).then(|| efficiency_sum / efficiency_count as f64),
        peak_year,
        peak_generation,
    })
}
