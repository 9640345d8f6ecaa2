mod datum;
mod energy;
mod profile;
mod range;
mod stats;

pub use datum::{Metric, PredictionPoint, SeriesPoint, YearDatum};
pub use energy::EnergyType;
pub use profile::{
    EfficiencyModel, EnergyProfile, JitterBand, PercentBand, SeasonalWave, SecondaryMetric,
    SecondaryTrend,
};
pub use range::{MAX_SPAN, MAX_YEAR, MIN_YEAR, YearRange};
pub use stats::{MetricSnapshot, SeriesAggregate, SummaryStats};
