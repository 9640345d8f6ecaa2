//! Renewable generation analytics core
//!
//! This crate computes the per-year series and summary numbers behind the
//! energy dashboard. It supports:
//! - Year-range selection with a maximum span and a change notification
//! - One parameterized generator for Solar, Wind, Hydro, Geothermal and Biomass
//! - Current/projected/growth summaries over any year-keyed series
//! - Injectable randomness for reproducible output
//! - Multi-seed percentile bands
//!
//! # Example
//!
//! ```ignore
//! use genview_core::{EnergyDashboard, EnergyProfile, Metric, RangeController, SeededSource};
//!
//! let mut dashboard = EnergyDashboard::new(
//!     RangeController::new(),
//!     EnergyProfile::wind(),
//!     SeededSource::from_seed(42),
//! )?;
//! let view = dashboard.set_end(2040)?;
//! println!("{} rows, growth {}%", view.series.len(), view.stats.growth(Metric::Generation));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dashboard;
pub mod ensemble;
pub mod error;
pub mod range;
pub mod rng;
pub mod series;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DashboardConfig, ProfileBuilder, ProfileOverride, ProfileRegistry};
pub use dashboard::{DashboardView, EnergyDashboard};
pub use ensemble::{EnsembleConfig, EnsembleResult, YearBand, run_ensemble};
pub use error::{ConfigError, EnsembleError, Error, ProfileError, RangeError, SeriesError, StatsError};
pub use model::{
    EnergyProfile, EnergyType, MAX_SPAN, Metric, PredictionPoint, SeriesPoint, SummaryStats,
    YearDatum, YearRange,
};
pub use range::{RangeChange, RangeController, SpanPolicy, YearBounds};
pub use rng::{FixedSource, RandomSource, SeededSource, SequenceSource};
