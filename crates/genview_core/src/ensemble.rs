//! Multi-seed generation bands
//!
//! Runs the series generator under many derived seeds and reports, for each
//! year, percentiles of the generated output. Seeds are derived up front from
//! the master seed, so parallel and sequential runs produce the same result.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::EnsembleError;
use crate::model::{EnergyProfile, YearDatum, YearRange};
use crate::rng::SeededSource;
use crate::series;

fn default_percentiles() -> Vec<f64> {
    vec![0.05, 0.50, 0.95]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    pub iterations: usize,
    pub seed: u64,
    /// Percentiles to report, as fractions in `[0, 1]`
    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<f64>,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            seed: 0,
            percentiles: default_percentiles(),
        }
    }
}

/// Generation distribution for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBand {
    pub year: i32,
    pub mean: f64,
    /// (percentile, value) pairs in the order requested
    pub percentiles: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleResult {
    pub iterations: usize,
    pub bands: Vec<YearBand>,
}

impl EnsembleResult {
    /// Value of percentile `p` at `year`, matched within 0.001
    #[must_use]
    pub fn percentile(&self, year: i32, p: f64) -> Option<f64> {
        self.bands
            .iter()
            .find(|band| band.year == year)?
            .percentiles
            .iter()
            .find(|(q, _)| (q - p).abs() < 0.001)
            .map(|(_, v)| *v)
    }
}

/// Nearest-rank percentile of an ascending slice
fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    let idx = (p * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

pub fn run_ensemble(
    range: YearRange,
    profile: &EnergyProfile,
    config: &EnsembleConfig,
) -> Result<EnsembleResult, EnsembleError> {
    if config.iterations == 0 {
        return Err(EnsembleError::NoIterations);
    }

    let mut master = StdRng::seed_from_u64(config.seed);
    let seeds: Vec<u64> = (0..config.iterations).map(|_| master.next_u64()).collect();

    let run = |seed: &u64| -> Result<Vec<YearDatum>, EnsembleError> {
        let mut rng = SeededSource::from_seed(*seed);
        Ok(series::generate(range, profile, &mut rng)?)
    };

    #[cfg(feature = "parallel")]
    let runs: Vec<Vec<YearDatum>> = seeds.par_iter().map(run).collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let runs: Vec<Vec<YearDatum>> = seeds.iter().map(run).collect::<Result<_, _>>()?;

    tracing::debug!(
        energy = %profile.energy_type,
        iterations = config.iterations,
        years = range.len(),
        "ensemble complete"
    );

    let bands = range
        .years()
        .enumerate()
        .map(|(i, year)| {
            let mut values: Vec<f64> = runs.iter().map(|run| run[i].generation).collect();
            values.sort_by(f64::total_cmp);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            YearBand {
                year,
                mean,
                percentiles: config
                    .percentiles
                    .iter()
                    .map(|&p| (p, nearest_rank(&values, p)))
                    .collect(),
            }
        })
        .collect();

    Ok(EnsembleResult {
        iterations: config.iterations,
        bands,
    })
}
