//! Subcommands and their execution

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use genview_core::model::{PredictionPoint, SeriesAggregate, SummaryStats, YearRange};
use genview_core::{
    DashboardConfig, EnergyDashboard, EnergyProfile, EnergyType, EnsembleConfig, Metric,
    ProfileRegistry, RangeController, SeededSource, run_ensemble, stats,
};
use serde::Serialize;

use crate::render::{self, ChartOptions, OutputFormat, table};

/// Year range and generator inputs shared by the series-producing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    /// First year of the range (default: current year)
    #[arg(long)]
    pub start: Option<i32>,

    /// Last year of the range (default: start + 1)
    #[arg(long)]
    pub end: Option<i32>,

    /// Energy type: solar, wind, hydro, geothermal or biomass
    #[arg(short, long)]
    pub energy: Option<EnergyType>,

    /// Seed for reproducible output (overrides the config seed)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartMetric {
    Generation,
    Secondary,
    Efficiency,
}

impl From<ChartMetric> for Metric {
    fn from(metric: ChartMetric) -> Self {
        match metric {
            ChartMetric::Generation => Metric::Generation,
            ChartMetric::Secondary => Metric::Secondary,
            ChartMetric::Efficiency => Metric::Efficiency,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the generated yearly series
    Series {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print current vs projected figures and growth
    Stats {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Draw a bar chart of one metric
    Chart {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(short, long, value_enum, default_value_t = ChartMetric::Generation)]
        metric: ChartMetric,
        /// Chart width in characters
        #[arg(long, default_value_t = 80)]
        width: u16,
        /// Chart height in lines
        #[arg(long, default_value_t = 20)]
        height: u16,
    },
    /// Percentile bands of generation across many seeds
    Ensemble {
        #[command(flatten)]
        range: RangeArgs,
        /// Number of seeds to run
        #[arg(short = 'n', long, default_value_t = 500)]
        iterations: usize,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List the energy profiles in effect
    Profiles {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Project stats over a JSON file of `{year, predictedValue}` points
    Predict {
        /// Path to the prediction file
        file: PathBuf,
        /// Energy type used for units and labels
        #[arg(short, long)]
        energy: Option<EnergyType>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    energy_type: EnergyType,
    range: YearRange,
    stats: &'a SummaryStats,
    aggregate: &'a SeriesAggregate,
}

#[derive(Serialize)]
struct PredictOutput<'a> {
    predictions: &'a [PredictionPoint],
    stats: &'a SummaryStats,
    aggregate: &'a SeriesAggregate,
}

/// Loaded configuration plus the profiles derived from it
#[derive(Debug, Clone)]
pub struct Session {
    config: DashboardConfig,
    registry: ProfileRegistry,
    current_year: i32,
}

impl Session {
    pub fn new(config: DashboardConfig, current_year: i32) -> color_eyre::Result<Self> {
        let registry = config
            .registry()
            .wrap_err("Failed to apply profile overrides")?;
        Ok(Self {
            config,
            registry,
            current_year,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn profile(&self, energy: Option<EnergyType>) -> &EnergyProfile {
        self.registry
            .get(energy.unwrap_or(self.config.default_energy))
    }

    fn seed(&self, args: &RangeArgs) -> Option<u64> {
        args.seed.or(self.config.seed)
    }

    /// Controller anchored at the current year with the requested range applied
    fn controller(&self, args: &RangeArgs) -> color_eyre::Result<RangeController> {
        let mut controller = self.config.controller(self.current_year);
        let change = match (args.start, args.end) {
            (Some(start), Some(end)) => Some(controller.set_range(start, end)),
            (Some(start), None) => Some(controller.set_start(start)),
            (None, Some(end)) => Some(controller.set_end(end)),
            (None, None) => None,
        };
        if let Some(change) = change {
            let change = change.wrap_err("Invalid year range")?;
            if change.clamped {
                tracing::info!(
                    range = ?change.current,
                    max_span = controller.span_limit(),
                    "requested range clamped"
                );
            }
        }
        Ok(controller)
    }

    fn dashboard(&self, args: &RangeArgs) -> color_eyre::Result<EnergyDashboard<SeededSource>> {
        let rng = match self.seed(args) {
            Some(seed) => SeededSource::from_seed(seed),
            None => SeededSource::from_entropy(),
        };
        let profile = self.profile(args.energy).clone();
        EnergyDashboard::new(self.controller(args)?, profile, rng)
            .wrap_err("Failed to compute dashboard view")
    }
}

/// Execute `command` and return what should be printed
pub fn run(session: &Session, command: &Command) -> color_eyre::Result<String> {
    tracing::debug!(?command, "running command");

    match command {
        Command::Series { range, format } => {
            let dashboard = session.dashboard(range)?;
            let view = dashboard.view();
            match format {
                OutputFormat::Json => render::to_json(&view.series),
                OutputFormat::Table => Ok(format!(
                    "{}{}",
                    table::view_heading(view, dashboard.profile()),
                    table::series_table(view, dashboard.profile())
                )),
            }
        }
        Command::Stats { range, format } => {
            let dashboard = session.dashboard(range)?;
            let view = dashboard.view();
            let profile = dashboard.profile();
            match format {
                OutputFormat::Json => render::to_json(&StatsOutput {
                    energy_type: profile.energy_type,
                    range: view.range,
                    stats: &view.stats,
                    aggregate: &view.aggregate,
                }),
                OutputFormat::Table => Ok(format!(
                    "{}{}\n{}",
                    table::view_heading(view, profile),
                    table::stats_table(&view.stats, profile),
                    table::aggregate_lines(&view.aggregate, &profile.generation_unit)
                )),
            }
        }
        Command::Chart {
            range,
            metric,
            width,
            height,
        } => {
            let dashboard = session.dashboard(range)?;
            let options = ChartOptions {
                metric: (*metric).into(),
                width: *width,
                height: *height,
            };
            Ok(render::render_chart(
                &dashboard.view().series,
                dashboard.profile(),
                options,
            ))
        }
        Command::Ensemble {
            range,
            iterations,
            format,
        } => {
            let controller = session.controller(range)?;
            let profile = session.profile(range.energy);
            let config = EnsembleConfig {
                iterations: *iterations,
                seed: session.seed(range).unwrap_or_else(rand::random),
                ..Default::default()
            };
            let result = run_ensemble(controller.range(), profile, &config)
                .wrap_err("Ensemble run failed")?;
            match format {
                OutputFormat::Json => render::to_json(&result),
                OutputFormat::Table => Ok(format!(
                    "{} {}-{}, {}",
                    profile.energy_type,
                    controller.range().start,
                    controller.range().end,
                    table::ensemble_table(&result, &profile.generation_unit)
                )),
            }
        }
        Command::Profiles { format } => {
            let profiles: Vec<&EnergyProfile> = session.registry.iter().collect();
            match format {
                OutputFormat::Json => render::to_json(&profiles),
                OutputFormat::Table => Ok(table::profiles_table(profiles)),
            }
        }
        Command::Predict {
            file,
            energy,
            format,
        } => {
            let content = fs::read_to_string(file)
                .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
            let predictions: Vec<PredictionPoint> = serde_json::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse predictions in {}", file.display()))?;
            let summary = stats::project(&predictions).wrap_err("No predictions to project")?;
            let aggregate = stats::aggregate(&predictions).wrap_err("No predictions to project")?;
            let profile = session.profile(*energy);

            match format {
                OutputFormat::Json => render::to_json(&PredictOutput {
                    predictions: &predictions,
                    stats: &summary,
                    aggregate: &aggregate,
                }),
                OutputFormat::Table => Ok(format!(
                    "{} predictions, {} points\n{}\n{}",
                    profile.energy_type,
                    predictions.len(),
                    table::stats_table(&summary, profile),
                    table::aggregate_lines(&aggregate, &profile.generation_unit)
                )),
            }
        }
    }
}
