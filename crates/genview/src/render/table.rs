//! Plain-text tables for terminal output

use genview_core::model::{
    EnergyProfile, Metric, SeasonalWave, SecondaryTrend, SeriesAggregate, SummaryStats,
};
use genview_core::{DashboardView, EnsembleResult};

use crate::util::format::{format_growth, format_quantity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Column-aligned text table
#[derive(Debug, Default)]
struct TextTable {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn column(mut self, header: impl Into<String>, align: Align) -> Self {
        self.headers.push(header.into());
        self.aligns.push(align);
        self
    }

    fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        self.render_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.render_line(&mut out, &rule, &widths);
        for row in &self.rows {
            self.render_line(&mut out, row, &widths);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.aligns)
            .map(|((cell, width), align)| match align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
}

fn metric_heading(metric: Metric, profile: &EnergyProfile) -> String {
    match metric {
        Metric::Generation => format!("Generation ({})", profile.generation_unit),
        Metric::Secondary => format!("{} ({})", profile.secondary.name, profile.secondary.unit),
        Metric::Efficiency => "Efficiency (%)".to_string(),
    }
}

fn metric_decimals(metric: Metric, profile: &EnergyProfile) -> usize {
    match metric {
        Metric::Secondary => usize::from(profile.secondary.decimals),
        Metric::Generation | Metric::Efficiency => 0,
    }
}

/// One row per year of the view's series
pub fn series_table(view: &DashboardView, profile: &EnergyProfile) -> String {
    let mut table = Metric::ALL.iter().fold(
        TextTable::default().column("Year", Align::Left),
        |table, &metric| table.column(metric_heading(metric, profile), Align::Right),
    );

    for datum in &view.series {
        table.row(vec![
            datum.year.to_string(),
            format_quantity(datum.generation, 0),
            format_quantity(
                datum.secondary_metric,
                metric_decimals(Metric::Secondary, profile),
            ),
            format_quantity(datum.efficiency, 0),
        ]);
    }

    table.render()
}

/// Current vs projected figures, one row per tracked metric
pub fn stats_table(stats: &SummaryStats, profile: &EnergyProfile) -> String {
    let mut table = TextTable::default()
        .column("Metric", Align::Left)
        .column(stats.current.year.to_string(), Align::Right)
        .column(stats.projected.year.to_string(), Align::Right)
        .column("Growth", Align::Right);

    for metric in Metric::ALL {
        let (Some(current), Some(projected)) =
            (stats.current.get(metric), stats.projected.get(metric))
        else {
            continue;
        };
        let decimals = metric_decimals(metric, profile);
        table.row(vec![
            metric_heading(metric, profile),
            format_quantity(current, decimals),
            format_quantity(projected, decimals),
            format_growth(stats.growth(metric)),
        ]);
    }

    table.render()
}

/// Totals over the whole series
pub fn aggregate_lines(aggregate: &SeriesAggregate, unit: &str) -> String {
    let mut out = format!(
        "Total generation: {} {unit}\nMean generation:  {} {unit}\nPeak:             {} {unit} in {}\n",
        format_quantity(aggregate.total_generation, 0),
        format_quantity(aggregate.mean_generation, 0),
        format_quantity(aggregate.peak_generation, 0),
        aggregate.peak_year,
    );
    if let Some(efficiency) = aggregate.mean_efficiency {
        out.push_str(&format!("Mean efficiency:  {efficiency:.1}%\n"));
    }
    out
}

/// Header line naming the energy type and range
pub fn view_heading(view: &DashboardView, profile: &EnergyProfile) -> String {
    format!(
        "{} {}-{}\n",
        profile.energy_type, view.range.start, view.range.end
    )
}

/// Per-year mean and percentile bands
pub fn ensemble_table(result: &EnsembleResult, unit: &str) -> String {
    let percentiles: Vec<f64> = result
        .bands
        .first()
        .map(|band| band.percentiles.iter().map(|(p, _)| *p).collect())
        .unwrap_or_default();

    let table = TextTable::default()
        .column("Year", Align::Left)
        .column(format!("Mean ({unit})"), Align::Right);
    let mut table = percentiles.iter().fold(table, |table, p| {
        table.column(format!("P{:.0}", p * 100.0), Align::Right)
    });

    for band in &result.bands {
        let mut cells = vec![band.year.to_string(), format_quantity(band.mean, 0)];
        cells.extend(band.percentiles.iter().map(|(_, v)| format_quantity(*v, 0)));
        table.row(cells);
    }

    format!("{} iterations\n{}", result.iterations, table.render())
}

fn describe_seasonality(wave: &SeasonalWave) -> String {
    match *wave {
        SeasonalWave::None => "none".to_string(),
        SeasonalWave::Sine { amplitude, period } => format!("sine {amplitude}/{period}"),
        SeasonalWave::Cosine { amplitude, period } => format!("cosine {amplitude}/{period}"),
    }
}

/// One row per energy profile
pub fn profiles_table<'a>(profiles: impl IntoIterator<Item = &'a EnergyProfile>) -> String {
    let mut table = TextTable::default()
        .column("Type", Align::Left)
        .column("Base", Align::Right)
        .column("Growth", Align::Right)
        .column("Seasonality", Align::Left)
        .column("Jitter", Align::Left)
        .column("Secondary", Align::Left)
        .column("Efficiency", Align::Left);

    for profile in profiles {
        let trend = match profile.secondary.trend {
            SecondaryTrend::Flat => String::new(),
            SecondaryTrend::Growing(factor) => format!(" +{:.0}%", factor * 100.0),
        };
        table.row(vec![
            profile.energy_type.to_string(),
            format!(
                "{} {}",
                format_quantity(profile.base_generation, 0),
                profile.generation_unit
            ),
            format!("+{:.0}%", profile.growth_factor_max * 100.0),
            describe_seasonality(&profile.seasonal),
            format!("{}-{}", profile.jitter.low, profile.jitter.high),
            format!(
                "{} {} {}{trend}",
                profile.secondary.name,
                format_quantity(
                    profile.secondary.base,
                    usize::from(profile.secondary.decimals)
                ),
                profile.secondary.unit
            ),
            format!(
                "{}+{} [{}, {}]",
                profile.efficiency.base,
                profile.efficiency.growth,
                profile.efficiency.band.min,
                profile.efficiency.band.max
            ),
        ]);
    }

    table.render()
}
