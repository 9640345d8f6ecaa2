//! Bar chart of one metric, drawn off-screen and flattened to text

use genview_core::model::{EnergyProfile, Metric, SeriesPoint};
use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget};

use crate::util::format::format_compact;

const BAR_WIDTH: u16 = 4;
const BAR_GAP: u16 = 1;
/// Bar heights are stored as integers; scale so one-decimal metrics keep their shape
const VALUE_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub metric: Metric,
    /// Total width in cells, borders included
    pub width: u16,
    /// Total height in cells, borders included
    pub height: u16,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            metric: Metric::Generation,
            width: 80,
            height: 20,
        }
    }
}

impl ChartOptions {
    fn max_bars(&self) -> usize {
        let inner = self.width.saturating_sub(2);
        usize::from((inner + BAR_GAP) / (BAR_WIDTH + BAR_GAP)).max(1)
    }
}

fn chart_title(profile: &EnergyProfile, metric: Metric) -> String {
    let unit = match metric {
        Metric::Generation => profile.generation_unit.as_str(),
        Metric::Secondary => profile.secondary.unit.as_str(),
        Metric::Efficiency => "%",
    };
    let name = match metric {
        Metric::Secondary => profile.secondary.name.as_str(),
        Metric::Generation | Metric::Efficiency => metric.label(),
    };
    format!(" {} {name} ({unit}) ", profile.energy_type)
}

/// Render `series` as a vertical bar chart.
///
/// Long series are sampled evenly so every bar fits the requested width;
/// points without `options.metric` are skipped.
pub fn render_chart<P: SeriesPoint>(
    series: &[P],
    profile: &EnergyProfile,
    options: ChartOptions,
) -> String {
    let points: Vec<(i32, f64)> = series
        .iter()
        .filter_map(|p| p.value(options.metric).map(|v| (p.year(), v)))
        .collect();
    if points.is_empty() {
        return format!("No {} data to chart\n", options.metric.label().to_lowercase());
    }

    let step = points.len().div_ceil(options.max_bars());
    let bars: Vec<Bar> = points
        .iter()
        .step_by(step)
        .map(|&(year, value)| {
            Bar::default()
                .value((value.max(0.0) * VALUE_SCALE).round() as u64)
                .label(Line::from(year.to_string()))
                .text_value(format_compact(value))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(chart_title(profile, options.metric));
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .direction(Direction::Vertical);

    let area = Rect::new(0, 0, options.width, options.height);
    let mut buf = Buffer::empty(area);
    chart.render(area, &mut buf);
    buffer_to_string(&buf)
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use genview_core::model::{PredictionPoint, YearDatum};

    fn datum(year: i32, generation: f64) -> YearDatum {
        YearDatum {
            year,
            generation,
            secondary_metric: 5.5,
            efficiency: 80.0,
        }
    }

    #[test]
    fn test_chart_has_title_and_year_labels() {
        let series = vec![datum(2025, 5200.0), datum(2026, 8320.0)];
        let rendered = render_chart(&series, &EnergyProfile::solar(), ChartOptions::default());

        assert_eq!(rendered.lines().count(), 20);
        assert!(rendered.contains("Solar Generation (GWh)"));
        assert!(rendered.contains("2025"));
        assert!(rendered.contains("2026"));
    }

    #[test]
    fn test_long_series_is_sampled_to_fit() {
        let series: Vec<YearDatum> = (2000..=2030).map(|y| datum(y, 1000.0)).collect();
        let options = ChartOptions {
            width: 27,
            ..Default::default()
        };
        assert_eq!(options.max_bars(), 5);

        let rendered = render_chart(&series, &EnergyProfile::wind(), options);
        // 31 points in steps of 7
        for year in [2000, 2007, 2014, 2021, 2028] {
            assert!(rendered.contains(&year.to_string()), "missing {year}");
        }
        assert!(!rendered.contains("2001"));
    }

    #[test]
    fn test_missing_metric_renders_message() {
        let predictions = vec![PredictionPoint {
            year: 2030,
            predicted_value: 9000.0,
        }];
        let options = ChartOptions {
            metric: Metric::Efficiency,
            ..Default::default()
        };
        let rendered = render_chart(&predictions, &EnergyProfile::hydro(), options);
        assert_eq!(rendered, "No efficiency data to chart\n");
    }
}
