//! Worked examples with exact expected numbers

use crate::dashboard::EnergyDashboard;
use crate::model::{EnergyProfile, EnergyType, Metric, YearRange};
use crate::range::RangeController;
use crate::rng::FixedSource;
use crate::series::generate;
use crate::stats::project;

/// Solar over two years with no random variation
#[test]
fn test_solar_two_year_projection() {
    let profile = EnergyProfile::builtin(EnergyType::Solar);
    assert_eq!(profile.base_generation, 5200.0);
    assert_eq!(profile.growth_factor_max, 0.6);

    // A midpoint draw maps the symmetric jitter band onto a factor of 1.0
    let series = generate(
        YearRange::new(2025, 2026),
        &profile,
        &mut FixedSource::midpoint(),
    )
    .unwrap();

    assert_eq!(series[0].year, 2025);
    assert_eq!(series[0].generation, 5200.0);
    assert_eq!(series[1].year, 2026);
    assert_eq!(series[1].generation, 8320.0);

    // Efficiency: 75 at the start, 75 + 15 at the end
    assert_eq!(series[0].efficiency, 75.0);
    assert_eq!(series[1].efficiency, 90.0);
    // Irradiance has no growth term and Solar has no seasonality
    assert_eq!(series[0].secondary_metric, 5.5);
    assert_eq!(series[1].secondary_metric, 5.5);

    let stats = project(&series).unwrap();
    assert_eq!(stats.growth(Metric::Generation), 60);
    assert_eq!(stats.growth(Metric::Efficiency), 20);
    assert_eq!(stats.growth(Metric::Secondary), 0);
}

/// Default range, then a start and an end that overshoots the span
#[test]
fn test_start_then_far_end_clamps() {
    let mut controller = RangeController::with_current_year(2026);
    assert_eq!(controller.range(), YearRange::new(2026, 2027));

    controller.set_start(2000).unwrap();
    controller.set_end(2050).unwrap();

    assert_eq!(controller.range(), YearRange::new(2000, 2030));
}

/// The same flow through the dashboard regenerates a 31-row series
#[test]
fn test_dashboard_clamped_series() {
    let mut dashboard = EnergyDashboard::new(
        RangeController::with_current_year(2026),
        EnergyProfile::solar(),
        FixedSource::midpoint(),
    )
    .unwrap();

    dashboard.set_start(2000).unwrap();
    let view = dashboard.set_end(2050).unwrap();

    assert_eq!(view.range, YearRange::new(2000, 2030));
    assert_eq!(view.series.len(), 31);
    assert_eq!(view.series[0].generation, 5200.0);
    assert_eq!(view.series[30].generation, 8320.0);
    assert_eq!(view.stats.growth(Metric::Generation), 60);
    assert_eq!(view.aggregate.peak_year, 2030);
}
