//! Range → series → stats pipeline
//!
//! [`EnergyDashboard`] wires the pieces together the way the dashboard screens
//! use them: the caller moves the range, the controller validates it, and on
//! an actual change the series is regenerated and the summary re-projected.
//! The whole view is replaced on every change, never patched.

use serde::Serialize;

use crate::error::Error;
use crate::model::{EnergyProfile, SeriesAggregate, SummaryStats, YearDatum, YearRange};
use crate::range::{ListenerId, RangeChange, RangeController};
use crate::rng::RandomSource;
use crate::{series, stats};

/// Everything a chart or table needs to render one energy type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub range: YearRange,
    pub series: Vec<YearDatum>,
    pub stats: SummaryStats,
    pub aggregate: SeriesAggregate,
}

impl DashboardView {
    fn compute<R: RandomSource + ?Sized>(
        range: YearRange,
        profile: &EnergyProfile,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let series = series::generate(range, profile, rng)?;
        let stats = stats::project(&series)?;
        let aggregate = stats::aggregate(&series)?;
        Ok(Self {
            range,
            series,
            stats,
            aggregate,
        })
    }
}

#[derive(Debug)]
pub struct EnergyDashboard<R: RandomSource> {
    controller: RangeController,
    profile: EnergyProfile,
    rng: R,
    view: DashboardView,
}

impl<R: RandomSource> EnergyDashboard<R> {
    /// Build the dashboard and compute the view for the controller's current range
    pub fn new(controller: RangeController, profile: EnergyProfile, mut rng: R) -> Result<Self, Error> {
        let view = DashboardView::compute(controller.range(), &profile, &mut rng)?;
        Ok(Self {
            controller,
            profile,
            rng,
            view,
        })
    }

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    #[must_use]
    pub fn range(&self) -> YearRange {
        self.controller.range()
    }

    #[must_use]
    pub fn profile(&self) -> &EnergyProfile {
        &self.profile
    }

    #[must_use]
    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    /// Observe range changes alongside the dashboard
    pub fn subscribe(&mut self, listener: impl FnMut(&RangeChange) + 'static) -> ListenerId {
        self.controller.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.controller.unsubscribe(id)
    }

    pub fn set_start(&mut self, year: i32) -> Result<&DashboardView, Error> {
        let change = self.controller.set_start(year)?;
        self.on_range_change(change)
    }

    pub fn set_end(&mut self, year: i32) -> Result<&DashboardView, Error> {
        let change = self.controller.set_end(year)?;
        self.on_range_change(change)
    }

    pub fn set_range(&mut self, start: i32, end: i32) -> Result<&DashboardView, Error> {
        let change = self.controller.set_range(start, end)?;
        self.on_range_change(change)
    }

    pub fn reset(&mut self) -> Result<&DashboardView, Error> {
        let change = self.controller.reset();
        self.on_range_change(change)
    }

    /// Show a different energy type over the same range
    pub fn switch_profile(&mut self, profile: EnergyProfile) -> Result<&DashboardView, Error> {
        let view = DashboardView::compute(self.controller.range(), &profile, &mut self.rng)?;
        self.profile = profile;
        self.view = view;
        Ok(&self.view)
    }

    /// Redraw the series with fresh random draws
    pub fn refresh(&mut self) -> Result<&DashboardView, Error> {
        self.view = DashboardView::compute(self.controller.range(), &self.profile, &mut self.rng)?;
        Ok(&self.view)
    }

    fn on_range_change(&mut self, change: RangeChange) -> Result<&DashboardView, Error> {
        if change.changed() {
            tracing::debug!(
                energy = %self.profile.energy_type,
                start = change.current.start,
                end = change.current.end,
                "range changed, recomputing view"
            );
            self.view = DashboardView::compute(change.current, &self.profile, &mut self.rng)?;
        }
        Ok(&self.view)
    }
}
