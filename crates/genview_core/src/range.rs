//! Year range selection
//!
//! [`RangeController`] owns the `(start, end)` pair behind the range picker.
//! It validates years against [`YearBounds`], keeps the span within
//! `max_span`, and tells subscribers whenever the selection actually changes.
//! It never recomputes anything itself; listeners (or the return value of each
//! setter) drive regeneration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::model::{MAX_SPAN, MAX_YEAR, MIN_YEAR, YearRange};

/// Current calendar year from the system clock
#[must_use]
pub fn current_year() -> i32 {
    i32::from(jiff::Zoned::now().year())
}

/// Inclusive bounds on selectable years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: 1900,
            max: 2100,
        }
    }
}

impl YearBounds {
    /// The same bounds narrowed to years a civil date can hold
    #[must_use]
    pub fn within_calendar(self) -> Self {
        Self {
            min: self.min.clamp(MIN_YEAR, MAX_YEAR),
            max: self.max.clamp(MIN_YEAR, MAX_YEAR),
        }
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    fn check(&self, year: i32) -> Result<(), RangeError> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(RangeError::InvalidYear {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// What happens when a setter would stretch the span past the maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanPolicy {
    /// Pull the end year back to `start + max_span`
    #[default]
    Clamp,
    /// Leave the range untouched and report `SpanExceeded`
    Reject,
}

/// Outcome of a range operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChange {
    pub previous: YearRange,
    pub current: YearRange,
    /// The opposite bound was moved to keep `start <= end <= start + max_span`
    pub clamped: bool,
}

impl RangeChange {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Handle returned by [`RangeController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&RangeChange)>;

pub struct RangeController {
    range: YearRange,
    current_year: i32,
    max_span: i32,
    bounds: YearBounds,
    policy: SpanPolicy,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u32,
}

impl fmt::Debug for RangeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeController")
            .field("range", &self.range)
            .field("current_year", &self.current_year)
            .field("max_span", &self.max_span)
            .field("bounds", &self.bounds)
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for RangeController {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeController {
    /// Controller anchored at the system clock's current year
    #[must_use]
    pub fn new() -> Self {
        Self::with_current_year(current_year())
    }

    /// Controller anchored at an explicit "current" year
    #[must_use]
    pub fn with_current_year(current_year: i32) -> Self {
        Self {
            range: YearRange::starting_at(current_year),
            current_year,
            max_span: MAX_SPAN,
            bounds: YearBounds::default(),
            policy: SpanPolicy::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Largest allowed `end - start`, at least 1 so the default range always fits
    #[must_use]
    pub fn max_span(mut self, max_span: i32) -> Self {
        self.max_span = max_span.max(1);
        self
    }

    /// Selectable years, narrowed to `MIN_YEAR..=MAX_YEAR`
    #[must_use]
    pub fn bounds(mut self, bounds: YearBounds) -> Self {
        self.bounds = bounds.within_calendar();
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: SpanPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn range(&self) -> YearRange {
        self.range
    }

    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    #[must_use]
    pub fn span_limit(&self) -> i32 {
        self.max_span
    }

    #[must_use]
    pub fn year_bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Register a callback invoked after every change to the selection
    pub fn subscribe(&mut self, listener: impl FnMut(&RangeChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn set_start(&mut self, new_start: i32) -> Result<RangeChange, RangeError> {
        self.bounds.check(new_start)?;
        let (next, clamped) = self.with_start(self.range, new_start)?;
        Ok(self.commit(next, clamped))
    }

    pub fn set_end(&mut self, new_end: i32) -> Result<RangeChange, RangeError> {
        self.bounds.check(new_end)?;
        let (next, clamped) = self.with_end(self.range, new_end)?;
        Ok(self.commit(next, clamped))
    }

    /// Apply both bounds at once, notifying listeners a single time.
    ///
    /// The start is applied first, then the end, with the same rules as the
    /// individual setters. On error nothing changes.
    pub fn set_range(&mut self, start: i32, end: i32) -> Result<RangeChange, RangeError> {
        self.bounds.check(start)?;
        self.bounds.check(end)?;
        let (after_start, clamped_start) = self.with_start(self.range, start)?;
        let (next, clamped_end) = self.with_end(after_start, end)?;
        Ok(self.commit(next, clamped_start || clamped_end))
    }

    /// Restore `current_year..=current_year + 1`
    pub fn reset(&mut self) -> RangeChange {
        self.commit(YearRange::starting_at(self.current_year), false)
    }

    fn with_start(&self, range: YearRange, start: i32) -> Result<(YearRange, bool), RangeError> {
        let end = range.end.max(start);
        let clamped = end != range.end;
        self.fit_span(YearRange::new(start, end), clamped)
    }

    fn with_end(&self, range: YearRange, end: i32) -> Result<(YearRange, bool), RangeError> {
        let start = range.start.min(end);
        let clamped = start != range.start;
        self.fit_span(YearRange::new(start, end), clamped)
    }

    /// Pull `end` back to `start + max_span` when the span is too long
    fn fit_span(&self, range: YearRange, clamped: bool) -> Result<(YearRange, bool), RangeError> {
        let span = range.span();
        if span <= i64::from(self.max_span) {
            return Ok((range, clamped));
        }
        self.check_policy(span)?;
        // span > max_span, so start + max_span < end and cannot overflow
        Ok((YearRange::new(range.start, range.start + self.max_span), true))
    }

    fn check_policy(&self, span: i64) -> Result<(), RangeError> {
        match self.policy {
            SpanPolicy::Clamp => Ok(()),
            SpanPolicy::Reject => Err(RangeError::SpanExceeded {
                span,
                max: self.max_span,
            }),
        }
    }

    fn commit(&mut self, next: YearRange, clamped: bool) -> RangeChange {
        let change = RangeChange {
            previous: self.range,
            current: next,
            clamped,
        };
        self.range = next;

        if clamped {
            tracing::debug!(
                start = next.start,
                end = next.end,
                max_span = self.max_span,
                "year range clamped"
            );
        }

        if change.changed() {
            for (_, listener) in &mut self.listeners {
                listener(&change);
            }
        }
        change
    }
}
