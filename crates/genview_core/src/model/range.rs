use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Largest allowed distance between the first and last selected year
pub const MAX_SPAN: i32 = 30;

/// Earliest year representable as a civil date
pub const MIN_YEAR: i32 = -9999;
/// Latest year representable as a civil date
pub const MAX_YEAR: i32 = 9999;

/// An inclusive span of calendar years.
///
/// Values produced by [`RangeController`](crate::range::RangeController) always
/// satisfy `start <= end <= start + max_span`. The fields stay public so callers
/// can hand arbitrary ranges to the generator, which re-checks ordering itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The default selection: `year` through the following year
    #[must_use]
    pub fn starting_at(year: i32) -> Self {
        Self {
            start: year,
            end: year.saturating_add(1),
        }
    }

    /// `end - start`, widened so any pair of `i32` years fits
    #[must_use]
    pub fn span(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Number of years covered, zero when inverted
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            usize::try_from(self.span() + 1).unwrap_or(usize::MAX)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }
}
