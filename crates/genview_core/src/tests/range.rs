//! Tests for year range selection
//!
//! These tests verify that:
//! - Any over-long selection is clamped to exactly the maximum span
//! - The start/end ordering invariant survives every operation
//! - The reject policy leaves the range untouched
//! - Reset always returns to the current year

use crate::error::RangeError;
use crate::model::{MAX_SPAN, MAX_YEAR, MIN_YEAR, YearRange};
use crate::range::{RangeController, SpanPolicy, YearBounds};

fn assert_invariant(controller: &RangeController) {
    let range = controller.range();
    assert!(range.start <= range.end, "inverted range {range:?}");
    assert!(
        range.span() <= i64::from(controller.span_limit()),
        "span too long {range:?}"
    );
}

/// Pushing the end too far clamps to exactly MAX_SPAN
#[test]
fn test_set_end_clamps_to_max_span() {
    for start in [1950, 2000, 2026, 2050] {
        for extra in 1..=20 {
            let mut controller = RangeController::with_current_year(2026);
            controller.set_start(start).unwrap();
            let change = controller.set_end(start + MAX_SPAN + extra).unwrap();
            assert!(change.clamped);
            assert_eq!(controller.range().span(), i64::from(MAX_SPAN));
            assert_eq!(controller.range().start, start);
        }
    }
}

/// Pulling the start too far back clamps the end to exactly MAX_SPAN
#[test]
fn test_set_start_clamps_to_max_span() {
    for end in [2030, 2050, 2090] {
        for extra in 1..=20 {
            let mut controller = RangeController::with_current_year(2026);
            controller.set_start(end).unwrap();
            controller.set_end(end).unwrap();
            let new_start = end - MAX_SPAN - extra;
            let change = controller.set_start(new_start).unwrap();
            assert!(change.clamped);
            assert_eq!(controller.range(), YearRange::new(new_start, new_start + MAX_SPAN));
        }
    }
}

/// Moving the start past the end drags the end along
#[test]
fn test_start_after_end_moves_end() {
    let mut controller = RangeController::with_current_year(2026);
    let change = controller.set_start(2040).unwrap();
    assert!(change.clamped);
    assert_eq!(controller.range(), YearRange::new(2040, 2040));
    assert_invariant(&controller);
}

/// Moving the end before the start drags the start along
#[test]
fn test_end_before_start_moves_start() {
    let mut controller = RangeController::with_current_year(2026);
    controller.set_end(2020).unwrap();
    assert_eq!(controller.range(), YearRange::new(2020, 2020));
    assert_invariant(&controller);
}

/// A sweep of arbitrary setter calls never breaks the invariant
#[test]
fn test_invariant_under_arbitrary_operations() {
    let mut controller = RangeController::with_current_year(2026);
    let years = [1900, 2100, 1999, 2077, 2026, 2026, 2010, 2099, 1950, 2040];
    for (i, &year) in years.iter().enumerate() {
        if i % 2 == 0 {
            controller.set_start(year).unwrap();
        } else {
            controller.set_end(year).unwrap();
        }
        assert_invariant(&controller);
    }
    controller.reset();
    assert_invariant(&controller);
}

#[test]
fn test_reject_policy() {
    let mut controller = RangeController::with_current_year(2026).policy(SpanPolicy::Reject);
    controller.set_start(2000).unwrap();
    let err = controller.set_end(2050).unwrap_err();
    assert_eq!(err, RangeError::SpanExceeded { span: 50, max: 30 });
    assert_eq!(controller.range(), YearRange::new(2000, 2027));

    // Within the limit still works
    controller.set_end(2030).unwrap();
    assert_eq!(controller.range(), YearRange::new(2000, 2030));
}

#[test]
fn test_custom_max_span() {
    let mut controller = RangeController::with_current_year(2026).max_span(5);
    controller.set_end(2040).unwrap();
    assert_eq!(controller.range(), YearRange::new(2026, 2031));
}

#[test]
fn test_set_range_is_atomic() {
    let mut controller = RangeController::with_current_year(2026);
    let err = controller.set_range(2000, 3000).unwrap_err();
    assert!(matches!(err, RangeError::InvalidYear { year: 3000, .. }));
    assert_eq!(controller.range(), YearRange::new(2026, 2027));

    let change = controller.set_range(2010, 2020).unwrap();
    assert!(!change.clamped);
    assert_eq!(change.previous, YearRange::new(2026, 2027));
    assert_eq!(change.current, YearRange::new(2010, 2020));
}

#[test]
fn test_reset_never_fails() {
    let mut controller = RangeController::with_current_year(2031);
    controller.set_range(1990, 2015).unwrap();
    let change = controller.reset();
    assert!(change.changed());
    assert_eq!(controller.range(), YearRange::new(2031, 2032));
}

#[test]
fn test_system_clock_default() {
    let controller = RangeController::new();
    let range = controller.range();
    assert_eq!(range.start, controller.current_year());
    assert_eq!(range.end, range.start + 1);
}

/// A zero span limit is raised to one so the default range still fits
#[test]
fn test_zero_max_span_keeps_invariant() {
    let mut controller = RangeController::with_current_year(2026).max_span(0);
    assert_eq!(controller.span_limit(), 1);
    assert_invariant(&controller);

    controller.set_end(2040).unwrap();
    assert_eq!(controller.range(), YearRange::new(2026, 2027));
    controller.set_start(2030).unwrap();
    assert_invariant(&controller);
    controller.reset();
    assert_eq!(controller.range(), YearRange::new(2026, 2027));
    assert_invariant(&controller);
}

/// Bounds wider than the calendar are narrowed, and extreme years are rejected
#[test]
fn test_extreme_years_are_rejected_without_overflow() {
    let mut controller = RangeController::with_current_year(2026).bounds(YearBounds {
        min: i32::MIN,
        max: i32::MAX,
    });
    assert_eq!(
        controller.year_bounds(),
        YearBounds {
            min: MIN_YEAR,
            max: MAX_YEAR
        }
    );

    assert!(matches!(
        controller.set_start(i32::MIN),
        Err(RangeError::InvalidYear { year: i32::MIN, .. })
    ));
    assert!(controller.set_end(i32::MAX).is_err());
    assert_eq!(controller.range(), YearRange::new(2026, 2027));

    controller.set_start(MIN_YEAR).unwrap();
    controller.set_end(MAX_YEAR).unwrap();
    assert_eq!(
        controller.range(),
        YearRange::new(MIN_YEAR, MIN_YEAR + MAX_SPAN)
    );
    assert_invariant(&controller);
}

/// Rejecting a calendar-wide span reports it without overflowing
#[test]
fn test_reject_reports_wide_span() {
    let mut controller = RangeController::with_current_year(2026)
        .bounds(YearBounds {
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
        .policy(SpanPolicy::Reject)
        .max_span(i32::MAX);
    controller.set_range(MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(controller.range().span(), 19_998);

    let mut strict = RangeController::with_current_year(2026)
        .bounds(YearBounds {
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
        .policy(SpanPolicy::Reject);
    // The start is applied first, against the current end of 2027
    assert_eq!(
        strict.set_range(MIN_YEAR, MAX_YEAR).unwrap_err(),
        RangeError::SpanExceeded {
            span: 12_026,
            max: MAX_SPAN
        }
    );
    assert_eq!(strict.range(), YearRange::new(2026, 2027));
}
