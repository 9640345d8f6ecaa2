//! Integration tests for the genview analytics core
//!
//! Tests are organized by topic:
//! - `range` - Range validation, span clamping and the reject policy
//! - `series` - Series shape, bounds and determinism for every profile
//! - `stats` - Summary projection edge cases
//! - `dashboard` - Range changes flowing through to the view
//! - `scenarios` - Worked end-to-end examples with exact numbers

mod range;
mod scenarios;
