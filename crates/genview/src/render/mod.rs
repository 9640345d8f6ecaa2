//! Output rendering: text tables, bar charts and JSON

pub mod chart;
pub mod table;

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use serde::Serialize;

pub use chart::{ChartOptions, render_chart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Pretty-printed JSON with a trailing newline
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> color_eyre::Result<String> {
    let mut json = serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}
