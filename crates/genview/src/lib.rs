//! Terminal front-end for the genview energy dashboard
//!
//! Loads the YAML config from the data directory, drives
//! [`genview_core::EnergyDashboard`] for the requested range, and renders the
//! result as text tables, a bar chart, or JSON.

pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
pub mod util;

#[cfg(test)]
mod tests;

pub use commands::{Command, RangeArgs, Session, run};
pub use logging::init_logging;
pub use settings::{default_config_path, load_config};
