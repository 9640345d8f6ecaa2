//! Front-end tests
//!
//! - `commands` - subcommand output in table and JSON form
//! - `settings` - YAML config loading from a data directory
