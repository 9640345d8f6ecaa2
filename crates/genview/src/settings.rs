//! Dashboard configuration stored as YAML in the data directory

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use genview_core::DashboardConfig;

/// Config file name inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load and validate the config at `path`; a missing file yields defaults
pub fn load_config(path: &Path) -> color_eyre::Result<DashboardConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DashboardConfig::default());
    }

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
    let config: DashboardConfig = serde_saphyr::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config {}", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("Invalid config {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        overrides = config.profiles.len(),
        "loaded dashboard config"
    );
    Ok(config)
}
