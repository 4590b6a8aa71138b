//! # Configuration loader
//!
//! Reads the TOML file and maps it onto [`WizardConfig`]. Mapping rules live
//! in `fw-core`; this module only adds I/O and error context.

use std::path::PathBuf;

use anyhow::Context;
use fw_core::config::WizardConfig;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "formwizard";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or carries
/// an unknown `draft.on_corrupt` value.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<WizardConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    WizardConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid wizard config in {}", config_path.display()))
}

/// Directory the draft file lives in.
///
/// An empty `data_dir` falls back to `<platform data dir>/formwizard`.
pub fn resolve_data_dir(config: &WizardConfig) -> anyhow::Result<PathBuf> {
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(config.data_dir.clone());
    }
    default_data_dir(dirs::data_local_dir())
}

fn default_data_dir(platform_dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    platform_dir
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Failed to determine platform data directory")
}
