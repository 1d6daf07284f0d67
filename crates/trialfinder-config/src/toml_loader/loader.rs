//! Core TOML config loading: read from path or platform default.

use crate::schema::TrialFinderConfig;
use crate::validation;
use std::path::Path;
use tracing::{info, warn};
use trialfinder_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// If validation fails, a warning is logged and the default config is
/// returned instead.
pub fn load_from_path(path: &Path) -> Result<TrialFinderConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TrialFinderConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(TrialFinderConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// See [`default_config_path`] for where that is on each platform.
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<TrialFinderConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TrialFinderConfig::default())
        }
        Err(e) => Err(e),
    }
}
