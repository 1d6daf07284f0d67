//! Location of the user config file, and seeding it on first run.

use std::path::{Path, PathBuf};

use tracing::info;
use trialfinder_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "trialfinder";
const FILE_NAME: &str = "config.toml";

/// `trialfinder/config.toml` under the per-user config directory:
///
/// - Linux: `$XDG_CONFIG_HOME` or `~/.config`
/// - macOS: `~/Library/Application Support`
/// - Windows: `%APPDATA%`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory on this platform".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", path.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create parent of", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
