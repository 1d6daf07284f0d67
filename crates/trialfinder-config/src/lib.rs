//! trialfinder configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trialfinder_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("widget: {}", config.widget.id);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::TrialFinderConfig;

use std::path::Path;

use trialfinder_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template if missing; an
/// explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<TrialFinderConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_with_missing_explicit_path_errors() {
        let result = load_config(Some(Path::new("/tmp/trialfinder_missing_override.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
