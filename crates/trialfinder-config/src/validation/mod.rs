//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod location;
mod misc;
mod window;


use crate::schema::TrialFinderConfig;
use trialfinder_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TrialFinderConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_widget(&mut errors, config);
    misc::validate_bridge(&mut errors, config);
    window::validate_window(&mut errors, config);
    location::validate_location(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
