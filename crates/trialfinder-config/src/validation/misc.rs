//! Widget and bridge validation.

use super::helpers::check_range;
use crate::schema::TrialFinderConfig;

pub(super) fn validate_widget(errors: &mut Vec<String>, config: &TrialFinderConfig) {
    let id = &config.widget.id;
    if id.trim().is_empty() {
        errors.push("widget.id must not be empty".into());
    } else if id.chars().any(char::is_control) {
        errors.push("widget.id must not contain control characters".into());
    }
}

pub(super) fn validate_bridge(errors: &mut Vec<String>, config: &TrialFinderConfig) {
    check_range(
        errors,
        "bridge.fallback_height",
        config.bridge.fallback_height,
        1,
        20_000,
    );
}
