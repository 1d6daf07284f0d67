//! Window size validation.

use super::helpers::check_range;
use crate::schema::TrialFinderConfig;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &TrialFinderConfig) {
    let w = &config.window;
    check_range(errors, "window.width", w.width, 240, 7680);
    check_range(errors, "window.height", w.height, 240, 4320);
    check_range(errors, "window.header_height", w.header_height, 0, 400);
}
