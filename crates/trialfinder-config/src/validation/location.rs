//! Location source validation.

use super::helpers::check_range;
use crate::schema::{LocationMode, TrialFinderConfig};

pub(super) fn validate_location(errors: &mut Vec<String>, config: &TrialFinderConfig) {
    let loc = &config.location;
    check_range(errors, "location.timeout_secs", loc.timeout_secs, 1, 60);

    if let Some(lat) = loc.latitude {
        check_range(errors, "location.latitude", lat, -90.0, 90.0);
    }
    if let Some(lon) = loc.longitude {
        check_range(errors, "location.longitude", lon, -180.0, 180.0);
    }

    match loc.mode {
        LocationMode::Fixed => {
            if loc.latitude.is_none() || loc.longitude.is_none() {
                errors.push(
                    "location.mode = \"fixed\" requires location.latitude and location.longitude"
                        .into(),
                );
            }
        }
        LocationMode::Ip => {
            let url = loc.lookup_url.as_str();
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                errors.push(format!(
                    "location.lookup_url must be an http(s) URL, got '{url}'"
                ));
            }
        }
        LocationMode::Disabled => {}
    }
}
