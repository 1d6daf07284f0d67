//! Location source and permission policy.

use serde::{Deserialize, Serialize};

/// Where the one-shot position fix comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Approximate position from an IP lookup service.
    #[default]
    Ip,
    /// Coordinate taken from `latitude` / `longitude`.
    Fixed,
    /// Never provide a coordinate.
    Disabled,
}

/// Answer given to the foreground location permission request.
///
/// Denied unless the user opts in, so no lookup leaves the machine on a
/// fresh install.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PermissionPolicy {
    Granted,
    #[default]
    Denied,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub mode: LocationMode,
    pub permission: PermissionPolicy,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// JSON endpoint returning `latitude` / `longitude` for the caller's IP.
    pub lookup_url: String,
    /// Lookup timeout in seconds (valid range: 1-60).
    pub timeout_secs: u32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            mode: LocationMode::Ip,
            permission: PermissionPolicy::Denied,
            latitude: None,
            longitude: None,
            lookup_url: "https://ipapi.co/json/".into(),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_config_defaults() {
        let config = LocationConfig::default();
        assert_eq!(config.mode, LocationMode::Ip);
        assert!(config.latitude.is_none());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn location_permission_is_opt_in() {
        let config = LocationConfig::default();
        assert_eq!(config.permission, PermissionPolicy::Denied);

        let config: LocationConfig = toml::from_str("mode = \"ip\"").unwrap();
        assert_eq!(config.permission, PermissionPolicy::Denied);

        let config: LocationConfig = toml::from_str("permission = \"granted\"").unwrap();
        assert_eq!(config.permission, PermissionPolicy::Granted);
    }

    #[test]
    fn location_mode_serialization() {
        let parsed: LocationMode = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(parsed, LocationMode::Disabled);
        let json = serde_json::to_string(&PermissionPolicy::Denied).unwrap();
        assert_eq!(json, "\"denied\"");
    }
}
