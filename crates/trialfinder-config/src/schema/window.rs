//! Host window and header settings.

use serde::{Deserialize, Serialize};

/// Screen composition: window size plus the static header text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub subtitle: String,
    /// Initial logical width (valid range: 240-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    /// Height of the header strip above the widget (valid range: 0-400).
    pub header_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Find a Clinical Trial".into(),
            subtitle: "Search studies recruiting near you".into(),
            width: 430,
            height: 900,
            header_height: 96,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Find a Clinical Trial");
        assert_eq!(config.width, 430);
        assert_eq!(config.height, 900);
        assert_eq!(config.header_height, 96);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str(
            r#"
title = "Trials"
header_height = 0
"#,
        )
        .unwrap();
        assert_eq!(config.title, "Trials");
        assert_eq!(config.header_height, 0);
        assert_eq!(config.subtitle, "Search studies recruiting near you");
    }
}
