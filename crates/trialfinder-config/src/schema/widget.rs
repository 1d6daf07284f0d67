//! Widget selection.

use serde::{Deserialize, Serialize};

/// Widget configuration loaded when nothing else is specified.
pub const DEFAULT_WIDGET_ID: &str = "trial-finder";

/// Which remote widget configuration to embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_WIDGET_ID.into(),
        }
    }
}
