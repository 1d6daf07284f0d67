//! Embedding bridge settings.

use serde::{Deserialize, Serialize};

/// Which document host renders the widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Full bridge: location injection, interception scripts, message channel.
    Bridge,
    /// Plain inline frame with the environment's native behaviour.
    Frame,
}

impl HostKind {
    /// Host used when nothing is configured for the compilation target.
    pub const fn for_target() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Frame
        } else {
            Self::Bridge
        }
    }
}

impl Default for HostKind {
    fn default() -> Self {
        Self::for_target()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub host: HostKind,
    /// Container height before the document reports one (valid range: 1-20000).
    pub fallback_height: u32,
    /// Enable webview devtools (always on in debug builds).
    pub devtools: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: HostKind::default(),
            fallback_height: trialfinder_common::DEFAULT_CONTAINER_HEIGHT,
            devtools: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_targets_default_to_bridge() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(HostKind::default(), HostKind::Bridge);
    }

    #[test]
    fn host_kind_serialization() {
        let json = serde_json::to_string(&HostKind::Frame).unwrap();
        assert_eq!(json, "\"frame\"");
        let parsed: HostKind = serde_json::from_str("\"bridge\"").unwrap();
        assert_eq!(parsed, HostKind::Bridge);
    }
}
