//! Message channel between the embedded document and the bridge.
//!
//! The document posts JSON with a `kind` discriminator through
//! `window.ipc.postMessage(...)`:
//!
//! ```json
//! {"kind": "resize", "height": 842}
//! {"kind": "external_link", "url": "https://example.com/x"}
//! ```

use serde::Deserialize;
use trialfinder_common::BridgeError;

/// A message from the document to the bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeMessage {
    /// Current content height in CSS pixels.
    Resize { height: f64 },
    /// The document tried to leave for `url`.
    ExternalLink { url: String },
}

impl BridgeMessage {
    /// Parse a raw IPC body.
    ///
    /// Anything that is not one of the known shapes comes back as
    /// [`BridgeError::MalformedMessage`].
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }
}

/// JS expression that posts a message object to the bridge.
pub(crate) const JS_POST_FN: &str = "function (msg) { \
    try { window.ipc.postMessage(JSON.stringify(msg)); } catch (e) {} \
}";
