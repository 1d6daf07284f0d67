use tracing::debug;
use trialfinder_config::schema::HostKind;
use wry::WebView;

/// Handle to a built widget document.
pub struct DocumentHandle {
    pub(super) webview: WebView,
    pub(super) kind: HostKind,
}

impl DocumentHandle {
    /// Which host built this document.
    pub fn kind(&self) -> HostKind {
        self.kind
    }

    /// Evaluate a bridge script in the live document.
    ///
    /// Frame documents carry no bridge, so this is a no-op for them.
    pub fn inject_script(&self, js: &str) -> Result<(), wry::Error> {
        if self.kind == HostKind::Frame {
            debug!("frame document, script not injected");
            return Ok(());
        }
        self.webview.evaluate_script(js)
    }

    /// Set the document bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
