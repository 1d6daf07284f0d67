//! Events raised by the embedded document host.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Pushed by webview callbacks, drained by the shell's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Raw message posted by the document over the IPC channel.
    Message { body: String },
    /// A navigation or new-window request was vetoed and should leave the app.
    ExternalNavigation { url: String },
    /// The document was destroyed.
    Closed,
}
