//! Document hosts.
//!
//! A [`DocumentHost`] turns a [`Bridge`] into a live webview inside the
//! shell window. Two hosts exist:
//!
//! - [`BridgeHost`]: location injection, interception scripts, IPC message
//!   channel and navigation veto.
//! - [`FrameHost`]: the widget in an inline frame, with the webview's
//!   native geolocation and navigation behaviour.

mod bridge_host;
mod frame_host;
mod handle;
mod handlers;
mod settings;
mod sink;

pub use bridge_host::BridgeHost;
pub use frame_host::FrameHost;
pub use handle::DocumentHandle;
pub use settings::{DocumentSettings, MixedContentPolicy};
pub use sink::EventSink;

use tracing::debug;
use trialfinder_config::schema::HostKind;
use wry::raw_window_handle::HasWindowHandle;

use crate::bridge::Bridge;
use crate::events::BridgeEvent;

pub trait DocumentHost {
    fn kind(&self) -> HostKind;

    /// Build the widget document as a child of `parent`, positioned at
    /// `bounds`. Marks the bridge's document as built on success.
    fn build(
        &self,
        parent: &dyn HasWindowHandle,
        bounds: wry::Rect,
        bridge: &mut Bridge,
    ) -> Result<DocumentHandle, wry::Error>;

    /// Event queue fed by this host's webview callbacks.
    fn sink(&self) -> &EventSink;

    /// Drain all pending events.
    fn drain_events(&self) -> Vec<BridgeEvent> {
        self.sink().drain()
    }

    /// Tear down a document built by this host.
    fn destroy(&self, handle: DocumentHandle) {
        let kind = handle.kind();
        drop(handle);
        debug!(?kind, "document destroyed");
        self.sink().push(BridgeEvent::Closed);
    }
}

/// Construct the host for `kind`.
pub fn host_for(kind: HostKind, settings: DocumentSettings) -> Box<dyn DocumentHost> {
    match kind {
        HostKind::Bridge => Box::new(BridgeHost::new(settings)),
        HostKind::Frame => Box::new(FrameHost::new(settings)),
    }
}
