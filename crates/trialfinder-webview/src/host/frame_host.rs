use tracing::info;
use trialfinder_config::schema::HostKind;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::bridge::Bridge;
use crate::content;

use super::handlers::attach_page_load_handler;
use super::{DocumentHandle, DocumentHost, DocumentSettings, EventSink};

/// Inline frame host. Only page loads are observed so the shell can drop
/// its loading indicator.
pub struct FrameHost {
    settings: DocumentSettings,
    sink: EventSink,
}

impl FrameHost {
    pub fn new(settings: DocumentSettings) -> Self {
        Self {
            settings,
            sink: EventSink::new(),
        }
    }
}

impl DocumentHost for FrameHost {
    fn kind(&self) -> HostKind {
        HostKind::Frame
    }

    fn build(
        &self,
        parent: &dyn HasWindowHandle,
        bounds: wry::Rect,
        bridge: &mut Bridge,
    ) -> Result<DocumentHandle, wry::Error> {
        let markup = content::frame_document(bridge.widget_id(), &self.settings);

        let builder = self
            .settings
            .apply(WebViewBuilder::new().with_bounds(bounds).with_focused(false));
        let builder = attach_page_load_handler(builder, self.sink.clone());

        let webview = builder.with_html(markup).build_as_child(&parent)?;
        bridge.on_document_built();

        info!(widget = %bridge.widget_id(), "frame document built");

        Ok(DocumentHandle {
            webview,
            kind: HostKind::Frame,
        })
    }

    fn sink(&self) -> &EventSink {
        &self.sink
    }
}
