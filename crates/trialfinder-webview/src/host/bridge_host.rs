use tracing::info;
use trialfinder_config::schema::HostKind;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::bridge::Bridge;
use crate::content;

use super::handlers::{
    attach_ipc_handler, attach_navigation_handler, attach_new_window_handler,
    attach_page_load_handler,
};
use super::{DocumentHandle, DocumentHost, DocumentSettings, EventSink};

/// Full bridge host.
pub struct BridgeHost {
    settings: DocumentSettings,
    sink: EventSink,
}

impl BridgeHost {
    pub fn new(settings: DocumentSettings) -> Self {
        Self {
            settings,
            sink: EventSink::new(),
        }
    }
}

impl DocumentHost for BridgeHost {
    fn kind(&self) -> HostKind {
        HostKind::Bridge
    }

    fn build(
        &self,
        parent: &dyn HasWindowHandle,
        bounds: wry::Rect,
        bridge: &mut Bridge,
    ) -> Result<DocumentHandle, wry::Error> {
        let markup = content::widget_document(bridge.widget_id(), &self.settings);
        let scripts = bridge.initialization_scripts();

        let mut builder = self
            .settings
            .apply(WebViewBuilder::new().with_bounds(bounds).with_focused(false));

        for script in &scripts {
            builder = builder.with_initialization_script(script);
        }

        builder = attach_ipc_handler(builder, self.sink.clone());
        builder = attach_page_load_handler(builder, self.sink.clone());
        builder = attach_navigation_handler(builder, self.sink.clone());
        builder = attach_new_window_handler(builder, self.sink.clone());

        let webview = builder.with_html(markup).build_as_child(&parent)?;
        bridge.on_document_built();

        info!(
            widget = %bridge.widget_id(),
            scripts = scripts.len(),
            "bridge document built"
        );

        Ok(DocumentHandle {
            webview,
            kind: HostKind::Bridge,
        })
    }

    fn sink(&self) -> &EventSink {
        &self.sink
    }
}
