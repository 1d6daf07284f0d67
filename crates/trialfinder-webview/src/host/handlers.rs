use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{BridgeEvent, PageLoadState};
use crate::navigation::{self, NavigationDecision};

use super::EventSink;

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        debug!(body_len = body.len(), "IPC message from document");
        sink.push(BridgeEvent::Message { body });
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        sink.push(BridgeEvent::PageLoad { state, url });
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| match navigation::decide(&url) {
        NavigationDecision::Allow => {
            debug!(url = %url, "navigation allowed");
            true
        }
        NavigationDecision::OpenExternally => {
            warn!(url = %url, "navigation vetoed, opening externally");
            sink.push(BridgeEvent::ExternalNavigation { url });
            false
        }
    })
}

/// New windows never open in-document. Web URLs are sent to the external
/// opener, anything else is dropped.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        if navigation::is_web_url(&url) {
            debug!(url = %url, "new window request, opening externally");
            sink.push(BridgeEvent::ExternalNavigation { url });
        } else {
            debug!(url = %url, "new window request dropped");
        }
        false
    })
}
