//! Widget document lifecycle and bridge event relay.

use std::sync::Arc;

use winit::window::Window;

use trialfinder_common::{Rect, TrialFinderError};
use trialfinder_webview::{scripts, BridgeEffect, BridgeEvent, PageLoadState};

use super::core::TrialFinderApp;
use super::layout::rect_to_wry;

impl TrialFinderApp {
    /// Build the widget document under the header.
    pub(super) fn build_document(
        &mut self,
        window: &Arc<Window>,
        rect: &Rect,
    ) -> trialfinder_common::Result<()> {
        let handle = self
            .host
            .build(window.as_ref(), rect_to_wry(rect), &mut self.bridge)
            .map_err(|e| TrialFinderError::WebView(e.to_string()))?;
        tracing::info!(host = ?handle.kind(), "Widget document created");
        self.document = Some(handle);
        Ok(())
    }

    /// Evaluate a bridge script in the live document.
    pub(super) fn inject_script(&self, script: &str) {
        let Some(ref document) = self.document else {
            return;
        };
        if let Err(e) = document.inject_script(script) {
            tracing::warn!(error = %e, "Failed to inject script");
        }
    }

    /// Drain and handle every pending document event.
    pub(super) fn poll_document_events(&mut self) {
        for event in self.host.drain_events() {
            self.handle_bridge_event(event);
        }
    }

    pub(super) fn handle_bridge_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::PageLoad { state, url } => {
                tracing::debug!(?state, url = %url, "Document page load");
                if self.bridge.on_page_load(state) {
                    self.mark_header_ready();
                }
                if state == PageLoadState::Finished {
                    for script in self.after_load_scripts() {
                        self.inject_script(&script);
                    }
                }
            }
            BridgeEvent::Message { body } => {
                let effect = self.bridge.handle_message(&body, self.opener.as_ref());
                self.apply_effect(effect);
            }
            BridgeEvent::ExternalNavigation { url } => {
                let effect = self.bridge.open_external(&url, self.opener.as_ref());
                self.apply_effect(effect);
            }
            BridgeEvent::Closed => {
                tracing::debug!("Document closed event");
            }
        }
    }

    /// Scripts a finished load wipes out and that must be evaluated again:
    /// a geolocation override that arrived after the document was built,
    /// and scrolling switched on for clipped content.
    pub(super) fn after_load_scripts(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(script) = self.bridge.live_override_script() {
            out.push(script);
        }
        if self.document_scrolls {
            out.push(scripts::document_scrolling(true));
        }
        out
    }

    fn apply_effect(&mut self, effect: BridgeEffect) {
        match effect {
            BridgeEffect::Resized(height) => {
                tracing::debug!(%height, "Relayout for new container height");
                self.sync_bounds();
            }
            BridgeEffect::OpenedExternal(url) => {
                tracing::debug!(url = %url, "Link opened externally");
            }
            BridgeEffect::OpenFailed(_) | BridgeEffect::Ignored => {}
        }
    }
}
