//! TrialFinderApp struct definition and constructor.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use trialfinder_common::{ContainerHeight, WidgetId};
use trialfinder_config::schema::TrialFinderConfig;
use trialfinder_platform::{SystemUrlOpener, UrlOpener};
use trialfinder_webview::{host_for, Bridge, DocumentHandle, DocumentHost, DocumentSettings};

use super::types::LocationResult;

/// Top-level application state.
pub struct TrialFinderApp {
    pub(super) config: TrialFinderConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) header: Option<wry::WebView>,

    // Widget document
    pub(super) host: Box<dyn DocumentHost>,
    pub(super) document: Option<DocumentHandle>,
    pub(super) bridge: Bridge,
    pub(super) opener: Box<dyn UrlOpener>,
    // Whether the document's own scrolling is switched on
    pub(super) document_scrolls: bool,

    // One-shot location fetch
    pub(super) location_rx: Option<Receiver<LocationResult>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl TrialFinderApp {
    pub fn new(config: TrialFinderConfig) -> Self {
        Self::with_opener(config, Box::new(SystemUrlOpener))
    }

    pub(super) fn with_opener(config: TrialFinderConfig, opener: Box<dyn UrlOpener>) -> Self {
        let settings = DocumentSettings {
            devtools: config.bridge.devtools,
            ..Default::default()
        };
        let bridge = Bridge::new(
            WidgetId::new(config.widget.id.clone()),
            ContainerHeight(config.bridge.fallback_height),
        );
        Self {
            host: host_for(config.bridge.host, settings),
            config,
            window: None,
            header: None,
            document: None,
            bridge,
            opener,
            document_scrolls: false,
            location_rx: None,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

#[cfg(test)]
pub(super) mod testing {
    use std::sync::{Arc, Mutex};

    use trialfinder_common::PlatformError;
    use trialfinder_config::schema::TrialFinderConfig;
    use trialfinder_platform::UrlOpener;

    use super::TrialFinderApp;

    /// Opener that records URLs instead of launching a browser.
    #[derive(Clone, Default)]
    pub struct RecordingOpener(pub Arc<Mutex<Vec<String>>>);

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), PlatformError> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    pub fn app() -> (TrialFinderApp, RecordingOpener) {
        let opener = RecordingOpener::default();
        let app = TrialFinderApp::with_opener(TrialFinderConfig::default(), Box::new(opener.clone()));
        (app, opener)
    }
}

#[cfg(test)]
mod tests {
    use trialfinder_common::ContainerHeight;
    use trialfinder_config::schema::{HostKind, TrialFinderConfig};
    use trialfinder_webview::BridgePhase;

    use super::TrialFinderApp;

    #[test]
    fn new_app_is_unmounted() {
        let app = TrialFinderApp::new(TrialFinderConfig::default());
        assert!(app.window.is_none());
        assert!(app.document.is_none());
        assert_eq!(app.bridge.phase(), BridgePhase::Initializing);
        assert_eq!(app.bridge.container_height(), ContainerHeight(600));
        assert_eq!(app.bridge.widget_id().as_str(), "trial-finder");
    }

    #[test]
    fn host_follows_config() {
        let mut config = TrialFinderConfig::default();
        config.bridge.host = HostKind::Frame;
        config.bridge.fallback_height = 420;
        let app = TrialFinderApp::new(config);
        assert_eq!(app.host.kind(), HostKind::Frame);
        assert_eq!(app.bridge.container_height(), ContainerHeight(420));
    }
}
