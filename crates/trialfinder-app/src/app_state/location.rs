//! One-shot location fetch on a background tokio runtime.

use trialfinder_common::BridgeError;
use trialfinder_config::schema::HostKind;
use trialfinder_platform::{fetch_coordinate, service_from_config};

use super::core::TrialFinderApp;

impl TrialFinderApp {
    /// Ask for permission and one position fix. The result comes back
    /// through `location_rx` and is picked up by [`poll_location`].
    ///
    /// [`poll_location`]: TrialFinderApp::poll_location
    pub(super) fn start_location(&mut self) {
        if self.host.kind() == HostKind::Frame {
            // The frame keeps the webview's own geolocation.
            self.bridge.on_location_resolved(Err(BridgeError::LocationUnavailable(
                "frame host uses native geolocation".into(),
            )));
            return;
        }

        let service = service_from_config(&self.config.location);
        let accuracy = self.bridge.accuracy();
        let (tx, rx) = std::sync::mpsc::channel();

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        match rt {
            Ok(rt) => {
                rt.spawn(async move {
                    let result = fetch_coordinate(service.as_ref(), accuracy).await;
                    if tx.send(result).is_err() {
                        tracing::debug!("Shell gone, location result dropped");
                    }
                });
                self.tokio_runtime = Some(rt);
                self.location_rx = Some(rx);
                tracing::info!("Location request started");
            }
            Err(e) => {
                tracing::error!("Failed to create tokio runtime: {e}");
                self.bridge
                    .on_location_resolved(Err(BridgeError::LocationUnavailable(e.to_string())));
            }
        }
    }

    /// Pick up the location result (non-blocking).
    pub(super) fn poll_location(&mut self) {
        let Some(ref rx) = self.location_rx else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(std::sync::mpsc::TryRecvError::Empty) => return,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                Err(BridgeError::LocationUnavailable("location task ended".into()))
            }
        };
        self.location_rx = None;

        if let Some(script) = self.bridge.on_location_resolved(result) {
            self.inject_script(&script);
        }
    }
}
