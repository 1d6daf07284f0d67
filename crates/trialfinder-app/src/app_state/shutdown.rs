//! Graceful shutdown: destroy webviews, stop the location task.

use std::time::Duration;

use super::core::TrialFinderApp;

impl TrialFinderApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Destroy the widget document (no more bridge events)
    /// 2. Drop the location receiver so a late result is discarded
    /// 3. Shut down the tokio runtime
    /// 4. Drop the header and the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(document) = self.document.take() {
            self.host.destroy(document);
        }
        self.host.drain_events();

        self.location_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.header = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
