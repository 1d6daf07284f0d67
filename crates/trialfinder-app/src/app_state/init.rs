//! Window creation and screen composition.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::TrialFinderApp;

impl TrialFinderApp {
    /// Create the window, the header and the widget document, and mount the
    /// bridge. Returns `false` if the window could not be created and the
    /// event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(Arc::clone(&window));

        let Some(layout) = self.current_layout() else {
            return false;
        };

        self.build_header(&window, &layout.header);

        // The location fetch and the document load run concurrently.
        self.bridge.mount();
        self.start_location();
        if let Err(e) = self.build_document(&window, &layout.document) {
            tracing::error!("Failed to create widget document: {e}");
        }
        self.set_document_scrolling(layout.clipped);

        tracing::info!(widget = %self.bridge.widget_id(), "Window created and widget mounted");
        true
    }
}
