//! Screen layout: header strip on top, widget document below it.

use trialfinder_common::{ContainerHeight, Rect};
use trialfinder_webview::scripts;

use super::core::TrialFinderApp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ScreenLayout {
    pub header: Rect,
    pub document: Rect,
    /// The container is taller than the space under the header, so the
    /// document has to scroll the rest into view.
    pub clipped: bool,
}

/// Lay out a `width` x `height` logical viewport.
///
/// The document height follows the container height, capped by the space
/// left under the header.
pub(super) fn compute_layout(
    width: f64,
    height: f64,
    header_height: f64,
    container: ContainerHeight,
) -> ScreenLayout {
    let header_h = header_height.min(height).max(0.0);
    let available = (height - header_h).max(0.0);
    let wanted = f64::from(container.get());
    ScreenLayout {
        header: Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: header_h,
        },
        document: Rect {
            x: 0.0,
            y: header_h,
            width,
            height: wanted.min(available),
        },
        clipped: wanted > available,
    }
}

/// Convert a logical `Rect` to a wry `Rect`.
pub(super) fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

impl TrialFinderApp {
    /// Layout for the current window size, if there is a window.
    pub(super) fn current_layout(&self) -> Option<ScreenLayout> {
        let window = self.window.as_ref()?;
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Some(compute_layout(
            size.width,
            size.height,
            f64::from(self.config.window.header_height),
            self.bridge.container_height(),
        ))
    }

    /// Move the header and the document to match the current layout.
    pub(super) fn sync_bounds(&mut self) {
        let Some(layout) = self.current_layout() else {
            return;
        };

        if let Some(ref header) = self.header {
            if let Err(e) = header.set_bounds(rect_to_wry(&layout.header)) {
                tracing::warn!(error = %e, "Failed to update header bounds");
            }
        }
        if let Some(ref document) = self.document {
            if let Err(e) = document.set_bounds(rect_to_wry(&layout.document)) {
                tracing::warn!(error = %e, "Failed to update document bounds");
            }
        }
        self.set_document_scrolling(layout.clipped);
    }

    /// Let the document scroll while it is clipped, and only then.
    pub(super) fn set_document_scrolling(&mut self, enabled: bool) {
        if self.document_scrolls == enabled {
            return;
        }
        tracing::debug!(enabled, "Document scrolling changed");
        self.document_scrolls = enabled;
        self.inject_script(&scripts::document_scrolling(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_sits_under_header() {
        let layout = compute_layout(430.0, 900.0, 96.0, ContainerHeight(600));
        assert_eq!(layout.header.height, 96.0);
        assert_eq!(layout.document.y, 96.0);
        assert_eq!(layout.document.width, 430.0);
        assert_eq!(layout.document.height, 600.0);
    }

    #[test]
    fn document_height_follows_container() {
        let layout = compute_layout(430.0, 900.0, 96.0, ContainerHeight(842));
        assert_eq!(layout.document.height, 804.0);
        let layout = compute_layout(430.0, 2000.0, 96.0, ContainerHeight(842));
        assert_eq!(layout.document.height, 842.0);
    }

    #[test]
    fn tall_content_is_capped_and_marked_clipped() {
        let layout = compute_layout(430.0, 900.0, 96.0, ContainerHeight(2000));
        assert_eq!(layout.document.height, 804.0);
        assert!(layout.clipped);

        let layout = compute_layout(430.0, 900.0, 96.0, ContainerHeight(804));
        assert_eq!(layout.document.height, 804.0);
        assert!(!layout.clipped);
    }

    #[test]
    fn scrolling_follows_clipping() {
        let (mut app, _) = crate::app_state::core::testing::app();
        assert!(!app.document_scrolls);

        app.set_document_scrolling(true);
        assert!(app.document_scrolls);
        app.set_document_scrolling(true);
        assert!(app.document_scrolls);

        app.set_document_scrolling(false);
        assert!(!app.document_scrolls);
    }

    #[test]
    fn tiny_window_never_goes_negative() {
        let layout = compute_layout(100.0, 50.0, 96.0, ContainerHeight(600));
        assert_eq!(layout.header.height, 50.0);
        assert_eq!(layout.document.height, 0.0);
        assert!(layout.clipped);
    }

    #[test]
    fn zero_header_gives_document_the_window() {
        let layout = compute_layout(300.0, 700.0, 0.0, ContainerHeight(10_000));
        assert_eq!(layout.document.y, 0.0);
        assert_eq!(layout.document.height, 700.0);
    }

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let rect = Rect {
            x: 0.0,
            y: 96.0,
            width: 430.0,
            height: 600.0,
        };
        let wry_rect = rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.y - 96.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 430.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
