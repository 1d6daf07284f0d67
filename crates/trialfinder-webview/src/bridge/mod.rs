//! The embedding bridge state machine.
//!
//! One [`Bridge`] per mounted screen. It owns the widget identifier, the
//! one-shot location result, the container height and the loading flag.
//! The document host and the location task feed it events from the UI
//! thread; it answers with scripts to evaluate and [`BridgeEffect`]s for
//! the shell to apply.

use trialfinder_common::{Accuracy, BridgeError, ContainerHeight, GeoCoordinate, WidgetId};
use trialfinder_platform::UrlOpener;
use tracing::{debug, info, warn};

use crate::events::PageLoadState;
use crate::ipc::BridgeMessage;
use crate::scripts;

/// Where the bridge is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePhase {
    /// Created but not mounted yet.
    Initializing,
    /// Waiting for the permission and position fix.
    LocationRequested,
    /// Location settled, document still loading.
    Loading,
    /// Document finished its initial load.
    Ready,
}

/// Side effect of a handled message or navigation.
#[derive(Debug)]
pub enum BridgeEffect {
    /// Container height changed; the shell should relayout.
    Resized(ContainerHeight),
    /// URL handed to the external opener.
    OpenedExternal(String),
    /// The external opener failed. Already logged.
    OpenFailed(BridgeError),
    /// Message discarded.
    Ignored,
}

pub struct Bridge {
    widget_id: WidgetId,
    accuracy: Accuracy,
    mounted: bool,
    location_pending: bool,
    coordinate: Option<GeoCoordinate>,
    height: ContainerHeight,
    loading: bool,
    document_built: bool,
    /// Coordinate arrived after the document was built, so it is not part
    /// of the initialization scripts and must be re-evaluated on reloads.
    late_override: bool,
}

impl Bridge {
    pub fn new(widget_id: WidgetId, fallback_height: ContainerHeight) -> Self {
        Self {
            widget_id,
            accuracy: Accuracy::Balanced,
            mounted: false,
            location_pending: false,
            coordinate: None,
            height: fallback_height,
            loading: true,
            document_built: false,
            late_override: false,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    /// Accuracy tier for the position fix.
    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Enter `LocationRequested`. The caller starts the permission request
    /// and position fetch and reports back through
    /// [`on_location_resolved`](Self::on_location_resolved).
    pub fn mount(&mut self) {
        if self.mounted {
            warn!(widget = %self.widget_id, "bridge already mounted");
            return;
        }
        self.mounted = true;
        self.location_pending = true;
        info!(widget = %self.widget_id, "bridge mounted, requesting location");
    }

    /// Record the outcome of the location fetch.
    ///
    /// Returns the geolocation override to evaluate in the live document
    /// when the coordinate arrives after the document was built. Denial and
    /// failure are logged and the bridge carries on without a coordinate.
    pub fn on_location_resolved(
        &mut self,
        result: Result<GeoCoordinate, BridgeError>,
    ) -> Option<String> {
        if !self.location_pending {
            debug!("location result outside a pending request, dropped");
            return None;
        }
        self.location_pending = false;

        match result {
            Ok(coordinate) => {
                self.coordinate = Some(coordinate);
                debug!(widget = %self.widget_id, "coordinate stored");
                if self.document_built {
                    self.late_override = true;
                    self.live_override_script()
                } else {
                    None
                }
            }
            Err(e) => {
                info!(error = %e, "continuing without a coordinate");
                None
            }
        }
    }

    /// Scripts for a document about to be built.
    pub fn initialization_scripts(&self) -> Vec<String> {
        scripts::initialization_scripts(self.coordinate, self.accuracy)
    }

    /// The document host finished constructing the document.
    pub fn on_document_built(&mut self) {
        self.document_built = true;
    }

    /// Override to evaluate after each page load when the coordinate was not
    /// part of the initialization scripts.
    pub fn live_override_script(&self) -> Option<String> {
        match self.coordinate {
            Some(coordinate) if self.late_override => {
                Some(scripts::geolocation_override(coordinate, self.accuracy))
            }
            _ => None,
        }
    }

    /// Feed a page load event. Returns `true` on the transition to ready.
    ///
    /// The loading flag only ever goes from `true` to `false`.
    pub fn on_page_load(&mut self, state: PageLoadState) -> bool {
        if state == PageLoadState::Finished && self.loading {
            self.loading = false;
            info!(widget = %self.widget_id, "widget document ready");
            return true;
        }
        false
    }

    /// Handle a raw message from the document's IPC channel.
    pub fn handle_message(&mut self, raw: &str, opener: &dyn UrlOpener) -> BridgeEffect {
        let message = match BridgeMessage::parse(raw) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, body_len = raw.len(), "bridge message discarded");
                return BridgeEffect::Ignored;
            }
        };

        match message {
            BridgeMessage::Resize { height } => match ContainerHeight::from_report(height) {
                Some(height) => {
                    self.height = height;
                    debug!(%height, "container resized");
                    BridgeEffect::Resized(height)
                }
                None => {
                    debug!(height, "resize with unusable height discarded");
                    BridgeEffect::Ignored
                }
            },
            BridgeMessage::ExternalLink { url } => self.open_external(&url, opener),
        }
    }

    /// Hand `url` to the external opener exactly once.
    pub fn open_external(&self, url: &str, opener: &dyn UrlOpener) -> BridgeEffect {
        match opener.open(url) {
            Ok(()) => BridgeEffect::OpenedExternal(url.to_string()),
            Err(e) => {
                let error = BridgeError::ExternalOpenFailure {
                    url: url.to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %error, "external link not opened");
                BridgeEffect::OpenFailed(error)
            }
        }
    }

    pub fn phase(&self) -> BridgePhase {
        if !self.mounted {
            BridgePhase::Initializing
        } else if !self.loading {
            BridgePhase::Ready
        } else if self.location_pending {
            BridgePhase::LocationRequested
        } else {
            BridgePhase::Loading
        }
    }

    pub fn container_height(&self) -> ContainerHeight {
        self.height
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        self.coordinate
    }
}
