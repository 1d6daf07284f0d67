//! Internal types and constants for the app state module.

use std::time::Duration;

use trialfinder_common::{BridgeError, GeoCoordinate};

/// Outcome of the one-shot location task.
pub(super) type LocationResult = Result<GeoCoordinate, BridgeError>;

/// How often to poll for bridge and location events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
