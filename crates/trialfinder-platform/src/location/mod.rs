//! One-shot location services.
//!
//! The bridge asks for foreground permission once, then for a single
//! position fix at [`Accuracy::Balanced`]. There is no continuous tracking
//! and coordinates are never persisted.

mod fixed;
mod ip;
mod none;

pub use fixed::FixedLocation;
pub use ip::IpLocation;
pub use none::NoLocation;

use std::time::Duration;

use async_trait::async_trait;
use trialfinder_common::{Accuracy, BridgeError, GeoCoordinate, PermissionStatus, PlatformError};
use trialfinder_config::schema::{LocationConfig, LocationMode, PermissionPolicy};
use tracing::{debug, info, warn};

/// A source of device position.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Foreground permission request. Called once per screen mount.
    async fn request_permission(&self) -> PermissionStatus;

    /// A single position fix at the requested accuracy.
    async fn current_position(&self, accuracy: Accuracy) -> Result<GeoCoordinate, PlatformError>;

    /// Service name for logs.
    fn name(&self) -> &str;
}

/// Ask for permission, then fetch one coordinate.
///
/// A denied permission short-circuits without touching the position source.
/// Every failure comes back as a [`BridgeError`] the caller can log and drop.
pub async fn fetch_coordinate(
    service: &dyn LocationService,
    accuracy: Accuracy,
) -> Result<GeoCoordinate, BridgeError> {
    let status = service.request_permission().await;
    if !status.is_granted() {
        info!(service = service.name(), "location permission denied");
        return Err(BridgeError::PermissionDenied);
    }

    let coordinate = service
        .current_position(accuracy)
        .await
        .map_err(|e| BridgeError::LocationUnavailable(e.to_string()))?;

    if !coordinate.is_valid() {
        warn!(service = service.name(), ?coordinate, "location service returned an invalid coordinate");
        return Err(BridgeError::LocationUnavailable(format!(
            "coordinate out of range: {}, {}",
            coordinate.latitude, coordinate.longitude
        )));
    }

    debug!(service = service.name(), "location resolved");
    Ok(coordinate)
}

/// Build the service selected by `[location]`.
pub fn service_from_config(config: &LocationConfig) -> Box<dyn LocationService> {
    let permission = match config.permission {
        PermissionPolicy::Granted => PermissionStatus::Granted,
        PermissionPolicy::Denied => PermissionStatus::Denied,
    };

    match config.mode {
        LocationMode::Disabled => Box::new(NoLocation),
        LocationMode::Fixed => match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => {
                Box::new(FixedLocation::new(GeoCoordinate::new(lat, lon), permission))
            }
            _ => {
                warn!("fixed location mode without coordinates, location disabled");
                Box::new(NoLocation)
            }
        },
        LocationMode::Ip => Box::new(IpLocation::new(
            config.lookup_url.clone(),
            Duration::from_secs(u64::from(config.timeout_secs)),
            permission,
        )),
    }
}
