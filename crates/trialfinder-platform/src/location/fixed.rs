use async_trait::async_trait;
use trialfinder_common::{Accuracy, GeoCoordinate, PermissionStatus, PlatformError};

use super::LocationService;

/// Always reports the same coordinate. Useful for demos and for pinning
/// the search area on kiosk installs.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    coordinate: GeoCoordinate,
    permission: PermissionStatus,
}

impl FixedLocation {
    pub fn new(coordinate: GeoCoordinate, permission: PermissionStatus) -> Self {
        Self {
            coordinate,
            permission,
        }
    }
}

#[async_trait]
impl LocationService for FixedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<GeoCoordinate, PlatformError> {
        Ok(self.coordinate)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
