use async_trait::async_trait;
use trialfinder_common::{Accuracy, GeoCoordinate, PermissionStatus, PlatformError};

use super::LocationService;

/// Location switched off. Permission is always denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationService for NoLocation {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<GeoCoordinate, PlatformError> {
        Err(PlatformError::NotSupported("location is disabled".into()))
    }

    fn name(&self) -> &str {
        "none"
    }
}
