//! Approximate position from an IP geolocation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use trialfinder_common::{Accuracy, GeoCoordinate, PermissionStatus, PlatformError};
use tracing::debug;

use super::LocationService;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of a lookup response. Providers disagree on field names, so both
/// the long and short spellings are accepted.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(alias = "lat")]
    latitude: Option<f64>,
    #[serde(alias = "lon", alias = "lng")]
    longitude: Option<f64>,
}

/// Position resolved by an HTTP JSON lookup of the caller's public IP.
///
/// IP lookups only resolve to city level, so every accuracy tier gets
/// the same answer.
pub struct IpLocation {
    lookup_url: String,
    timeout: Duration,
    permission: PermissionStatus,
}

impl IpLocation {
    pub fn new(lookup_url: String, timeout: Duration, permission: PermissionStatus) -> Self {
        Self {
            lookup_url,
            timeout,
            permission,
        }
    }

    fn client(&self) -> Result<reqwest::Client, PlatformError> {
        reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(self.timeout))
            .timeout(self.timeout)
            .build()
            .map_err(|e| PlatformError::LocationError(format!("http client: {e}")))
    }
}

#[async_trait]
impl LocationService for IpLocation {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self, accuracy: Accuracy) -> Result<GeoCoordinate, PlatformError> {
        debug!(url = %self.lookup_url, ?accuracy, "requesting ip location");

        let response = self
            .client()?
            .get(&self.lookup_url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| PlatformError::LocationError(format!("lookup failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlatformError::LocationError(format!(
                "lookup returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::LocationError(format!("lookup body: {e}")))?;
        parse_lookup(&body)
    }

    fn name(&self) -> &str {
        "ip"
    }
}

fn parse_lookup(body: &str) -> Result<GeoCoordinate, PlatformError> {
    let parsed: LookupResponse = serde_json::from_str(body)
        .map_err(|e| PlatformError::LocationError(format!("lookup response: {e}")))?;
    match (parsed.latitude, parsed.longitude) {
        (Some(lat), Some(lon)) => Ok(GeoCoordinate::new(lat, lon)),
        _ => Err(PlatformError::LocationError(
            "lookup response has no coordinate".into(),
        )),
    }
}
