use serde::{Deserialize, Serialize};

/// A single position fix. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Accuracy tier requested from the location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
}

/// Outcome of a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_validity() {
        assert!(GeoCoordinate::new(37.0, -122.0).is_valid());
        assert!(GeoCoordinate::new(-90.0, 180.0).is_valid());
        assert!(!GeoCoordinate::new(91.0, 0.0).is_valid());
        assert!(!GeoCoordinate::new(0.0, -180.5).is_valid());
        assert!(!GeoCoordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn default_accuracy_is_balanced() {
        assert_eq!(Accuracy::default(), Accuracy::Balanced);
    }

    #[test]
    fn permission_status_serialization() {
        let json = serde_json::to_string(&PermissionStatus::Denied).unwrap();
        assert_eq!(json, "\"denied\"");
        let parsed: PermissionStatus = serde_json::from_str("\"granted\"").unwrap();
        assert!(parsed.is_granted());
    }
}
