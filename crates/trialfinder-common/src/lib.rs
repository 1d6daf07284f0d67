//! Types and errors shared by every trialfinder crate.

pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, PlatformError, TrialFinderError};
pub use types::{
    Accuracy, ContainerHeight, GeoCoordinate, PermissionStatus, Rect, WidgetId,
    DEFAULT_CONTAINER_HEIGHT,
};

pub type Result<T> = std::result::Result<T, TrialFinderError>;
