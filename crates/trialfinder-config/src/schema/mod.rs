//! Configuration schema types for trialfinder.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod location;
mod system;
mod widget;
mod window;

pub use bridge::*;
pub use location::*;
pub use system::*;
pub use widget::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrialFinderConfig {
    pub widget: WidgetConfig,
    pub window: WindowConfig,
    pub bridge: BridgeConfig,
    pub location: LocationConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
