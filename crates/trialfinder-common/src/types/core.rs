use serde::{Deserialize, Serialize};
use std::fmt;

/// Height the embedding container uses before the document reports one.
pub const DEFAULT_CONTAINER_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Opaque identifier of the remote widget configuration to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel height of the container that hosts the embedded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerHeight(pub u32);

impl ContainerHeight {
    /// Convert a height reported by the document.
    ///
    /// Returns `None` for values no pixel height can represent (NaN,
    /// infinities, negatives, anything past `u32::MAX`). Every other value
    /// is taken as-is, rounded to the nearest pixel.
    pub fn from_report(height: f64) -> Option<Self> {
        if !height.is_finite() || height < 0.0 {
            return None;
        }
        let rounded = height.round();
        if rounded > u32::MAX as f64 {
            return None;
        }
        Some(Self(rounded as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ContainerHeight {
    fn default() -> Self {
        Self(DEFAULT_CONTAINER_HEIGHT)
    }
}

impl fmt::Display for ContainerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
