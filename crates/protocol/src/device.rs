use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// A named fixed resolution representing a real or hypothetical screen.
///
/// Immutable once constructed; width and height are logical pixels and are
/// strictly positive — the controller validates user input before ever
/// building one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: SharedStr,
    pub width: u32,
    pub height: u32,
}

impl DeviceProfile {
    pub fn new(name: impl Into<SharedStr>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl std::fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{}px)", self.name, self.width, self.height)
    }
}
