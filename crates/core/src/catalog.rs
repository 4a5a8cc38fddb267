use framefit_protocol::{DeviceProfile, SharedStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown device profile: {0}")]
    NotFound(SharedStr),
}

/// Ordered collection of named device profiles.
///
/// Insertion order is display order — the dropdown shows profiles exactly as
/// they appear here. Static after construction; the synthetic "Custom"
/// selector entry is never stored, it exists only on the display side.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl DeviceCatalog {
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in preset catalog. The first entry is the phone-class
    /// default applied when a preview opens.
    pub fn builtin() -> Self {
        Self::new(vec![
            DeviceProfile::new("iPhone 15 Pro", 393, 852),
            DeviceProfile::new("Google Pixel 8", 412, 915),
            DeviceProfile::new("iPad Air", 820, 1180),
            DeviceProfile::new("Small Android Phone", 360, 640),
            DeviceProfile::new("Large Tablet (Landscape)", 1366, 1024),
        ])
    }

    /// All profiles in display order.
    pub fn list(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Look up a profile by name. An unknown name is a user input error,
    /// not a fault — callers abort the requested change and carry on.
    pub fn get(&self, name: &str) -> Result<&DeviceProfile, CatalogError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CatalogError::NotFound(SharedStr::from(name)))
    }

    /// The profile used as the initial resolution at preview-open time.
    pub fn default_profile(&self) -> Option<&DeviceProfile> {
        self.profiles.first()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
