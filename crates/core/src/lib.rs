pub mod catalog;
pub mod controller;
pub mod preview;

pub use catalog::{CatalogError, DeviceCatalog};
pub use controller::{Controller, ControllerError, DisplayHandle};
pub use preview::{Field, FrameClass, FrameTransform, Origin, PreviewState, Selection};
