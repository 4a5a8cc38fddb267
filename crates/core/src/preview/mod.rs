pub mod scale;
pub mod state;

pub use scale::{FRAME_BORDER, FrameTransform, scale_to_fit};
pub use state::{CUSTOM_LABEL, Field, FrameClass, Origin, PreviewState, Selection};
