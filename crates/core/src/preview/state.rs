use framefit_protocol::{DeviceProfile, HostCommand, SharedStr, Size};

use crate::preview::scale::FrameTransform;

/// Dropdown label for the synthetic entry that represents "no preset".
pub const CUSTOM_LABEL: &str = "Custom";

/// Cosmetic size class of the device frame. Larger devices get flatter
/// corners; the branch has no functional consequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameClass {
    Compact,
    Large,
}

impl FrameClass {
    pub fn classify(width: u32, height: u32) -> Self {
        if width > 600 || height > 1000 {
            FrameClass::Large
        } else {
            FrameClass::Compact
        }
    }

    /// Corner radius of the device frame in logical pixels.
    pub fn corner_radius(self) -> f32 {
        match self {
            FrameClass::Large => 15.0,
            FrameClass::Compact => 25.0,
        }
    }
}

/// One of the two numeric input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
}

/// The trigger source of a dimension change. Decides which side effects are
/// suppressed: a user edit must not overwrite the field being typed in, and
/// only preset/host origins may select a named dropdown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    HostPush,
    PresetPick,
    UserEdit(Field),
}

/// Current dropdown selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Device(SharedStr),
    Custom,
}

impl Selection {
    pub fn label(&self) -> &str {
        match self {
            Selection::Device(name) => name,
            Selection::Custom => CUSTOM_LABEL,
        }
    }
}

/// Display-side state: the applied dimensions, dropdown model and selection,
/// input-field text buffers, and the derived scale transform.
///
/// Invariant: `width`/`height` always hold the last applied dimensions, and
/// a non-custom selection always names a profile with exactly those
/// dimensions. The transform is derived, never persisted — it is recomputed
/// from the just-applied numbers on every dimension change and from the
/// stored numbers on container resize.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    width: u32,
    height: u32,
    selection: Selection,
    url: String,
    pub width_field: String,
    pub height_field: String,
    frame_class: FrameClass,
    devices: Vec<DeviceProfile>,
    container: Option<Size>,
    transform: Option<FrameTransform>,
}

impl PreviewState {
    /// Starts at the phone-class default resolution; a conforming controller
    /// pushes the real catalog and dimensions immediately after the ready
    /// handshake.
    pub fn new() -> Self {
        let (width, height) = (393, 852);
        Self {
            width,
            height,
            selection: Selection::Custom,
            url: String::new(),
            width_field: width.to_string(),
            height_field: height.to_string(),
            frame_class: FrameClass::classify(width, height),
            devices: Vec::new(),
            container: None,
            transform: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn frame_class(&self) -> FrameClass {
        self.frame_class
    }

    /// Dropdown model in catalog order, without the synthetic Custom entry.
    pub fn devices(&self) -> &[DeviceProfile] {
        &self.devices
    }

    pub fn transform(&self) -> Option<FrameTransform> {
        self.transform
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Apply an incoming controller command.
    pub fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::LoadDevices { devices } => {
                // Full replacement, never an append.
                self.devices = devices;
                self.rematch_selection();
            }
            HostCommand::UpdateUrl { url } => self.url = url,
            HostCommand::UpdateDimensions { width, height } => {
                // A conforming controller never sends these; drop rather
                // than apply a degenerate frame.
                if width == 0 || height == 0 {
                    return;
                }
                self.apply_dimensions(width, height, Origin::HostPush);
            }
        }
    }

    /// The dimension/state reconciliation step.
    ///
    /// The frame is always laid out at true size — no rounding, no clamping
    /// to the container — and then shrunk visually by the transform. The
    /// transform is computed from the `width`/`height` arguments, never by
    /// re-measuring layout after the write: a measurement taken in the same
    /// step as a style write may still reflect the prior size.
    pub fn apply_dimensions(&mut self, width: u32, height: u32, origin: Origin) {
        self.width = width;
        self.height = height;
        self.frame_class = FrameClass::classify(width, height);

        // Reflect the applied values into the text fields, except the one
        // the user is actively typing into.
        if origin != Origin::UserEdit(Field::Width) {
            self.width_field = width.to_string();
        }
        if origin != Origin::UserEdit(Field::Height) {
            self.height_field = height.to_string();
        }

        self.selection = match origin {
            Origin::UserEdit(_) => Selection::Custom,
            Origin::HostPush | Origin::PresetPick => self.match_device(width, height),
        };

        self.refit(width, height);
    }

    /// Recompute the transform after a container/viewport resize.
    ///
    /// A resize carries no target dimensions, so this is the single path
    /// that reads the currently applied frame box — safe here because no
    /// style write preceded it in the same step.
    pub fn update_scale_on_resize(&mut self) {
        self.refit(self.width, self.height);
    }

    /// Record a new container size and rescale against it.
    pub fn resize_container(&mut self, container: Size) {
        self.container = Some(container);
        self.update_scale_on_resize();
    }

    /// Dropdown pick of a named preset. Unknown names are a no-op with no
    /// dimension change.
    pub fn select_preset(&mut self, name: &str) {
        let Some(profile) = self.devices.iter().find(|d| d.name == name) else {
            return;
        };
        let (width, height) = profile.dimensions();
        self.apply_dimensions(width, height, Origin::PresetPick);
    }

    /// Overwrite one input field and re-run the validation gate.
    pub fn edit_field(&mut self, field: Field, text: impl Into<String>) {
        match field {
            Field::Width => self.width_field = text.into(),
            Field::Height => self.height_field = text.into(),
        }
        self.commit_field_edit(field);
    }

    /// Validation gate for custom input: both fields must parse as positive
    /// integers before anything is applied. A partially-typed or invalid
    /// value in either field suppresses the update entirely, leaving the
    /// frame at its last valid size.
    pub fn commit_field_edit(&mut self, edited: Field) {
        let (Some(width), Some(height)) = (
            parse_positive(&self.width_field),
            parse_positive(&self.height_field),
        ) else {
            return;
        };
        self.apply_dimensions(width, height, Origin::UserEdit(edited));
    }

    fn match_device(&self, width: u32, height: u32) -> Selection {
        self.devices
            .iter()
            .find(|d| d.dimensions() == (width, height))
            .map(|d| Selection::Device(d.name.clone()))
            .unwrap_or(Selection::Custom)
    }

    fn rematch_selection(&mut self) {
        self.selection = self.match_device(self.width, self.height);
    }

    fn refit(&mut self, width: u32, height: u32) {
        if let Some(container) = self.container
            && let Some(transform) = FrameTransform::fit(container, width, height)
        {
            self.transform = Some(transform);
        }
        // An unlaid-out container keeps the previous transform; the next
        // resize event retries.
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_positive(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|v| *v > 0)
}
