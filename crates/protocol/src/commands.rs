use serde::{Deserialize, Serialize};

use crate::device::DeviceProfile;

/// A state push from the controller to the display.
///
/// Every command is fire-and-forget and carries a full replacement value,
/// never a delta, so re-sends and reordering across command kinds are safe.
/// The serialized form is a tagged record: `{"command": "updateDimensions",
/// "width": 393, "height": 852}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostCommand {
    /// Replace the display's device dropdown with this ordered list. The
    /// display appends its synthetic "Custom" entry itself; it is a selector
    /// state, not a stored profile.
    LoadDevices { devices: Vec<DeviceProfile> },

    /// Point the content frame at exactly this URL — no normalization, no
    /// trimming.
    UpdateUrl { url: String },

    /// Apply an explicit resolution. Both values are strictly positive; the
    /// controller rejects anything else before it reaches the channel.
    UpdateDimensions { width: u32, height: u32 },
}

/// An informational event from the display back to the controller. No reply
/// is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum DisplayEvent {
    /// Sent once when the display has built its widget tree and can accept
    /// commands. The controller defers its initial pushes until then.
    WebviewReady,

    /// User-visible error surfacing.
    Alert { text: String },
}
