pub mod commands;
pub mod device;
pub mod shared_str;
pub mod types;

pub use commands::{DisplayEvent, HostCommand};
pub use device::DeviceProfile;
pub use shared_str::SharedStr;
pub use types::{Size, Vec2};
