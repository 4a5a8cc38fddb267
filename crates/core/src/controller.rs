use std::sync::mpsc;

use framefit_protocol::{DeviceProfile, HostCommand};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, DeviceCatalog};

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    /// Non-numeric or non-positive user-entered dimension. Handled locally:
    /// nothing is sent, prior state stands.
    #[error("invalid {field}: enter a positive whole number")]
    InvalidInput { field: &'static str },

    /// A resolution change referenced a name the catalog does not have.
    #[error(transparent)]
    UnknownProfile(#[from] CatalogError),

    /// A resolution-setting action was invoked with no display open.
    #[error("no preview is open")]
    NoActivePreview,
}

/// Sending end of the controller → display channel.
///
/// Commands are fire-and-forget: a send to a torn-down display is dropped
/// silently — the channel's own teardown handles closed previews, the
/// controller never treats it as a fault.
#[derive(Debug, Clone)]
pub struct DisplayHandle {
    tx: mpsc::Sender<HostCommand>,
}

impl DisplayHandle {
    pub fn new(tx: mpsc::Sender<HostCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: HostCommand) {
        if self.tx.send(command).is_err() {
            debug!("display channel closed, dropping command");
        }
    }
}

/// Host-side owner of the device catalog and the open-preview handle.
///
/// All cross-component state travels by value through the handle; each
/// command is an idempotent full-state replacement, so no retries or
/// acknowledgments are needed.
#[derive(Debug)]
pub struct Controller {
    catalog: DeviceCatalog,
    display: Option<DisplayHandle>,
}

impl Controller {
    pub fn new(catalog: DeviceCatalog) -> Self {
        Self {
            catalog,
            display: None,
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn has_preview(&self) -> bool {
        self.display.is_some()
    }

    /// Attach a ready display and push the initial state: the full catalog,
    /// the verbatim URL, and the default profile's dimensions.
    ///
    /// Callers wait for the display's `WebviewReady` event before invoking
    /// this, so the pushes land on a built widget tree.
    pub fn open_preview(&mut self, handle: DisplayHandle, url: &str) {
        handle.send(HostCommand::LoadDevices {
            devices: self.catalog.list().to_vec(),
        });
        handle.send(HostCommand::UpdateUrl { url: url.into() });
        if let Some(profile) = self.catalog.default_profile() {
            let (width, height) = profile.dimensions();
            handle.send(HostCommand::UpdateDimensions { width, height });
        }
        self.display = Some(handle);
    }

    /// Drop the handle; further resolution actions fail with
    /// `NoActivePreview` until a new display attaches.
    pub fn close_preview(&mut self) {
        self.display = None;
    }

    /// Push a verbatim URL change to the open display.
    pub fn set_url(&self, url: &str) -> Result<(), ControllerError> {
        let display = self.display()?;
        display.send(HostCommand::UpdateUrl { url: url.into() });
        Ok(())
    }

    /// Validate and push a user-entered custom resolution. Rejected input
    /// sends nothing: the display keeps its current dimensions.
    pub fn set_custom_resolution(
        &self,
        width: &str,
        height: &str,
    ) -> Result<(u32, u32), ControllerError> {
        let display = self.display()?;
        let width = Self::parse_dimension(width, "width")?;
        let height = Self::parse_dimension(height, "height")?;
        display.send(HostCommand::UpdateDimensions { width, height });
        Ok((width, height))
    }

    /// Push a cataloged profile's exact dimensions. An unknown name aborts
    /// the change with no dimension message sent.
    pub fn set_preset_resolution(&self, name: &str) -> Result<DeviceProfile, ControllerError> {
        let display = self.display()?;
        let profile = self.catalog.get(name)?.clone();
        display.send(HostCommand::UpdateDimensions {
            width: profile.width,
            height: profile.height,
        });
        Ok(profile)
    }

    /// Parse one dimension field as a strictly positive integer.
    pub fn parse_dimension(value: &str, field: &'static str) -> Result<u32, ControllerError> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| {
                warn!(field, value, "rejected dimension input");
                ControllerError::InvalidInput { field }
            })
    }

    fn display(&self) -> Result<&DisplayHandle, ControllerError> {
        self.display.as_ref().ok_or(ControllerError::NoActivePreview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framefit_protocol::SharedStr;

    fn open_controller() -> (Controller, mpsc::Receiver<HostCommand>) {
        let (tx, rx) = mpsc::channel();
        let mut controller = Controller::new(DeviceCatalog::builtin());
        controller.open_preview(DisplayHandle::new(tx), "http://localhost:3000");
        // Drain the initial pushes.
        while rx.try_recv().is_ok() {}
        (controller, rx)
    }

    #[test]
    fn open_preview_pushes_catalog_url_and_default_dimensions() {
        let (tx, rx) = mpsc::channel();
        let mut controller = Controller::new(DeviceCatalog::builtin());
        controller.open_preview(DisplayHandle::new(tx), "http://localhost:3000");

        let first = rx.try_recv();
        assert!(matches!(first, Ok(HostCommand::LoadDevices { ref devices }) if devices.len() == 5));
        assert_eq!(
            rx.try_recv(),
            Ok(HostCommand::UpdateUrl {
                url: "http://localhost:3000".into()
            })
        );
        assert_eq!(
            rx.try_recv(),
            Ok(HostCommand::UpdateDimensions {
                width: 393,
                height: 852
            })
        );
    }

    #[test]
    fn actions_fail_without_an_open_preview() {
        let controller = Controller::new(DeviceCatalog::builtin());
        assert_eq!(
            controller.set_custom_resolution("400", "700"),
            Err(ControllerError::NoActivePreview)
        );
        assert_eq!(
            controller.set_preset_resolution("iPad Air").err(),
            Some(ControllerError::NoActivePreview)
        );
        assert_eq!(
            controller.set_url("http://localhost:8080"),
            Err(ControllerError::NoActivePreview)
        );
    }

    #[test]
    fn custom_resolution_validates_before_sending() {
        let (controller, rx) = open_controller();

        assert_eq!(
            controller.set_custom_resolution("abc", "700"),
            Err(ControllerError::InvalidInput { field: "width" })
        );
        assert_eq!(
            controller.set_custom_resolution("400", "0"),
            Err(ControllerError::InvalidInput { field: "height" })
        );
        assert_eq!(
            controller.set_custom_resolution("400", "-5"),
            Err(ControllerError::InvalidInput { field: "height" })
        );
        // No dimension message reached the channel.
        assert!(rx.try_recv().is_err());

        assert_eq!(controller.set_custom_resolution("400", "700"), Ok((400, 700)));
        assert_eq!(
            rx.try_recv(),
            Ok(HostCommand::UpdateDimensions {
                width: 400,
                height: 700
            })
        );
    }

    #[test]
    fn preset_resolution_sends_exact_profile_dimensions() {
        let (controller, rx) = open_controller();
        let profile = controller.set_preset_resolution("iPad Air");
        assert_eq!(profile.map(|p| p.dimensions()), Ok((820, 1180)));
        assert_eq!(
            rx.try_recv(),
            Ok(HostCommand::UpdateDimensions {
                width: 820,
                height: 1180
            })
        );
    }

    #[test]
    fn unknown_preset_sends_nothing() {
        let (controller, rx) = open_controller();
        let err = controller.set_preset_resolution("Nokia 3310");
        assert_eq!(
            err,
            Err(ControllerError::UnknownProfile(CatalogError::NotFound(
                SharedStr::from("Nokia 3310")
            )))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_to_torn_down_display_is_silently_dropped() {
        let (controller, rx) = open_controller();
        drop(rx);
        // Not an error: the channel's teardown handles closed displays.
        assert_eq!(controller.set_custom_resolution("400", "700"), Ok((400, 700)));
    }

    #[test]
    fn close_preview_detaches_the_handle() {
        let (mut controller, _rx) = open_controller();
        assert!(controller.has_preview());
        controller.close_preview();
        assert!(!controller.has_preview());
        assert_eq!(
            controller.set_custom_resolution("400", "700"),
            Err(ControllerError::NoActivePreview)
        );
    }
}
