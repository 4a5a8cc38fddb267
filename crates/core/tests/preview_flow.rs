//! Integration test: drive a controller and a display state through a real
//! mpsc channel and verify the end-to-end preview flow — catalog push, preset
//! pick, validation-gated custom edits, and resize-only rescaling.

use std::sync::mpsc;

use framefit_core::preview::{FRAME_BORDER, Field, PreviewState, Selection};
use framefit_core::{Controller, DeviceCatalog, DisplayHandle};
use framefit_protocol::{DeviceProfile, DisplayEvent, Size};

fn drain(rx: &mpsc::Receiver<framefit_protocol::HostCommand>, state: &mut PreviewState) {
    while let Ok(cmd) = rx.try_recv() {
        state.handle_command(cmd);
    }
}

#[test]
fn preview_flow_end_to_end() {
    let catalog = DeviceCatalog::new(vec![
        DeviceProfile::new("A", 393, 852),
        DeviceProfile::new("B", 820, 1180),
    ]);
    let mut controller = Controller::new(catalog);

    let (host_tx, host_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    let mut state = PreviewState::new();
    state.resize_container(Size::new(800.0, 600.0));

    // Display announces readiness; the controller opens against a built tree.
    event_tx
        .send(DisplayEvent::WebviewReady)
        .expect("event channel open");
    assert_eq!(event_rx.try_recv(), Ok(DisplayEvent::WebviewReady));
    controller.open_preview(DisplayHandle::new(host_tx), "http://localhost:3000");
    drain(&host_rx, &mut state);

    // Initial pushes: catalog, verbatim URL, default profile dimensions.
    assert_eq!(state.devices().len(), 2);
    assert_eq!(state.url(), "http://localhost:3000");
    assert_eq!((state.width(), state.height()), (393, 852));
    assert_eq!(state.selection().label(), "A");

    // Preset pick: exact dimensions, named selection, scale against the
    // live container.
    controller
        .set_preset_resolution("B")
        .expect("B is cataloged");
    drain(&host_rx, &mut state);
    assert_eq!((state.width(), state.height()), (820, 1180));
    assert_eq!(state.selection().label(), "B");
    let t = state.transform().expect("container is laid out");
    let expected = (800.0 / (820.0 + FRAME_BORDER))
        .min(600.0 / (1180.0 + FRAME_BORDER))
        .min(1.0);
    assert!((t.scale - expected).abs() < 1e-12);

    // Re-sending the same push is idempotent.
    let snapshot = state.clone();
    controller
        .set_preset_resolution("B")
        .expect("B is cataloged");
    drain(&host_rx, &mut state);
    assert_eq!(state, snapshot);

    // Custom edit, width first: the height field still holds "1180", so the
    // pair (400, 1180) applies and the selection flips to Custom.
    state.edit_field(Field::Width, "400");
    assert_eq!((state.width(), state.height()), (400, 1180));
    assert_eq!(state.selection(), &Selection::Custom);

    // Clearing the height field closes the gate: nothing applies until it
    // holds a valid positive integer again.
    state.edit_field(Field::Height, "");
    state.edit_field(Field::Width, "401");
    assert_eq!((state.width(), state.height()), (400, 1180));

    state.edit_field(Field::Height, "700");
    assert_eq!((state.width(), state.height()), (401, 700));
    assert_eq!(state.selection(), &Selection::Custom);

    // Invalid custom input through the controller sends no message at all.
    assert!(controller.set_custom_resolution("abc", "700").is_err());
    let before = state.clone();
    drain(&host_rx, &mut state);
    assert_eq!(state, before);

    // Resize-only trigger: dimensions stay, scale recomputes from the
    // currently applied frame box.
    state.resize_container(Size::new(300.0, 900.0));
    assert_eq!((state.width(), state.height()), (401, 700));
    let t = state.transform().expect("container is laid out");
    let expected = (300.0 / (401.0 + FRAME_BORDER))
        .min(900.0 / (700.0 + FRAME_BORDER))
        .min(1.0);
    assert!((t.scale - expected).abs() < 1e-12);

    // Tearing the display down turns further pushes into silent drops.
    drop(host_rx);
    assert!(controller.set_preset_resolution("A").is_ok());
}
