use eframe::egui;
use framefit_protocol::DeviceProfile;

/// Modal prompt currently on screen, if any. Each controller action runs as
/// a short prompt sequence; the app owns exactly one at a time.
pub enum Prompt {
    None,
    /// URL for opening the preview.
    Url { buffer: String },
    /// First step of the custom-resolution flow.
    Width { buffer: String },
    /// Second step; carries the already-entered width text.
    Height { width: String, buffer: String },
    /// Preset choice list.
    Preset,
}

/// What the user did with the active prompt this frame.
pub enum PromptEvent {
    UrlSubmitted(String),
    WidthSubmitted(String),
    HeightSubmitted { width: String, height: String },
    PresetPicked(String),
    Cancelled,
}

impl Prompt {
    /// Render the active prompt. Returns an event when the user confirms or
    /// cancels; the caller resets the prompt state in response.
    pub fn show(&mut self, ctx: &egui::Context, devices: &[DeviceProfile]) -> Option<PromptEvent> {
        match self {
            Prompt::None => None,
            Prompt::Url { buffer } => text_prompt(
                ctx,
                "Open Preview",
                "URL of your web application (e.g. http://localhost:3000)",
                buffer,
            )
            .map(|outcome| match outcome {
                TextOutcome::Submitted(url) => PromptEvent::UrlSubmitted(url),
                TextOutcome::Cancelled => PromptEvent::Cancelled,
            }),
            Prompt::Width { buffer } => text_prompt(
                ctx,
                "Custom Resolution",
                "Custom width in pixels (e.g. 400)",
                buffer,
            )
            .map(|outcome| match outcome {
                TextOutcome::Submitted(width) => PromptEvent::WidthSubmitted(width),
                TextOutcome::Cancelled => PromptEvent::Cancelled,
            }),
            Prompt::Height { width, buffer } => text_prompt(
                ctx,
                "Custom Resolution",
                "Custom height in pixels (e.g. 700)",
                buffer,
            )
            .map(|outcome| match outcome {
                TextOutcome::Submitted(height) => PromptEvent::HeightSubmitted {
                    width: width.clone(),
                    height,
                },
                TextOutcome::Cancelled => PromptEvent::Cancelled,
            }),
            Prompt::Preset => preset_prompt(ctx, devices),
        }
    }
}

enum TextOutcome {
    Submitted(String),
    Cancelled,
}

fn text_prompt(
    ctx: &egui::Context,
    title: &str,
    label: &str,
    buffer: &mut String,
) -> Option<TextOutcome> {
    let mut outcome = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -60.0))
        .show(ctx, |ui| {
            ui.label(label);
            let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(280.0));
            response.request_focus();
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    outcome = Some(TextOutcome::Submitted(buffer.clone()));
                }
                if ui.button("Cancel").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    outcome = Some(TextOutcome::Cancelled);
                }
            });
        });
    outcome
}

fn preset_prompt(ctx: &egui::Context, devices: &[DeviceProfile]) -> Option<PromptEvent> {
    let mut event = None;
    egui::Window::new("Preset Resolution")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -60.0))
        .show(ctx, |ui| {
            ui.label("Select a preset device resolution");
            for device in devices {
                let label = format!("{} — {}x{}px", device.name, device.width, device.height);
                if ui.button(label).clicked() {
                    event = Some(PromptEvent::PresetPicked(device.name.to_string()));
                }
            }
            ui.separator();
            if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                event = Some(PromptEvent::Cancelled);
            }
        });
    event
}
