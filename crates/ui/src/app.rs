use std::sync::mpsc;

use eframe::egui;
use framefit_core::preview::{CUSTOM_LABEL, FRAME_BORDER, Field};
use framefit_core::{Controller, DeviceCatalog, DisplayHandle, PreviewState};
use framefit_protocol::{DisplayEvent, HostCommand, SharedStr, Size};
use tracing::info;

use crate::prompts::{Prompt, PromptEvent};

const DEFAULT_URL: &str = "http://localhost:3000";

const BACKDROP: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
const FRAME_CHROME: egui::Color32 = egui::Color32::from_rgb(10, 10, 12);
const CONTENT_BG: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);
const CONTENT_TEXT: egui::Color32 = egui::Color32::from_rgb(96, 96, 96);

enum Status {
    Info(String),
    Error(String),
}

/// Main application: hosts the controller and the display state, wired
/// through a real channel pair so the two sides stay decoupled exactly as
/// they would be across a host/webview boundary.
pub struct PreviewApp {
    controller: Controller,
    state: PreviewState,
    host_tx: mpsc::Sender<HostCommand>,
    host_rx: mpsc::Receiver<HostCommand>,
    event_tx: mpsc::Sender<DisplayEvent>,
    event_rx: mpsc::Receiver<DisplayEvent>,
    /// Display side has announced itself on the event channel.
    announced: bool,
    /// Controller side has observed the ready event.
    ready: bool,
    /// URL submitted before the ready handshake completed.
    pending_url: Option<String>,
    prompt: Prompt,
    status: Option<Status>,
}

impl PreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let (host_tx, host_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            controller: Controller::new(DeviceCatalog::builtin()),
            state: PreviewState::new(),
            host_tx,
            host_rx,
            event_tx,
            event_rx,
            announced: false,
            ready: false,
            pending_url: None,
            // Opening the preview starts with the URL prompt.
            prompt: Prompt::Url {
                buffer: DEFAULT_URL.to_owned(),
            },
            status: None,
        }
    }

    fn open(&mut self, url: String) {
        info!(%url, "opening preview");
        self.controller
            .open_preview(DisplayHandle::new(self.host_tx.clone()), &url);
        self.status = Some(Status::Info(format!("Preview opened: {url}")));
    }

    fn handle_prompt_event(&mut self, event: PromptEvent) {
        self.prompt = Prompt::None;
        match event {
            PromptEvent::UrlSubmitted(url) => {
                if url.is_empty() {
                    self.status = Some(Status::Info(
                        "URL is required to show the preview.".to_owned(),
                    ));
                } else if self.ready {
                    self.open(url);
                } else {
                    self.pending_url = Some(url);
                }
            }
            PromptEvent::WidthSubmitted(width) => {
                // Validate each step as it is entered, like the host input
                // boxes do; the controller re-checks the pair before sending.
                match Controller::parse_dimension(&width, "width") {
                    Ok(_) => {
                        self.prompt = Prompt::Height {
                            width,
                            buffer: String::new(),
                        };
                    }
                    Err(e) => self.status = Some(Status::Error(e.to_string())),
                }
            }
            PromptEvent::HeightSubmitted { width, height } => {
                match self.controller.set_custom_resolution(&width, &height) {
                    Ok((w, h)) => {
                        self.status = Some(Status::Info(format!(
                            "Preview updated to custom resolution: {w}x{h}"
                        )));
                    }
                    Err(e) => self.status = Some(Status::Error(e.to_string())),
                }
            }
            PromptEvent::PresetPicked(name) => {
                match self.controller.set_preset_resolution(&name) {
                    Ok(profile) => {
                        self.status = Some(Status::Info(format!(
                            "Preview updated to {} resolution.",
                            profile.name
                        )));
                    }
                    Err(e) => self.status = Some(Status::Error(e.to_string())),
                }
            }
            PromptEvent::Cancelled => {}
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("framefit");
                ui.separator();

                if ui.button("Open Preview…").clicked() {
                    let buffer = if self.state.url().is_empty() {
                        DEFAULT_URL.to_owned()
                    } else {
                        self.state.url().to_owned()
                    };
                    self.prompt = Prompt::Url { buffer };
                }
                if ui.button("Preset…").clicked() {
                    if self.controller.has_preview() {
                        self.prompt = Prompt::Preset;
                    } else {
                        self.status =
                            Some(Status::Error("Please open the preview first.".to_owned()));
                    }
                }
                if ui.button("Custom…").clicked() {
                    if self.controller.has_preview() {
                        self.prompt = Prompt::Width {
                            buffer: String::new(),
                        };
                    } else {
                        self.status =
                            Some(Status::Error("Please open the preview first.".to_owned()));
                    }
                }

                ui.separator();
                self.device_dropdown(ui);

                ui.separator();
                ui.label("W");
                let width = ui.add(
                    egui::TextEdit::singleline(&mut self.state.width_field).desired_width(48.0),
                );
                if width.changed() {
                    self.state.commit_field_edit(Field::Width);
                }
                ui.label("H");
                let height = ui.add(
                    egui::TextEdit::singleline(&mut self.state.height_field).desired_width(48.0),
                );
                if height.changed() {
                    self.state.commit_field_edit(Field::Height);
                }
            });
        });
    }

    fn device_dropdown(&mut self, ui: &mut egui::Ui) {
        let names: Vec<SharedStr> = self
            .state
            .devices()
            .iter()
            .map(|d| d.name.clone())
            .collect();
        let current = self.state.selection().label().to_owned();

        let mut picked: Option<SharedStr> = None;
        egui::ComboBox::from_id_salt("device")
            .selected_text(current.clone())
            .show_ui(ui, |ui| {
                for name in &names {
                    if ui
                        .selectable_label(current == name.as_str(), name.as_str())
                        .clicked()
                    {
                        picked = Some(name.clone());
                    }
                }
                // The synthetic entry is a selector state only; picking it
                // changes nothing until the user edits the size fields.
                let _ = ui.selectable_label(current == CUSTOM_LABEL, CUSTOM_LABEL);
            });
        if let Some(name) = picked {
            self.state.select_preset(&name);
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}x{}px", self.state.width(), self.state.height()));
                ui.separator();
                ui.label(self.state.selection().label().to_owned());
                if let Some(t) = self.state.transform() {
                    ui.separator();
                    ui.label(format!("{:.0}%", t.scale * 100.0));
                }
                if !self.state.url().is_empty() {
                    ui.separator();
                    ui.label(self.state.url().to_owned());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match &self.status {
                        Some(Status::Error(text)) => {
                            ui.colored_label(egui::Color32::RED, text);
                        }
                        Some(Status::Info(text)) => {
                            ui.label(text);
                        }
                        None => {}
                    }
                });
            });
        });
    }

    fn show_frame(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let container = Size::new(
                f64::from(available.width()),
                f64::from(available.height()),
            );
            // Resize-only trigger: no target dimensions travel with it, the
            // state rescales from its currently applied frame box.
            if self.state.container() != Some(container) {
                self.state.resize_container(container);
            }

            let painter = ui.painter_at(available);
            painter.rect_filled(available, egui::CornerRadius::ZERO, BACKDROP);

            let Some(t) = self.state.transform() else {
                // Container not laid out yet; the next frame retries.
                return;
            };

            let outer = t.scaled_size(self.state.width(), self.state.height());
            let frame_rect = egui::Rect::from_min_size(
                available.min + egui::vec2(t.offset.x as f32, t.offset.y as f32),
                egui::vec2(outer.width as f32, outer.height as f32),
            );
            let radius = self.state.frame_class().corner_radius() * t.scale as f32;
            painter.rect_filled(frame_rect, radius, FRAME_CHROME);

            // Content frame placeholder: the embedded browser view would
            // fill this rect.
            let inset = (FRAME_BORDER / 2.0 * t.scale) as f32;
            let content_rect = frame_rect.shrink(inset);
            painter.rect_filled(content_rect, radius * 0.5, CONTENT_BG);

            let url = if self.state.url().is_empty() {
                "about:blank"
            } else {
                self.state.url()
            };
            painter.text(
                content_rect.center(),
                egui::Align2::CENTER_CENTER,
                url,
                egui::FontId::proportional(13.0),
                CONTENT_TEXT,
            );
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Display → controller handshake, once the widget tree exists.
        if !self.announced {
            self.announced = true;
            let _ = self.event_tx.send(DisplayEvent::WebviewReady);
        }
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                DisplayEvent::WebviewReady => {
                    self.ready = true;
                    if let Some(url) = self.pending_url.take() {
                        self.open(url);
                    }
                }
                DisplayEvent::Alert { text } => self.status = Some(Status::Error(text)),
            }
        }

        // Controller → display: drain the full backlog before painting so a
        // burst of pushes settles in one frame.
        while let Ok(command) = self.host_rx.try_recv() {
            self.state.handle_command(command);
        }

        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        self.show_frame(ctx);

        if let Some(event) = self.prompt.show(ctx, self.controller.catalog().list()) {
            self.handle_prompt_event(event);
        }
    }
}
