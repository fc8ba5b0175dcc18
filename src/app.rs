use egui::{PointerButton, Pos2};

use crate::dialogs::Dialogs;
use crate::document::Document;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{PenState, TextPlacement};

/// The drawing application: one window, one document.
///
/// Everything runs on the UI thread inside `update`; the only blocking
/// calls are the modal dialogs, during which no drawing events are
/// routed. Pen settings are persisted across restarts, the document is
/// runtime-only.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaintApp {
    pen: PenState,
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    text_placement: TextPlacement,
    #[serde(skip)]
    dialogs: Dialogs,
    /// Previous pointer sample of the stroke in progress. `None` means
    /// the next sample starts a fresh stroke.
    #[serde(skip)]
    last_point: Option<Pos2>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            pen: PenState::default(),
            document: Document::default(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            text_placement: TextPlacement::default(),
            dialogs: Dialogs::new(),
            last_point: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore persisted pen settings, if any.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Default::default()
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    pub fn pen_mut(&mut self) -> &mut PenState {
        &mut self.pen
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn text_pending(&self) -> bool {
        self.text_placement.is_pending()
    }

    // Toolbar actions.

    pub fn clear_canvas(&mut self) {
        log::info!("clearing canvas");
        self.document.clear();
    }

    pub fn choose_pen_color(&mut self) {
        self.dialogs.pen_color.open(self.pen.color());
    }

    pub fn choose_background(&mut self) {
        self.dialogs.background.open(self.document.display_background());
    }

    pub fn activate_eraser(&mut self) {
        log::info!("eraser on");
        let background = self.document.background();
        self.pen.erase(background);
    }

    pub fn begin_resize(&mut self) {
        self.dialogs
            .canvas_size
            .open(self.document.width(), self.document.height());
    }

    pub fn begin_text(&mut self) {
        self.dialogs.text.open();
    }

    /// Ask for a path and export the bitmap. Cancelling the dialog is a
    /// no-op; success and failure both end in the notice window.
    pub fn save_image(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("drawing.png")
            .save_file();
        let Some(path) = picked else {
            log::info!("save cancelled");
            return;
        };
        match self.document.export(&path) {
            Ok(written) => {
                self.dialogs
                    .notice
                    .set(format!("Image saved to {}", written.display()));
            }
            Err(err) => {
                log::error!("export failed: {err}");
                self.dialogs.notice.set(format!("Could not save image: {err}"));
            }
        }
    }

    /// Convert raw input over the canvas into drawing operations.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        if self.dialogs.any_open() {
            // A modal dialog swallows drawing input. If it opened
            // mid-stroke, that stroke is over (its release may never
            // reach us); the pen itself is untouched otherwise.
            if self.last_point.is_some() {
                self.end_stroke();
            }
            return;
        }
        let origin = canvas_rect.min;
        for event in self.input.process_input(ctx) {
            self.route_event(event, origin);
        }
    }

    fn route_event(&mut self, event: InputEvent, origin: Pos2) {
        match event {
            InputEvent::PointerDown { location, button } if location.is_in_canvas => {
                let local = (location.position - origin).to_pos2();
                match button {
                    PointerButton::Primary => {
                        if let Some(text) = self.text_placement.take() {
                            log::info!("placing text at {local:?}");
                            self.document.place_text(local, text, self.pen.color());
                        } else {
                            self.last_point = Some(local);
                        }
                    }
                    PointerButton::Secondary => {
                        if let Some(color) = self.document.pick_color(local) {
                            log::info!("picked color {color:?}");
                            self.pen.set_transient(color);
                        }
                    }
                    _ => {}
                }
            }
            InputEvent::PointerMove {
                location,
                held_buttons,
            } if location.is_in_canvas && held_buttons.contains(&PointerButton::Primary) => {
                let local = (location.position - origin).to_pos2();
                // A segment needs two consecutive samples; the first one
                // only records.
                if let Some(prev) = self.last_point {
                    self.document
                        .paint_stroke(prev, local, self.pen.color(), self.pen.width());
                }
                self.last_point = Some(local);
            }
            InputEvent::PointerUp { button, .. } if button == PointerButton::Primary => {
                self.end_stroke();
            }
            InputEvent::PointerLeave => {
                if self.last_point.is_some() {
                    self.end_stroke();
                }
            }
            _ => {}
        }
    }

    fn end_stroke(&mut self) {
        self.last_point = None;
        self.pen.end_stroke();
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.dialogs.any_open() {
            return;
        }
        let (save, color) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::S) && i.modifiers.ctrl,
                i.key_pressed(egui::Key::C) && i.modifiers.ctrl,
            )
        });
        if save {
            self.save_image();
        }
        if color {
            self.choose_pen_color();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        if let Some(color) = self.dialogs.pen_color.show(ctx) {
            log::info!("pen color set to {color:?}");
            self.pen.set_color(color);
        }
        if let Some(color) = self.dialogs.background.show(ctx) {
            self.document.set_display_background(color);
        }
        if let Some((width, height)) = self.dialogs.canvas_size.show(ctx) {
            self.document.resize(width, height);
        }
        if let Some(text) = self.dialogs.text.show(ctx) {
            if !text.is_empty() {
                self.text_placement.arm(text);
            }
        }
        self.dialogs.notice.show(ctx);
    }
}
