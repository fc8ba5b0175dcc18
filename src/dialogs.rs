//! Modal prompt windows.
//!
//! Every dialog follows the same contract: `show` renders nothing while
//! closed, and returns `Some(value)` for exactly one frame when the user
//! confirms. Cancelling (button or closing the window) returns the dialog
//! to its closed state without a value, and the triggering action simply
//! does not happen.

use egui::{Color32, Context, Window};

/// Color chooser for the pen or the backdrop. Confirming is what makes
/// the choice explicit; while the window is open the working color is
/// local to the dialog.
pub struct ColorDialog {
    title: &'static str,
    open: bool,
    color: Color32,
}

impl ColorDialog {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            open: false,
            color: Color32::BLACK,
        }
    }

    pub fn open(&mut self, current: Color32) {
        self.open = true;
        self.color = current;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &Context) -> Option<Color32> {
        if !self.open {
            return None;
        }
        let mut keep_open = true;
        let mut chosen = None;
        Window::new(self.title)
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        chosen = Some(self.color);
                        self.open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });
            });
        if !keep_open {
            self.open = false;
        }
        chosen
    }
}

/// New canvas dimensions. Both fields are integer inputs clamped to
/// positive values, so a confirmed dialog always carries a valid size.
pub struct SizeDialog {
    open: bool,
    width: u32,
    height: u32,
}

impl SizeDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            width: 0,
            height: 0,
        }
    }

    pub fn open(&mut self, current_width: u32, current_height: u32) {
        self.open = true;
        self.width = current_width;
        self.height = current_height;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &Context) -> Option<(u32, u32)> {
        if !self.open {
            return None;
        }
        let mut keep_open = true;
        let mut chosen = None;
        Window::new("Canvas size")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("canvas_size_grid").show(ui, |ui| {
                    ui.label("Width:");
                    ui.add(egui::DragValue::new(&mut self.width).range(1..=8192));
                    ui.end_row();
                    ui.label("Height:");
                    ui.add(egui::DragValue::new(&mut self.height).range(1..=8192));
                    ui.end_row();
                });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        chosen = Some((self.width, self.height));
                        self.open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });
            });
        if !keep_open {
            self.open = false;
        }
        chosen
    }
}

impl Default for SizeDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Text to place on the canvas with the next click.
pub struct TextDialog {
    open: bool,
    input: String,
}

impl TextDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            input: String::new(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.input.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &Context) -> Option<String> {
        if !self.open {
            return None;
        }
        let mut keep_open = true;
        let mut chosen = None;
        Window::new("Add text")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Text to place:");
                ui.text_edit_singleline(&mut self.input);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        chosen = Some(std::mem::take(&mut self.input));
                        self.open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });
            });
        if !keep_open {
            self.open = false;
        }
        chosen
    }
}

impl Default for TextDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line notice with a dismiss button, used for the post-export
/// confirmation and for export failures.
#[derive(Default)]
pub struct Notice {
    message: Option<String>,
}

impl Notice {
    pub fn set(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(message) = self.message.clone() else {
            return;
        };
        let mut keep_open = true;
        let mut dismissed = false;
        Window::new("Easel")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || !keep_open {
            self.message = None;
        }
    }
}

/// All dialog state owned by the app. While any dialog is up, pointer
/// input over the canvas is not routed to drawing.
pub struct Dialogs {
    pub pen_color: ColorDialog,
    pub background: ColorDialog,
    pub canvas_size: SizeDialog,
    pub text: TextDialog,
    pub notice: Notice,
}

impl Dialogs {
    pub fn new() -> Self {
        Self {
            pen_color: ColorDialog::new("Pen color"),
            background: ColorDialog::new("Background color"),
            canvas_size: SizeDialog::new(),
            text: TextDialog::new(),
            notice: Notice::default(),
        }
    }

    pub fn any_open(&self) -> bool {
        self.pen_color.is_open()
            || self.background.is_open()
            || self.canvas_size.is_open()
            || self.text.is_open()
            || self.notice.is_open()
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::new()
    }
}
