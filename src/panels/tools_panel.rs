use crate::PaintApp;

/// Top toolbar: one button per action, the brush width slider and the
/// pen color preview.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }
            if ui.button("Color…").clicked() {
                app.choose_pen_color();
            }
            if ui.button("Save…").clicked() {
                app.save_image();
            }
            if ui.button("Eraser").clicked() {
                app.activate_eraser();
            }

            let mut width = app.pen().width();
            if ui
                .add(egui::Slider::new(&mut width, 1.0..=10.0).text("Width"))
                .changed()
            {
                app.pen_mut().set_width(width);
            }

            if ui.button("Resize…").clicked() {
                app.begin_resize();
            }
            if ui.button("Text…").clicked() {
                app.begin_text();
            }
            if ui.button("Background…").clicked() {
                app.choose_background();
            }

            ui.separator();

            // Current pen color, transient picks included.
            let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 18.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, app.pen().color());
            ui.painter()
                .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

            if app.text_pending() {
                ui.label("click the canvas to place the text");
            }
        });
    });
}
