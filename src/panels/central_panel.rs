use crate::PaintApp;

/// The canvas area. The allocated painter is clipped to the canvas, so
/// display replay never bleeds into the surrounding chrome.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let size = egui::vec2(
                app.document().width() as f32,
                app.document().height() as f32,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input
            app.handle_canvas_input(ctx, canvas_rect);

            // Render the canvas
            app.renderer().render(&painter, canvas_rect, app.document());
        });
    });
}
