use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use crate::document::Document;
use crate::shape::{Shape, TEXT_SIZE};

/// Replays the document's display surface through the egui painter.
///
/// The bitmap never appears on screen; what the user sees is this replay,
/// and the mirror invariant in [`Document`] guarantees both carry the
/// same content.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the backdrop and every shape into `rect`. The painter is
    /// expected to be clipped to `rect` by the caller.
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        painter.rect_filled(rect, 0.0, document.display_background());

        let to_screen = |p: Pos2| rect.min + p.to_vec2();
        for shape in document.shapes() {
            match shape {
                Shape::Stroke(segment) => {
                    let from = to_screen(segment.from);
                    let to = to_screen(segment.to);
                    painter.line_segment(
                        [from, to],
                        EguiStroke::new(segment.width, segment.color),
                    );
                    // Round caps; the bitmap stamps discs for the same look.
                    let radius = segment.width / 2.0;
                    painter.circle_filled(from, radius, segment.color);
                    painter.circle_filled(to, radius, segment.color);
                }
                Shape::Text(mark) => {
                    painter.text(
                        to_screen(mark.pos),
                        Align2::LEFT_TOP,
                        &mark.text,
                        FontId::proportional(TEXT_SIZE),
                        mark.color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    // The painter side is hard to assert on, but replay must at least
    // run against a plain context without panicking.
    #[test]
    fn replay_handles_every_shape_kind() {
        let mut document = Document::default();
        document.paint_stroke(
            Pos2::new(1.0, 1.0),
            Pos2::new(20.0, 20.0),
            Color32::RED,
            4.0,
        );
        document.place_text(Pos2::new(5.0, 5.0), "note".to_owned(), Color32::BLACK);

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let rect = Rect::from_min_size(
                Pos2::ZERO,
                egui::vec2(document.width() as f32, document.height() as f32),
            );
            Renderer::new().render(&painter, rect, &document);
        });
    }
}
