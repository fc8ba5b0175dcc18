use egui::{Color32, Pos2};

/// Point size used for text marks, on the display surface and in the
/// bitmap alike. Both sides must agree or the two representations drift.
pub const TEXT_SIZE: f32 = 16.0;

/// One line segment of a freehand stroke.
///
/// Segments are write-once: applied to the document and never edited
/// afterwards. A full stroke is just the sequence of segments produced
/// while the pointer was held down.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSegment {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
}

/// A piece of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    pub pos: Pos2,
    pub text: String,
    pub color: Color32,
}

/// Everything that can be applied to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Stroke(StrokeSegment),
    Text(TextMark),
}

impl Shape {
    pub fn stroke(from: Pos2, to: Pos2, color: Color32, width: f32) -> Self {
        Self::Stroke(StrokeSegment {
            from,
            to,
            color,
            width,
        })
    }

    pub fn text(pos: Pos2, text: String, color: Color32) -> Self {
        Self::Text(TextMark { pos, text, color })
    }
}
