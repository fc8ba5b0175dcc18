use egui::Color32;

/// The pen shared by every drawing action: active color, the last color
/// the user explicitly chose, and the brush width.
///
/// `color` and `last_explicit` differ only while a transient pick is in
/// effect (eyedropper, eraser). Releasing the stroke snaps `color` back.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PenState {
    color: Color32,
    last_explicit: Color32,
    width: f32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            last_explicit: Color32::BLACK,
            width: 5.0,
        }
    }
}

impl PenState {
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(1.0, 10.0);
    }

    /// An explicit color choice: becomes the restore target for
    /// `end_stroke`.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.last_explicit = color;
    }

    /// An eyedropper pick: active until the current stroke ends, then
    /// reverted. Does not touch `last_explicit`.
    pub fn set_transient(&mut self, color: Color32) {
        self.color = color;
    }

    /// Switch to painting with the canvas background color. Leaves
    /// `last_explicit` alone, so like a pick this lasts only until the
    /// stroke is released.
    pub fn erase(&mut self, background: Color32) {
        self.color = background;
    }

    /// Pointer released: any transient pick is over.
    pub fn end_stroke(&mut self) {
        self.color = self.last_explicit;
    }
}

/// Single-shot text placement.
///
/// The text dialog arms this; the next primary click on the canvas takes
/// the text, places it, and the state falls back to `Idle`. Only that one
/// click places text.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TextPlacement {
    #[default]
    Idle,
    Pending {
        text: String,
    },
}

impl TextPlacement {
    pub fn arm(&mut self, text: String) {
        *self = Self::Pending { text };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Consume the pending text, if any, returning the state to `Idle`.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Pending { text } => Some(text),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_is_reverted_on_stroke_end() {
        let mut pen = PenState::default();
        pen.set_color(Color32::RED);
        pen.set_transient(Color32::GREEN);
        assert_eq!(pen.color(), Color32::GREEN);
        pen.end_stroke();
        assert_eq!(pen.color(), Color32::RED);
    }

    #[test]
    fn explicit_color_survives_stroke_end() {
        let mut pen = PenState::default();
        pen.set_color(Color32::BLUE);
        pen.end_stroke();
        assert_eq!(pen.color(), Color32::BLUE);
    }

    #[test]
    fn erase_lasts_until_stroke_end() {
        let mut pen = PenState::default();
        pen.set_color(Color32::RED);
        pen.erase(Color32::WHITE);
        assert_eq!(pen.color(), Color32::WHITE);
        pen.end_stroke();
        assert_eq!(pen.color(), Color32::RED);
    }

    #[test]
    fn width_is_clamped() {
        let mut pen = PenState::default();
        pen.set_width(0.0);
        assert_eq!(pen.width(), 1.0);
        pen.set_width(64.0);
        assert_eq!(pen.width(), 10.0);
    }

    #[test]
    fn text_placement_is_single_shot() {
        let mut placement = TextPlacement::default();
        assert_eq!(placement.take(), None);
        placement.arm("hello".to_owned());
        assert!(placement.is_pending());
        assert_eq!(placement.take(), Some("hello".to_owned()));
        assert_eq!(placement.take(), None);
    }
}
