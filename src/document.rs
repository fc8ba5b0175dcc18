use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use egui::{Color32, FontTweak, Pos2};
use image::RgbImage;

use crate::error::ExportError;
use crate::raster;
use crate::shape::{Shape, TEXT_SIZE};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// The drawing, kept in two synchronized representations:
///
/// - `shapes`, the display surface content, replayed through the egui
///   painter every frame, and
/// - `bitmap`, the off-screen RGB pixel store that export reads.
///
/// Everything that draws goes through [`Document::apply`], which writes
/// both in the same call. That single choke point is what keeps the two
/// from drifting in content; `clear` and `resize` reset both together so
/// they cannot drift in size or background either.
pub struct Document {
    shapes: Vec<Shape>,
    bitmap: RgbImage,
    /// Background of the bitmap, used by clear/resize and by the eraser.
    background: Color32,
    /// Backdrop of the display surface only. Changing it never touches
    /// the bitmap; the exported image keeps its own background.
    display_background: Color32,
    font: Option<(FontArc, FontTweak)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        let background = Color32::WHITE;
        let font = raster::default_font();
        if font.is_none() {
            log::warn!("no default font available; text will only appear on screen");
        }
        Self {
            shapes: Vec::new(),
            bitmap: RgbImage::from_pixel(width, height, raster::to_rgb(background)),
            background,
            display_background: background,
            font,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn bitmap(&self) -> &RgbImage {
        &self.bitmap
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn display_background(&self) -> Color32 {
        self.display_background
    }

    /// Display-only cosmetic change; the bitmap keeps its background.
    pub fn set_display_background(&mut self, color: Color32) {
        self.display_background = color;
    }

    /// Write a shape to both representations. The only place content
    /// enters the document.
    fn apply(&mut self, shape: Shape) {
        Self::rasterize(&mut self.bitmap, self.font.as_ref(), &shape);
        self.shapes.push(shape);
    }

    /// The bitmap half of `apply`, exposed so tests can replay a shape
    /// sequence onto a fresh buffer and compare.
    pub fn rasterize(bitmap: &mut RgbImage, font: Option<&(FontArc, FontTweak)>, shape: &Shape) {
        match shape {
            Shape::Stroke(segment) => raster::draw_line(
                bitmap,
                segment.from,
                segment.to,
                raster::to_rgb(segment.color),
                segment.width,
            ),
            Shape::Text(mark) => {
                if let Some((font, tweak)) = font {
                    raster::draw_text(
                        bitmap,
                        font,
                        *tweak,
                        mark.pos,
                        &mark.text,
                        raster::to_rgb(mark.color),
                        TEXT_SIZE,
                    );
                }
            }
        }
    }

    /// Draw one segment of a freehand stroke. The caller only has a
    /// segment once two consecutive pointer samples exist; a stroke's
    /// first sample never reaches the document.
    pub fn paint_stroke(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.apply(Shape::stroke(from, to, color, width));
    }

    /// Place text anchored at its top-left corner.
    pub fn place_text(&mut self, pos: Pos2, text: String, color: Color32) {
        if text.is_empty() {
            return;
        }
        self.apply(Shape::text(pos, text, color));
    }

    /// Reset both representations to a blank canvas at the current size.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.bitmap = RgbImage::from_pixel(
            self.bitmap.width(),
            self.bitmap.height(),
            raster::to_rgb(self.background),
        );
    }

    /// Reallocate the canvas at the new size. Discards all content; there
    /// is no content-preserving resize. Zero dimensions are a no-op.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        log::info!("resizing canvas to {width}x{height}");
        self.bitmap = RgbImage::from_pixel(width, height, raster::to_rgb(self.background));
        self.clear();
    }

    /// Sample the bitmap pixel under `pos`. `None` outside the canvas.
    pub fn pick_color(&self, pos: Pos2) -> Option<Color32> {
        let (x, y) = (pos.x.floor(), pos.y.floor());
        if x < 0.0 || y < 0.0 || x >= self.bitmap.width() as f32 || y >= self.bitmap.height() as f32
        {
            return None;
        }
        Some(raster::to_color32(*self.bitmap.get_pixel(x as u32, y as u32)))
    }

    /// Write the bitmap (never the display list) to `path` as PNG,
    /// appending the `.png` extension when it is missing. Returns the
    /// path actually written.
    pub fn export(&self, path: &Path) -> Result<PathBuf, ExportError> {
        let mut path = path.to_path_buf();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            let mut name = path.into_os_string();
            name.push(".png");
            path = PathBuf::from(name);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        self.bitmap.save(&path)?;
        log::info!("exported {}x{} canvas to {}", self.width(), self.height(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: image::Rgb<u8> = image::Rgb([255, 255, 255]);
    const BLACK: image::Rgb<u8> = image::Rgb([0, 0, 0]);

    #[test]
    fn stroke_reaches_both_representations() {
        let mut doc = Document::default();
        doc.paint_stroke(
            Pos2::new(10.0, 10.0),
            Pos2::new(50.0, 10.0),
            Color32::BLACK,
            5.0,
        );
        assert_eq!(doc.shapes().len(), 1);
        assert_eq!(*doc.bitmap().get_pixel(30, 10), BLACK);
        assert_eq!(*doc.bitmap().get_pixel(30, 390), WHITE);
    }

    #[test]
    fn text_reaches_both_representations() {
        let mut doc = Document::default();
        doc.place_text(Pos2::new(20.0, 20.0), "hello".to_owned(), Color32::BLACK);
        assert_eq!(doc.shapes().len(), 1);
        let touched = doc.bitmap().pixels().filter(|p| **p != WHITE).count();
        assert!(touched > 0);
    }

    #[test]
    fn empty_text_is_dropped() {
        let mut doc = Document::default();
        doc.place_text(Pos2::new(20.0, 20.0), String::new(), Color32::BLACK);
        assert!(doc.shapes().is_empty());
    }

    #[test]
    fn clear_resets_content_but_not_size() {
        let mut doc = Document::default();
        doc.paint_stroke(
            Pos2::new(0.0, 0.0),
            Pos2::new(100.0, 100.0),
            Color32::RED,
            3.0,
        );
        doc.clear();
        assert!(doc.shapes().is_empty());
        assert_eq!((doc.width(), doc.height()), (600, 400));
        assert!(doc.bitmap().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn resize_discards_content() {
        let mut doc = Document::default();
        doc.paint_stroke(
            Pos2::new(10.0, 10.0),
            Pos2::new(50.0, 10.0),
            Color32::BLACK,
            5.0,
        );
        doc.resize(200, 100);
        assert_eq!((doc.width(), doc.height()), (200, 100));
        assert!(doc.shapes().is_empty());
        assert!(doc.bitmap().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn zero_sized_resize_is_a_noop() {
        let mut doc = Document::default();
        doc.paint_stroke(
            Pos2::new(10.0, 10.0),
            Pos2::new(50.0, 10.0),
            Color32::BLACK,
            5.0,
        );
        doc.resize(0, 100);
        doc.resize(100, 0);
        assert_eq!((doc.width(), doc.height()), (600, 400));
        assert_eq!(doc.shapes().len(), 1);
        assert_eq!(*doc.bitmap().get_pixel(30, 10), BLACK);
    }

    #[test]
    fn pick_color_samples_the_bitmap() {
        let mut doc = Document::default();
        assert_eq!(doc.pick_color(Pos2::new(5.0, 5.0)), Some(Color32::WHITE));
        doc.paint_stroke(
            Pos2::new(10.0, 10.0),
            Pos2::new(50.0, 10.0),
            Color32::RED,
            5.0,
        );
        assert_eq!(doc.pick_color(Pos2::new(30.0, 10.0)), Some(Color32::RED));
        assert_eq!(doc.pick_color(Pos2::new(-1.0, 10.0)), None);
        assert_eq!(doc.pick_color(Pos2::new(600.0, 10.0)), None);
    }

    #[test]
    fn display_background_never_touches_the_bitmap() {
        let mut doc = Document::default();
        doc.set_display_background(Color32::DARK_GRAY);
        assert_eq!(doc.display_background(), Color32::DARK_GRAY);
        assert_eq!(doc.background(), Color32::WHITE);
        assert!(doc.bitmap().pixels().all(|p| *p == WHITE));
    }
}
