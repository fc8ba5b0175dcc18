//! Pixel-level drawing primitives for the off-screen bitmap.
//!
//! The display surface gets its anti-aliasing from egui; over here the pen
//! is opaque and lines are stamped as discs, which gives the same rounded
//! caps the display shows. Text goes through ab_glyph using the same font
//! bytes egui renders with, blended by glyph coverage.

use ab_glyph::{Font, FontArc, ScaleFont, point};
use egui::{Color32, FontTweak, Pos2};
use image::{Rgb, RgbImage};

pub fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

pub fn to_color32(pixel: Rgb<u8>) -> Color32 {
    Color32::from_rgb(pixel.0[0], pixel.0[1], pixel.0[2])
}

/// Mix `color` into the pixel at (x, y) by `coverage` in 0..=1.
/// Coordinates outside the image are dropped.
pub fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let dst = img.get_pixel(x as u32, y as u32).0;
    let mix = |src: u8, dst: u8| {
        (dst as f32 + (src as f32 - dst as f32) * coverage)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    img.put_pixel(
        x as u32,
        y as u32,
        Rgb([
            mix(color.0[0], dst[0]),
            mix(color.0[1], dst[1]),
            mix(color.0[2], dst[2]),
        ]),
    );
}

/// Fill a solid disc. The scan is clamped to the image, so a center
/// outside the bitmap just paints whatever part of the disc is inside.
pub fn draw_disc(img: &mut RgbImage, center: Pos2, radius: f32, color: Rgb<u8>) {
    if radius <= 0.0 {
        return;
    }
    let radius_sq = radius * radius;
    let width = img.width() as i32;
    let height = img.height() as i32;
    let min_x = (center.x - radius).floor().max(0.0) as i32;
    let max_x = (center.x + radius).ceil().min((width - 1) as f32) as i32;
    let min_y = (center.y - radius).floor().max(0.0) as i32;
    let max_y = (center.y + radius).ceil().min((height - 1) as f32) as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draw a line segment of the given width by stamping discs along it,
/// one per step of the major axis. Both endpoints get a full cap.
pub fn draw_line(img: &mut RgbImage, from: Pos2, to: Pos2, color: Rgb<u8>, width: f32) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
    let radius = (width / 2.0).max(0.5);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let p = Pos2::new(from.x + dx * t, from.y + dy * t);
        draw_disc(img, p, radius, color);
    }
}

/// Rasterize `text` anchored at its top-left corner.
pub fn draw_text(
    img: &mut RgbImage,
    font: &FontArc,
    tweak: FontTweak,
    pos: Pos2,
    text: &str,
    color: Rgb<u8>,
    size: f32,
) {
    if text.is_empty() {
        return;
    }
    let scaled = font.as_scaled(size * tweak.scale);
    let mut caret = point(pos.x, pos.y + scaled.ascent() + tweak.y_offset * size);
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = x as i32 + bounds.min.x as i32;
                let py = y as i32 + bounds.min.y as i32;
                blend_pixel(img, px, py, color, coverage);
            });
        }
    }
}

/// The first proportional font egui ships, as an ab_glyph face.
///
/// Using the same bytes for the bitmap that egui uses on screen keeps the
/// two representations of a text mark visually identical.
pub fn default_font() -> Option<(FontArc, FontTweak)> {
    let definitions = egui::FontDefinitions::default();
    let family = definitions.families.get(&egui::FontFamily::Proportional)?;
    let font_name = family.first()?;
    let data = definitions.font_data.get(font_name)?.clone();
    let font = match &data.font {
        std::borrow::Cow::Borrowed(bytes) => {
            ab_glyph::FontRef::try_from_slice_and_index(bytes, data.index)
                .map(FontArc::from)
                .ok()
        }
        std::borrow::Cow::Owned(bytes) => {
            ab_glyph::FontVec::try_from_vec_and_index(bytes.clone(), data.index)
                .map(FontArc::from)
                .ok()
        }
    }?;
    Some((font, data.tweak))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn blank(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, WHITE)
    }

    #[test]
    fn line_covers_endpoints_and_midpoint() {
        let mut img = blank(100, 20);
        draw_line(&mut img, Pos2::new(10.0, 10.0), Pos2::new(90.0, 10.0), BLACK, 5.0);
        assert_eq!(*img.get_pixel(10, 10), BLACK);
        assert_eq!(*img.get_pixel(50, 10), BLACK);
        assert_eq!(*img.get_pixel(90, 10), BLACK);
        // Far from the line nothing changes.
        assert_eq!(*img.get_pixel(50, 1), WHITE);
    }

    #[test]
    fn disc_is_clamped_to_bounds() {
        let mut img = blank(10, 10);
        // Center outside the bitmap: must not panic, paints the overlap.
        draw_disc(&mut img, Pos2::new(-2.0, 5.0), 4.0, BLACK);
        draw_disc(&mut img, Pos2::new(15.0, 5.0), 4.0, BLACK);
        assert_eq!(*img.get_pixel(0, 5), BLACK);
        assert_eq!(*img.get_pixel(9, 5), BLACK);
    }

    #[test]
    fn blend_is_a_lerp() {
        let mut img = blank(1, 1);
        blend_pixel(&mut img, 0, 0, BLACK, 0.0);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        blend_pixel(&mut img, 0, 0, BLACK, 1.0);
        assert_eq!(*img.get_pixel(0, 0), BLACK);
        // Out of bounds is a no-op, not a panic.
        blend_pixel(&mut img, -1, 0, BLACK, 1.0);
        blend_pixel(&mut img, 0, 7, BLACK, 1.0);
    }

    #[test]
    fn text_marks_pixels() {
        let (font, tweak) = default_font().expect("egui default fonts are embedded");
        let mut img = blank(200, 50);
        draw_text(&mut img, &font, tweak, Pos2::new(5.0, 5.0), "Hi", BLACK, 24.0);
        let touched = img.pixels().filter(|p| **p != WHITE).count();
        assert!(touched > 0, "glyphs should cover at least some pixels");
    }

    #[test]
    fn empty_text_is_a_noop() {
        let (font, tweak) = default_font().expect("egui default fonts are embedded");
        let mut img = blank(20, 20);
        draw_text(&mut img, &font, tweak, Pos2::new(5.0, 5.0), "", BLACK, 16.0);
        assert!(img.pixels().all(|p| *p == WHITE));
    }
}
