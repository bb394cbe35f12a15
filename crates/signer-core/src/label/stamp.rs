use std::path::Path;

use image::{Rgb, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::coords::ImagePoint;
use crate::error::{Result, SignerError};

/// Load a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let bytes = std::fs::read(path)?;
    Font::try_from_vec(bytes).ok_or_else(|| SignerError::InvalidFont(path.to_path_buf()))
}

/// Draws single lines of text onto certificate bitmaps.
pub struct TextStamp<'f> {
    font: &'f Font<'static>,
    scale: Scale,
    colour: Rgb<u8>,
}

impl<'f> TextStamp<'f> {
    /// `size` is the em size in pixels, as font sizes usually are.
    pub fn new(font: &'f Font<'static>, size: f32, colour: Rgb<u8>) -> Self {
        Self {
            font,
            scale: em_scale(font, size),
            colour,
        }
    }

    /// Distance from ascent to descent in pixels.
    pub fn line_height(&self) -> f32 {
        let v = self.font.v_metrics(self.scale);
        v.ascent - v.descent
    }

    /// Horizontal advance of `text` in pixels.
    pub fn width(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Draw `text` horizontally centred on `anchor.x` with its top at
    /// `anchor.y`. Parts falling outside the bitmap are clipped.
    pub fn draw_centred(&self, bitmap: &mut RgbaImage, text: &str, anchor: ImagePoint) {
        let x = anchor.x as f32 - self.width(text) / 2.0;
        let baseline = anchor.y as f32 + self.font.v_metrics(self.scale).ascent;
        let (w, h) = (bitmap.width() as i32, bitmap.height() as i32);

        for glyph in self.font.layout(text, self.scale, point(x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let a = coverage.clamp(0.0, 1.0);
                let pixel = bitmap.get_pixel_mut(px as u32, py as u32);
                for c in 0..3 {
                    let blended = pixel[c] as f32 * (1.0 - a) + self.colour[c] as f32 * a;
                    pixel[c] = blended.round() as u8;
                }
                pixel[3] = (pixel[3] as f32 + (255 - pixel[3]) as f32 * a).round() as u8;
            });
        }
    }
}

/// rusttype scales glyphs by ascent-to-descent height, so an em size has to
/// be converted through the font's units per em.
fn em_scale(font: &Font<'_>, size: f32) -> Scale {
    let v = font.v_metrics_unscaled();
    let units_per_em = f32::from(font.units_per_em());
    let height = v.ascent - v.descent;
    if units_per_em > 0.0 && height > 0.0 {
        Scale::uniform(size * height / units_per_em)
    } else {
        Scale::uniform(size)
    }
}
