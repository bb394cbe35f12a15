use image::{Rgba, RgbaImage};

use crate::consts::{GRID_COLOUR, GRID_FRACTIONS};
use crate::template::TemplateImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridOrientation {
    Vertical,
    Horizontal,
}

/// One calibration grid segment in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub orientation: GridOrientation,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// What the display collaborator must draw for the current viewport state.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderDirective {
    pub scale: f64,
    /// Size of the resized image, never below 1x1.
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Canvas position shown at the viewport's top-left corner.
    pub scroll_offset: (f64, f64),
    /// Grid segments, empty when the grid is off.
    pub grid: Vec<GridLine>,
    /// Part of the scaled image inside the viewport, when its size is known.
    pub visible: Option<CanvasRect>,
}

impl RenderDirective {
    pub(super) fn build(
        width: u32,
        height: u32,
        scale: f64,
        scroll_offset: (f64, f64),
        show_grid: bool,
        viewport_size: Option<(f64, f64)>,
    ) -> Self {
        let (sw, sh) = scaled_size(width, height, scale);

        let grid = if show_grid { grid_lines(sw, sh) } else { Vec::new() };

        let visible = viewport_size.map(|(vw, vh)| {
            let x0 = scroll_offset.0.max(0.0);
            let y0 = scroll_offset.1.max(0.0);
            let x1 = (scroll_offset.0 + vw).min(sw as f64);
            let y1 = (scroll_offset.1 + vh).min(sh as f64);
            CanvasRect {
                x: x0,
                y: y0,
                width: (x1 - x0).max(0.0),
                height: (y1 - y0).max(0.0),
            }
        });

        Self {
            scale,
            scaled_width: sw,
            scaled_height: sh,
            scroll_offset,
            grid,
            visible,
        }
    }

    /// Viewport position of the scaled image's top-left corner.
    pub fn image_origin(&self) -> (f64, f64) {
        (-self.scroll_offset.0, -self.scroll_offset.1)
    }
}

/// Pixel size of the image drawn at `scale`, never below 1x1.
pub(super) fn scaled_size(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let sw = (f64::from(width) * scale).round().max(1.0) as u32;
    let sh = (f64::from(height) * scale).round().max(1.0) as u32;
    (sw, sh)
}

/// Three vertical and three horizontal segments at the quarter marks.
fn grid_lines(sw: u32, sh: u32) -> Vec<GridLine> {
    let (w, h) = (sw as f64, sh as f64);
    let vertical = GRID_FRACTIONS.iter().map(|f| GridLine {
        orientation: GridOrientation::Vertical,
        start: (w * f, 0.0),
        end: (w * f, h),
    });
    let horizontal = GRID_FRACTIONS.iter().map(|f| GridLine {
        orientation: GridOrientation::Horizontal,
        start: (0.0, h * f),
        end: (w, h * f),
    });
    vertical.chain(horizontal).collect()
}

/// Produce the bitmap described by `directive`.
///
/// With a known viewport only the visible crop is resized, otherwise the
/// whole scaled image. Grid lines are drawn on top.
pub fn rasterize(image: &TemplateImage, directive: &RenderDirective) -> RgbaImage {
    let scale = directive.scale;
    let (mut bitmap, origin) = match directive.visible {
        Some(rect) if !rect.is_empty() => {
            let src_x = (rect.x / scale).floor() as u32;
            let src_y = (rect.y / scale).floor() as u32;
            let src_w = ((rect.x + rect.width) / scale).ceil() as u32 - src_x;
            let src_h = ((rect.y + rect.height) / scale).ceil() as u32 - src_y;
            let out_w = rect.width.round().max(1.0) as u32;
            let out_h = rect.height.round().max(1.0) as u32;
            let crop = image.resize_region(src_x, src_y, src_w, src_h, out_w, out_h);
            (crop, (rect.x, rect.y))
        }
        _ => (
            image.resize(directive.scaled_width, directive.scaled_height),
            (0.0, 0.0),
        ),
    };

    for line in &directive.grid {
        draw_grid_line(&mut bitmap, line, origin);
    }
    bitmap
}

fn draw_grid_line(bitmap: &mut RgbaImage, line: &GridLine, origin: (f64, f64)) {
    let (w, h) = (bitmap.width() as i64, bitmap.height() as i64);
    let colour = Rgba(GRID_COLOUR);
    match line.orientation {
        GridOrientation::Vertical => {
            let x = (line.start.0 - origin.0).floor() as i64;
            if !(0..w).contains(&x) {
                return;
            }
            for y in 0..h {
                bitmap.put_pixel(x as u32, y as u32, colour);
            }
        }
        GridOrientation::Horizontal => {
            let y = (line.start.1 - origin.1).floor() as i64;
            if !(0..h).contains(&y) {
                return;
            }
            for x in 0..w {
                bitmap.put_pixel(x as u32, y as u32, colour);
            }
        }
    }
}
