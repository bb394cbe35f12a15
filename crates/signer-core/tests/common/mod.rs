#![allow(dead_code)]

use std::path::PathBuf;

use image::{DynamicImage, Rgba, RgbaImage};
use signer_core::template::TemplateImage;
use signer_core::viewport::ViewportController;

/// Build a solid white template of the given size.
pub fn blank_template(width: u32, height: u32) -> TemplateImage {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    TemplateImage::from_image(DynamicImage::ImageRgba8(img)).expect("non-empty template")
}

/// Controller over a blank template, grid off.
pub fn controller(width: u32, height: u32) -> ViewportController {
    ViewportController::new(blank_template(width, height), false)
}

/// Write a blank template PNG into `dir` and return its path.
pub fn write_template_png(dir: &std::path::Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("template.png");
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    img.save(&path).expect("write template");
    path
}

/// A TrueType font available on the test machine, if any.
pub fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
}

/// Exact (unfloored) image-space position under a viewport point.
pub fn image_pos(c: &ViewportController, vx: f64, vy: f64) -> (f64, f64) {
    let (cx, cy) = c.viewport_to_canvas(vx, vy);
    (cx / c.scale(), cy / c.scale())
}
