use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::error::{Result, SignerError};

/// A certificate template loaded into memory.
///
/// The pixels never change once loaded; every view of the template is a
/// resized or cropped copy.
#[derive(Clone, Debug)]
pub struct TemplateImage {
    pixels: DynamicImage,
}

impl TemplateImage {
    /// Load a template from disk, rejecting empty images.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)?;
        Self::from_image(img)
    }

    /// Wrap an already decoded image.
    pub fn from_image(pixels: DynamicImage) -> Result<Self> {
        let (width, height) = (pixels.width(), pixels.height());
        if width == 0 || height == 0 {
            return Err(SignerError::InvalidDimensions { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Resize the whole template to `width`x`height` (Lanczos3).
    pub fn resize(&self, width: u32, height: u32) -> RgbaImage {
        image::imageops::resize(
            &self.pixels.to_rgba8(),
            width.max(1),
            height.max(1),
            FilterType::Lanczos3,
        )
    }

    /// Resize a sub-rectangle of the template (image pixel units) to
    /// `width`x`height`. The source rectangle is clipped to the image.
    pub fn resize_region(
        &self,
        src_x: u32,
        src_y: u32,
        src_width: u32,
        src_height: u32,
        width: u32,
        height: u32,
    ) -> RgbaImage {
        let x = src_x.min(self.width() - 1);
        let y = src_y.min(self.height() - 1);
        let w = src_width.clamp(1, self.width() - x);
        let h = src_height.clamp(1, self.height() - y);
        let region = self.pixels.crop_imm(x, y, w, h).to_rgba8();
        image::imageops::resize(&region, width.max(1), height.max(1), FilterType::Lanczos3)
    }
}
