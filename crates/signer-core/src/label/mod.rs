mod colour;
mod stamp;

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, ImageFormat};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LabelConfig;
use crate::coords::load_coordinate;
use crate::error::{Result, SignerError};
use crate::template::TemplateImage;

pub use colour::parse_hex_colour;
pub use stamp::{load_font, TextStamp};

/// Image formats certificates can be written as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
    #[serde(alias = "tif")]
    Tiff,
    Webp,
    Bmp,
    Gif,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        Self::Png,
        Self::Jpeg,
        Self::Tiff,
        Self::Webp,
        Self::Bmp,
        Self::Gif,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Tiff => "tiff",
            Self::Webp => "webp",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Tiff => ImageFormat::Tiff,
            Self::Webp => ImageFormat::WebP,
            Self::Bmp => ImageFormat::Bmp,
            Self::Gif => ImageFormat::Gif,
        }
    }

    /// Formats without an alpha channel get an RGB copy.
    fn needs_rgb(self) -> bool {
        matches!(self, Self::Jpeg | Self::Bmp)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Read one name per line, trimming whitespace and skipping blank lines.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    let mut names = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() {
            warn!(line = i + 1, "skipping blank name");
            continue;
        }
        names.push(name.to_string());
    }
    if names.is_empty() {
        return Err(SignerError::NoNames(path.to_path_buf()));
    }
    Ok(names)
}

/// File name of the certificate for `name`, e.g. `Ada_Lovelace-certificate.png`.
pub fn certificate_file_name(name: &str, format: OutputFormat) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{stem}-certificate.{}", format.extension())
}

/// Output path for each name, in name order. Names whose file name was
/// already taken are skipped with a warning so no certificate overwrites
/// another.
pub fn certificate_targets<'n>(
    names: &'n [String],
    output_dir: &Path,
    format: OutputFormat,
) -> Vec<(&'n str, PathBuf)> {
    let mut seen = HashSet::new();
    let mut targets = Vec::with_capacity(names.len());
    for name in names {
        let file_name = certificate_file_name(name, format);
        if !seen.insert(file_name.clone()) {
            warn!(%name, file = %file_name, "skipping name with duplicate certificate file");
            continue;
        }
        targets.push((name.as_str(), output_dir.join(file_name)));
    }
    targets
}

/// Stamp every name onto a copy of the template and save the results.
///
/// Inputs are validated up front (colour, names, coordinate, template, font)
/// so a bad setting fails before any file is written. Calls
/// `on_progress(done, total)` after each certificate. Returns the written
/// paths in name order.
pub fn label_certificates(
    config: &LabelConfig,
    on_progress: impl Fn(usize, usize) + Send + Sync,
) -> Result<Vec<PathBuf>> {
    let colour = parse_hex_colour(&config.font_colour)?;
    let names = read_names(&config.names)?;
    let anchor = load_coordinate(&config.coords_path)?;
    let template = TemplateImage::open(&config.template)?;
    let font = load_font(&config.font_path)?;

    if !config.output_dir.exists() {
        info!(dir = %config.output_dir.display(), "creating output directory");
        std::fs::create_dir_all(&config.output_dir)?;
    }

    let base = template.pixels().to_rgba8();
    let stamp = TextStamp::new(&font, config.font_size, colour);
    let targets = certificate_targets(&names, &config.output_dir, config.output_format);
    let total = targets.len();
    let done = AtomicUsize::new(0);

    targets
        .into_par_iter()
        .map(|(name, path)| -> Result<PathBuf> {
            let mut bitmap = base.clone();
            stamp.draw_centred(&mut bitmap, name, anchor);
            let img = DynamicImage::ImageRgba8(bitmap);
            let img = if config.output_format.needs_rgb() {
                DynamicImage::ImageRgb8(img.to_rgb8())
            } else {
                img
            };
            img.save_with_format(&path, config.output_format.image_format())?;
            info!(path = %path.display(), "certificate saved");

            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed, total);
            Ok(path)
        })
        .collect()
}
