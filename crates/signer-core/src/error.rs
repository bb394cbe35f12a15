use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid font colour '{0}' (expected #rrggbb)")]
    InvalidColour(String),

    #[error("Invalid coordinate '{0}' (expected x,y)")]
    InvalidCoordinate(String),

    #[error("Unable to parse font file {}", .0.display())]
    InvalidFont(PathBuf),

    #[error("No names found in {}", .0.display())]
    NoNames(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SignerError>;
