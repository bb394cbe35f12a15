mod sink;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SignerError};

pub use sink::{CoordinateSink, FileSink, MemorySink};

/// A pixel position in the original (unscaled) template image.
///
/// Produced by a primary click inside the rendered image; this is the point
/// the labeling batch stamps names at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImagePoint {
    pub x: u32,
    pub y: u32,
}

impl ImagePoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ImagePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for ImagePoint {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SignerError::InvalidCoordinate(s.trim().to_string());
        let (x, y) = s.trim().split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<u32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}

/// Read the stored signature position back from a coordinate file.
///
/// Only the first line is considered.
pub fn load_coordinate(path: &Path) -> Result<ImagePoint> {
    let contents = std::fs::read_to_string(path)?;
    let first = contents.lines().next().unwrap_or_default();
    first.parse()
}
