use std::path::{Path, PathBuf};

use tracing::info;

use super::ImagePoint;
use crate::error::Result;

/// Output port receiving every successfully resolved click.
///
/// The store is a single slot: each call replaces whatever was stored before.
pub trait CoordinateSink {
    fn store(&mut self, point: ImagePoint) -> Result<()>;
}

/// Persists the point as one `x,y` line, overwriting the file each time.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CoordinateSink for FileSink {
    fn store(&mut self, point: ImagePoint) -> Result<()> {
        std::fs::write(&self.path, format!("{point}\n"))?;
        info!(path = %self.path.display(), %point, "signature coordinate stored");
        Ok(())
    }
}

/// Keeps the last point in memory. Used for dry runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    last: Option<ImagePoint>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<ImagePoint> {
        self.last
    }

    /// Number of successful stores.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CoordinateSink for MemorySink {
    fn store(&mut self, point: ImagePoint) -> Result<()> {
        self.last = Some(point);
        self.writes += 1;
        Ok(())
    }
}
