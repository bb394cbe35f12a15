use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use signer_core::consts::DEFAULT_COORDS_FILE;
use signer_core::coords::load_coordinate;

#[derive(Args)]
pub struct CoordsArgs {
    /// Coordinate file written by the viewer
    #[arg(long, default_value = DEFAULT_COORDS_FILE)]
    pub coords: PathBuf,
}

pub fn run(args: &CoordsArgs) -> Result<()> {
    let point = load_coordinate(&args.coords)
        .with_context(|| format!("Failed to read coordinate from {}", args.coords.display()))?;
    println!("x={}, y={}", point.x, point.y);
    Ok(())
}
