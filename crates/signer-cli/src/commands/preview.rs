use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use signer_core::template::TemplateImage;
use signer_core::viewport::{rasterize, ViewportController};

#[derive(Args)]
pub struct PreviewArgs {
    /// Template image file
    pub file: PathBuf,

    /// Zoom scale (clamped to 0.1..8.0)
    #[arg(short, long, default_value = "1.0")]
    pub scale: f64,

    /// Draw the calibration grid
    #[arg(short, long)]
    pub grid: bool,

    /// Output file path
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let template = TemplateImage::open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let mut controller = ViewportController::new(template, args.grid);
    controller.zoom(0.0, 0.0, args.scale);
    let directive = controller.render();

    println!(
        "Rendering {}x{} at {:.0}%",
        directive.scaled_width,
        directive.scaled_height,
        controller.scale() * 100.0
    );

    let bitmap = rasterize(controller.image(), &directive);
    bitmap
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
