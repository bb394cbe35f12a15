use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use signer_core::template::TemplateImage;

#[derive(Args)]
pub struct InfoArgs {
    /// Template image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let template = TemplateImage::open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", template.width(), template.height());
    println!("Color type:  {:?}", template.pixels().color());

    Ok(())
}
