mod app;
mod convert;
mod input;
mod messages;
mod panels;
mod session;
mod state;
mod worker;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use signer_core::config::SignerConfig;

/// Side panel and status bar space added around the image.
const CHROME_SIZE: [f32; 2] = [280.0, 80.0];

#[derive(Parser)]
#[command(name = "signer-gui", about = "Pick where names go on a certificate template")]
#[command(version)]
struct Args {
    /// Template image to open
    image: Option<PathBuf>,

    /// Show the calibration grid
    #[arg(short = 'g', long)]
    show_grid: bool,

    /// Coordinate file to write clicks to
    #[arg(long)]
    coords: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => SignerConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => SignerConfig::default(),
    };
    if args.show_grid {
        config.viewer.show_grid = true;
    }
    if let Some(coords) = args.coords {
        config.viewer.coords_path = coords.clone();
        config.label.coords_path = coords;
    }

    let inner = match args.image {
        Some(ref path) => {
            let (w, h) = image::image_dimensions(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let [w, h] = config.viewer.initial_window(w, h);
            [w as f32 + CHROME_SIZE[0], h as f32 + CHROME_SIZE[1]]
        }
        None => [1280.0, 800.0],
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner)
            .with_min_inner_size([640.0, 480.0])
            .with_title("Signer"),
        ..Default::default()
    };

    eframe::run_native(
        "Signer",
        options,
        Box::new(move |cc| Ok(Box::new(app::SignerApp::new(&cc.egui_ctx, config, args.image)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
