mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signer", about = "Stamp names onto certificate templates")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stamp every name from a list onto the template
    Label(commands::label::LabelArgs),
    /// Show template image metadata
    Info(commands::info::InfoArgs),
    /// Show the stored signature coordinate
    Coords(commands::coords::CoordsArgs),
    /// Render the template at a given zoom, optionally with the grid
    Preview(commands::preview::PreviewArgs),
    /// Print or save a default config file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Label(args) => commands::label::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Coords(args) => commands::coords::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
