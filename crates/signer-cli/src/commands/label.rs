use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use signer_core::config::{LabelConfig, SignerConfig};
use signer_core::label::{label_certificates, parse_hex_colour, OutputFormat};
use tracing::debug;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Png,
    Jpeg,
    Jpg,
    Tiff,
    Tif,
    Webp,
    Bmp,
    Gif,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Png => OutputFormat::Png,
            OutputFormatArg::Jpeg | OutputFormatArg::Jpg => OutputFormat::Jpeg,
            OutputFormatArg::Tiff | OutputFormatArg::Tif => OutputFormat::Tiff,
            OutputFormatArg::Webp => OutputFormat::Webp,
            OutputFormatArg::Bmp => OutputFormat::Bmp,
            OutputFormatArg::Gif => OutputFormat::Gif,
        }
    }
}

#[derive(Args)]
pub struct LabelArgs {
    /// A text/CSV file with a name on each row
    #[arg(short, long, required_unless_present = "config")]
    pub names: Option<PathBuf>,

    /// The certificate template image
    #[arg(short, long, required_unless_present = "config")]
    pub template: Option<PathBuf>,

    /// Output directory [default: output_dir]
    #[arg(short = 'O', long)]
    pub output_dir: Option<PathBuf>,

    /// Output format [default: png]
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormatArg>,

    /// Font file [default: fonts/arial.ttf]
    #[arg(short = 'F', long)]
    pub font_path: Option<PathBuf>,

    /// Font size [default: 50]
    #[arg(short = 'S', long)]
    pub font_size: Option<f32>,

    /// Font colour in hex, quoted (e.g. '#ff22aa') [default: '#000000']
    #[arg(short = 'C', long, value_parser = parse_colour_arg)]
    pub font_colour: Option<String>,

    /// Coordinate file written by the viewer [default: name_coords.txt]
    #[arg(long)]
    pub coords: Option<PathBuf>,

    /// Settings file (TOML); command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_colour_arg(s: &str) -> std::result::Result<String, String> {
    parse_hex_colour(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// Merge the optional config file with the command-line overrides.
pub fn build_config(args: &LabelArgs) -> Result<LabelConfig> {
    let mut config = match args.config {
        Some(ref path) => {
            SignerConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?
                .label
        }
        None => LabelConfig::default(),
    };

    if let Some(ref names) = args.names {
        config.names = names.clone();
    }
    if let Some(ref template) = args.template {
        config.template = template.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(format) = args.output_format {
        config.output_format = format.into();
    }
    if let Some(ref font) = args.font_path {
        config.font_path = font.clone();
    }
    if let Some(size) = args.font_size {
        config.font_size = size;
    }
    if let Some(ref colour) = args.font_colour {
        config.font_colour = colour.clone();
    }
    if let Some(ref coords) = args.coords {
        config.coords_path = coords.clone();
    }
    Ok(config)
}

fn print_summary(config: &LabelConfig) {
    let label = Style::new().dim();
    let path = Style::new().underlined();
    let value = Style::new().bold();

    println!();
    println!("  {}", Style::new().cyan().bold().apply_to("Signer"));
    println!();
    println!("  {:<14}{}", label.apply_to("Names"), path.apply_to(config.names.display()));
    println!("  {:<14}{}", label.apply_to("Template"), path.apply_to(config.template.display()));
    println!("  {:<14}{}", label.apply_to("Font"), path.apply_to(config.font_path.display()));
    println!(
        "  {:<14}{} {}",
        label.apply_to("Style"),
        value.apply_to(format!("{}px", config.font_size)),
        value.apply_to(&config.font_colour)
    );
    println!("  {:<14}{}", label.apply_to("Coordinate"), path.apply_to(config.coords_path.display()));
    println!(
        "  {:<14}{} ({})",
        label.apply_to("Output"),
        path.apply_to(config.output_dir.display()),
        value.apply_to(config.output_format)
    );
    println!();
}

pub fn run(args: &LabelArgs) -> Result<()> {
    let config = build_config(args)?;
    debug!(?config, "label config");
    print_summary(&config);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Labeling");

    let written = label_certificates(&config, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })
    .context("Labeling failed")?;

    pb.finish_with_message("Done");
    println!(
        "\n{} certificate(s) saved to {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        label: LabelArgs,
    }

    #[test]
    fn flags_override_defaults() {
        let h = Harness::parse_from([
            "signer", "-n", "names.csv", "-t", "tpl.png", "-S", "32", "-C", "#abcdef", "-f", "jpg",
        ]);
        let config = build_config(&h.label).unwrap();
        assert_eq!(config.names, PathBuf::from("names.csv"));
        assert_eq!(config.template, PathBuf::from("tpl.png"));
        assert_eq!(config.font_size, 32.0);
        assert_eq!(config.font_colour, "#abcdef");
        assert_eq!(config.output_format, OutputFormat::Jpeg);
        assert_eq!(config.output_dir, PathBuf::from("output_dir"));
    }

    #[test]
    fn invalid_colour_rejected_by_parser() {
        let err = Harness::try_parse_from([
            "signer", "-n", "names.csv", "-t", "tpl.png", "-C", "nothing",
        ])
        .err()
        .expect("colour must be rejected");
        assert!(err.to_string().contains("Invalid font colour"));
    }

    #[test]
    fn names_required_without_config() {
        assert!(Harness::try_parse_from(["signer", "-t", "tpl.png"]).is_err());
    }
}
