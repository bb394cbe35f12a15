mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use image::{Rgb, Rgba};
use signer_core::config::LabelConfig;
use signer_core::coords::ImagePoint;
use signer_core::error::SignerError;
use signer_core::label::{
    certificate_file_name, certificate_targets, label_certificates, load_font, parse_hex_colour, read_names,
    OutputFormat, TextStamp,
};

use common::{system_font, write_template_png};

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

#[test]
fn test_parse_hex_colour() {
    assert_eq!(parse_hex_colour("#abcdef").unwrap(), Rgb([0xab, 0xcd, 0xef]));
    assert_eq!(parse_hex_colour("FF22aa").unwrap(), Rgb([0xff, 0x22, 0xaa]));
    assert_eq!(parse_hex_colour("#000000").unwrap(), Rgb([0, 0, 0]));
}

#[test]
fn test_invalid_hex_colour() {
    for bad in ["nothing", "#abc", "#abcdeg", "", "#1234567", "#ééé"] {
        let err = parse_hex_colour(bad).unwrap_err();
        assert!(matches!(err, SignerError::InvalidColour(_)));
        assert!(err.to_string().starts_with("Invalid font colour"));
    }
}

// ---------------------------------------------------------------------------
// Names and output files
// ---------------------------------------------------------------------------

#[test]
fn test_read_names_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.csv");
    std::fs::write(&path, "Ada Lovelace\n\n  Alan Turing  \r\n   \nGrace Hopper").unwrap();
    assert_eq!(
        read_names(&path).unwrap(),
        vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]
    );
}

#[test]
fn test_read_names_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.csv");
    std::fs::write(&path, "\n \n").unwrap();
    assert!(matches!(read_names(&path), Err(SignerError::NoNames(_))));
}

#[test]
fn test_certificate_file_name() {
    assert_eq!(
        certificate_file_name("Paul K. Korir", OutputFormat::Png),
        "Paul_K._Korir-certificate.png"
    );
    assert_eq!(
        certificate_file_name(" a/b ", OutputFormat::Jpeg),
        "a_b-certificate.jpg"
    );
}

#[test]
fn test_duplicate_file_names_are_skipped() {
    let names: Vec<String> = ["Ada Lovelace", "Ada_Lovelace", "Bob", "Bob"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let dir = std::path::Path::new("out");
    let targets = certificate_targets(&names, dir, OutputFormat::Png);

    assert_eq!(
        targets,
        vec![
            ("Ada Lovelace", dir.join("Ada_Lovelace-certificate.png")),
            ("Bob", dir.join("Bob-certificate.png")),
        ]
    );
}

#[test]
fn test_output_format_extension() {
    assert_eq!(OutputFormat::default(), OutputFormat::Png);
    assert_eq!(OutputFormat::Tiff.to_string(), "tiff");
    assert_eq!(OutputFormat::Webp.extension(), "webp");
}

// ---------------------------------------------------------------------------
// Batch labeling
// ---------------------------------------------------------------------------

fn label_config(dir: &std::path::Path, font: std::path::PathBuf) -> LabelConfig {
    let names = dir.join("names.csv");
    std::fs::write(&names, "Ada Lovelace\nAlan Turing\n").unwrap();
    let coords = dir.join("name_coords.txt");
    std::fs::write(&coords, "100,20\n").unwrap();

    LabelConfig {
        names,
        template: write_template_png(dir, 200, 100),
        font_path: font,
        font_size: 24.0,
        font_colour: "#ff0000".into(),
        output_dir: dir.join("out"),
        output_format: OutputFormat::Png,
        coords_path: coords,
    }
}

#[test]
fn test_invalid_colour_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = label_config(dir.path(), dir.path().join("font.ttf"));
    config.font_colour = "nothing".into();

    let err = label_certificates(&config, |_, _| {}).unwrap_err();
    assert!(matches!(err, SignerError::InvalidColour(_)));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_invalid_font() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("font.ttf");
    std::fs::write(&font, b"not a font").unwrap();
    let config = label_config(dir.path(), font.clone());

    assert!(matches!(load_font(&font), Err(SignerError::InvalidFont(_))));
    let err = label_certificates(&config, |_, _| {}).unwrap_err();
    assert!(matches!(err, SignerError::InvalidFont(_)));
}

#[test]
fn test_missing_coordinate_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = label_config(dir.path(), dir.path().join("font.ttf"));
    config.coords_path = dir.path().join("missing.txt");
    assert!(matches!(
        label_certificates(&config, |_, _| {}),
        Err(SignerError::Io(_))
    ));
}

#[test]
fn test_label_certificates_writes_files() {
    let Some(font) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let config = label_config(dir.path(), font);

    let calls = AtomicUsize::new(0);
    let written = label_certificates(&config, |done, total| {
        assert!(done <= total);
        assert_eq!(total, 2);
        calls.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("Ada_Lovelace-certificate.png"));
    assert!(written[1].ends_with("Alan_Turing-certificate.png"));

    let img = image::open(&written[0]).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (200, 100));
    let red_pixels = img
        .pixels()
        .filter(|p| p[0] > 200 && p[1] < 100 && p[2] < 100)
        .count();
    assert!(red_pixels > 0, "name should be stamped in red");
    // Nothing is drawn above the stored y coordinate.
    assert!((0..20).all(|y| (0..200).all(|x| *img.get_pixel(x, y) == Rgba([255, 255, 255, 255]))));
}

#[test]
fn test_label_jpeg_output() {
    let Some(font) = system_font() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let mut config = label_config(dir.path(), font);
    config.output_format = OutputFormat::Jpeg;

    let written = label_certificates(&config, |_, _| {}).unwrap();
    assert!(written.iter().all(|p| p.extension().unwrap() == "jpg"));
    assert!(image::open(&written[1]).is_ok());
}

#[test]
fn test_text_stamp_centres_on_anchor() {
    let Some(font_path) = system_font() else {
        return;
    };
    let font = load_font(&font_path).unwrap();
    let stamp = TextStamp::new(&font, 30.0, Rgb([0, 0, 0]));
    assert!(stamp.width("WWW") > stamp.width("W"));
    assert_eq!(stamp.width(""), 0.0);

    let mut bitmap = image::RgbaImage::from_pixel(300, 80, Rgba([255, 255, 255, 255]));
    stamp.draw_centred(&mut bitmap, "Centre", ImagePoint::new(150, 10));

    let dark: Vec<u32> = bitmap
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] < 128)
        .map(|(x, _, _)| x)
        .collect();
    assert!(!dark.is_empty());
    let min = *dark.iter().min().unwrap() as f32;
    let max = *dark.iter().max().unwrap() as f32;
    let centre = (min + max) / 2.0;
    assert!((centre - 150.0).abs() < 6.0, "text centred at {centre}");
}

#[test]
fn test_label_duplicate_names_written_once() {
    let Some(font) = system_font() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let config = label_config(dir.path(), font);
    std::fs::write(&config.names, "Ada Lovelace\nAda_Lovelace\nAlan Turing\n").unwrap();

    let totals = std::sync::Mutex::new(Vec::new());
    let written = label_certificates(&config, |_, total| totals.lock().unwrap().push(total))
        .unwrap();
    assert_eq!(written.len(), 2);
    assert!(totals.lock().unwrap().iter().all(|&t| t == 2));
}

#[test]
fn test_text_stamp_uses_em_size() {
    let Some(font_path) = system_font() else {
        return;
    };
    let font = load_font(&font_path).unwrap();
    let stamp = TextStamp::new(&font, 50.0, Rgb([0, 0, 0]));

    // A 50px em is taller than 50px from ascent to descent for ordinary
    // fonts; the exact height comes from the font's own metrics.
    let v = font.v_metrics_unscaled();
    let expected = 50.0 * (v.ascent - v.descent) / f32::from(font.units_per_em());
    assert!((stamp.line_height() - expected).abs() < 0.01);
    assert!(stamp.line_height() > 50.0);
}
