use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::Command;

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use png_resizer::converter::convert_dir;
use png_resizer::error::BatchError;
use png_resizer_core::config::ProcessingConfig;
use png_resizer_core::format::ImageFormat;
use png_resizer_core::pipeline::Pipeline;

fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    fs::write(path, out).unwrap();
}

fn dimensions(path: &Path, format: image::ImageFormat) -> (u32, u32) {
    let data = fs::read(path).unwrap();
    image::load_from_memory_with_format(&data, format)
        .unwrap()
        .dimensions()
}

#[test]
fn test_png_and_notes_example() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("a.png");
    let notes = dir.path().join("notes.txt");
    write_png(&png, 800, 600);
    fs::write(&notes, b"keep me").unwrap();

    let report = convert_dir(dir.path(), &Pipeline::standard(), &ProcessingConfig::default()).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(dimensions(&png, image::ImageFormat::Png), (600, 400));
    assert_eq!(dimensions(&dir.path().join("a.webp"), image::ImageFormat::WebP), (600, 400));
    assert_eq!(fs::read(&notes).unwrap(), b"keep me");
    assert!(!dir.path().join("notes.webp").exists());

    let result = &report.results[0];
    assert_eq!(result.path, png);
    assert_eq!(result.output(ImageFormat::Webp).unwrap().path, dir.path().join("a.webp"));
}

#[test]
fn test_every_png_gets_a_webp_sibling() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("one.png"), 120, 90);
    write_png(&dir.path().join("Two.PNG"), 1024, 768);
    write_png(&dir.path().join("three.png"), 600, 400);

    convert_dir(dir.path(), &Pipeline::standard(), &ProcessingConfig::default()).unwrap();

    for stem in ["one", "Two", "three"] {
        let png = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .find(|p| {
                p.file_stem().unwrap() == stem
                    && p.extension().unwrap().eq_ignore_ascii_case("png")
            })
            .unwrap();
        assert_eq!(dimensions(&png, image::ImageFormat::Png), (600, 400));
        let webp = dir.path().join(format!("{stem}.webp"));
        assert_eq!(dimensions(&webp, image::ImageFormat::WebP), (600, 400));
    }
}

#[test]
fn test_second_run_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("a.png");
    write_png(&png, 333, 777);

    let config = ProcessingConfig::default();
    let pipeline = Pipeline::standard();
    convert_dir(dir.path(), &pipeline, &config).unwrap();
    convert_dir(dir.path(), &pipeline, &config).unwrap();

    assert_eq!(dimensions(&png, image::ImageFormat::Png), (600, 400));
    assert_eq!(dimensions(&dir.path().join("a.webp"), image::ImageFormat::WebP), (600, 400));
}

#[test]
fn test_subdirectories_are_not_entered() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_png(&nested.join("deep.png"), 50, 50);

    convert_dir(dir.path(), &Pipeline::standard(), &ProcessingConfig::default()).unwrap();

    assert_eq!(dimensions(&nested.join("deep.png"), image::ImageFormat::Png), (50, 50));
    assert!(!nested.join("deep.webp").exists());
}

#[test]
fn test_binary_prints_completion_message() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("a.png"), 64, 64);

    let output = Command::new(env!("CARGO_BIN_EXE_png_resizer"))
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Image resize and compression complete."
    );
    assert!(dir.path().join("a.webp").exists());
}

#[test]
fn test_binary_fails_on_missing_dir() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_png_resizer"))
        .arg(dir.path().join("missing"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a directory"));
}

#[test]
fn test_failure_keeps_earlier_conversions() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a.png");
    let bad = dir.path().join("z.png");
    write_png(&good, 800, 600);
    fs::write(&bad, b"corrupt").unwrap();

    let err = convert_dir(dir.path(), &Pipeline::standard(), &ProcessingConfig::default())
        .unwrap_err();
    match err {
        BatchError::Process { path, .. } => assert_eq!(path, bad),
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(dimensions(&good, image::ImageFormat::Png), (600, 400));
    assert_eq!(dimensions(&dir.path().join("a.webp"), image::ImageFormat::WebP), (600, 400));
    assert!(!dir.path().join("z.webp").exists());
}
