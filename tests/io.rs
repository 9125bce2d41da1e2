//! Validates CLI batch processing against a real temporary directory

use image::{Rgba, RgbaImage};
use tilepreview::PreviewError;
use tilepreview::io::cli::{Cli, FileProcessor};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

fn cli_for(target: std::path::PathBuf) -> Cli {
    Cli {
        target,
        rows: 2,
        cols: 2,
        gap: 0,
        quiet: true,
        no_skip: false,
    }
}

#[test]
fn test_directory_batch_produces_tiled_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tex.png");
    RgbaImage::from_pixel(16, 16, RED).save(&input).unwrap();

    let mut processor = FileProcessor::new(cli_for(dir.path().to_path_buf()));
    processor.process().unwrap();

    let output = dir.path().join("tex_tiled.png");
    assert!(output.exists());

    let preview = image::open(&output).unwrap().to_rgba8();
    assert_eq!(preview.dimensions(), (32, 32));
    assert_eq!(*preview.get_pixel(0, 0), MAGENTA);
    assert_eq!(*preview.get_pixel(15, 0), MAGENTA);
    assert_eq!(*preview.get_pixel(20, 20), RED);
}

#[test]
fn test_single_file_target_is_processed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("brick.png");
    RgbaImage::from_pixel(8, 8, RED).save(&input).unwrap();

    let mut processor = FileProcessor::new(cli_for(input));
    processor.process().unwrap();

    assert!(dir.path().join("brick_tiled.png").exists());
}

#[test]
fn test_existing_outputs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tex.png");
    RgbaImage::from_pixel(8, 8, RED).save(&input).unwrap();

    FileProcessor::new(cli_for(dir.path().to_path_buf()))
        .process()
        .unwrap();

    let output = dir.path().join("tex_tiled.png");
    let first_written = std::fs::metadata(&output).unwrap().modified().unwrap();

    // second run finds the output and leaves it alone
    FileProcessor::new(cli_for(dir.path().to_path_buf()))
        .process()
        .unwrap();

    let second_written = std::fs::metadata(&output).unwrap().modified().unwrap();
    assert_eq!(first_written, second_written);
}

#[test]
fn test_non_png_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "not an image").unwrap();

    let result = FileProcessor::new(cli_for(input)).process();
    assert!(matches!(
        result,
        Err(PreviewError::InvalidConfig {
            parameter: "target",
            ..
        })
    ));
}

#[test]
fn test_missing_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let result = FileProcessor::new(cli_for(dir.path().join("absent"))).process();
    assert!(matches!(result, Err(PreviewError::InvalidConfig { .. })));
}
