//! End-to-end tests for the image-to-ASCII pipeline.
//!
//! These tests exercise both the library driver and the compiled binary:
//! - Black and white images render to the ramp endpoints
//! - Transparency darkens pixels, so clear backgrounds are blank
//! - Output shape follows the (possibly resized) image
//! - Usage, decode and I/O failures exit non-zero without writing output
//! - Repeated runs produce identical bytes

use image::{ImageFormat, Rgba, RgbaImage};
use imagetoascii::cli::Invocation;
use imagetoascii::driver;
use imagetoascii::pixels::{extract_pixels, DecodeError};
use imagetoascii::AsciiError;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to write a test image with the given pattern as a PNG.
fn write_png(dir: &Path, name: &str, pattern: &str, width: u32, height: u32) -> PathBuf {
    let img = match pattern {
        "black" => RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
        "white" => RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        "transparent_white" => RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0])),
        "logo_on_clear" => RgbaImage::from_fn(width, height, |x, y| {
            // Opaque white square in the middle of a transparent white canvas
            let inside = x > 0 && x + 1 < width && y > 0 && y + 1 < height;
            Rgba([255, 255, 255, if inside { 255 } else { 0 }])
        }),
        "half_alpha" => RgbaImage::from_fn(width, height, |x, _| {
            if x % 2 == 0 {
                Rgba([255, 255, 255, 0])
            } else {
                Rgba([200, 100, 50, 128])
            }
        }),
        "gradient_h" => RgbaImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
            Rgba([v, v, v, 255])
        }),
        _ => panic!("Unknown pattern: {}", pattern),
    };
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

fn invocation(dir: &Path, image: PathBuf, width: i64) -> Invocation {
    Invocation {
        image,
        width,
        output: dir.join("ascii.txt"),
    }
}

fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imagetoascii"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn imagetoascii")
}

// ==================== Library Driver ====================

#[test]
fn test_black_2x2_renders_spaces() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "black.png", "black", 2, 2);
    let inv = invocation(dir.path(), png, 0);

    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), "  \n  \n");
}

#[test]
fn test_white_2x2_renders_full_blocks() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "white.png", "white", 2, 2);
    let inv = invocation(dir.path(), png, 0);

    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), "██\n██\n");
}

#[test]
fn test_transparent_background_renders_blank() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "clear.png", "transparent_white", 3, 2);
    let inv = invocation(dir.path(), png, 0);

    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), "   \n   \n");
}

#[test]
fn test_opaque_shape_on_transparent_canvas() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "logo.png", "logo_on_clear", 4, 3);
    let inv = invocation(dir.path(), png, 0);

    driver::run(&inv).unwrap();
    assert_eq!(
        std::fs::read_to_string(&inv.output).unwrap(),
        "    \n ██ \n    \n"
    );
}

#[test]
fn test_half_alpha_darkens_color() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "half.png", "half_alpha", 2, 1);
    let inv = invocation(dir.path(), png, 0);

    // (200, 100, 50) at alpha 128 scales to (100, 50, 25): average 58 -> ';'
    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), " ;\n");
}

#[test]
fn test_transparent_background_survives_resize() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "clear.png", "transparent_white", 8, 4);
    let inv = invocation(dir.path(), png, 4);

    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), "    \n".repeat(2));
}

#[test]
fn test_native_size_shape() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "grad.png", "gradient_h", 37, 11);
    let inv = invocation(dir.path(), png, 0);

    let summary = driver::run(&inv).unwrap();
    assert_eq!((summary.columns, summary.lines), (37, 11));

    let text = std::fs::read_to_string(&inv.output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines.iter().all(|l| l.chars().count() == 37));
    // Left edge is dark, right edge is bright
    assert!(lines[0].starts_with(' '));
    assert!(lines[0].ends_with('█'));
}

#[test]
fn test_resize_to_target_width() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "wide.png", "gradient_h", 64, 32);

    let grid = extract_pixels(File::open(&png).unwrap(), 16).unwrap();
    assert_eq!(grid.width(), 16);
    assert_eq!(grid.height(), 8);

    let inv = invocation(dir.path(), png, 16);
    let summary = driver::run(&inv).unwrap();
    assert_eq!((summary.columns, summary.lines), (16, 8));
}

#[test]
fn test_upscale_preserves_aspect() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "small.png", "white", 4, 2);
    let grid = extract_pixels(File::open(&png).unwrap(), 10).unwrap();
    // 2 * 10 / 4 = 5
    assert_eq!((grid.width(), grid.height()), (10, 5));
}

#[test]
fn test_non_positive_width_keeps_native_size() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "img.png", "black", 9, 5);
    for width in [0, -1, 9] {
        let grid = extract_pixels(File::open(&png).unwrap(), width).unwrap();
        assert_eq!((grid.width(), grid.height()), (9, 5), "width {}", width);
    }
}

#[test]
fn test_corrupt_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.png");
    std::fs::write(&bogus, b"this is not an image").unwrap();
    let inv = invocation(dir.path(), bogus, 0);

    let err = driver::run(&inv).unwrap_err();
    assert!(matches!(
        err,
        AsciiError::Decode(DecodeError::UnrecognizedFormat)
    ));
    assert!(!inv.output.exists());
}

#[test]
fn test_truncated_png_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "img.png", "gradient_h", 20, 20);
    let bytes = std::fs::read(&png).unwrap();
    std::fs::write(&png, &bytes[..bytes.len() / 2]).unwrap();
    let inv = invocation(dir.path(), png, 0);

    let err = driver::run(&inv).unwrap_err();
    assert!(matches!(err, AsciiError::Decode(DecodeError::Malformed { .. })));
    assert!(!inv.output.exists());
}

#[test]
fn test_output_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "img.png", "black", 1, 1);
    let inv = invocation(dir.path(), png, 0);
    std::fs::write(&inv.output, "stale contents that are much longer\n").unwrap();

    driver::run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&inv.output).unwrap(), " \n");
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let png = write_png(dir.path(), "img.png", "gradient_h", 50, 20);
    let inv = invocation(dir.path(), png, 23);

    driver::run(&inv).unwrap();
    let first = std::fs::read(&inv.output).unwrap();
    driver::run(&inv).unwrap();
    let second = std::fs::read(&inv.output).unwrap();
    assert_eq!(first, second);
}

// ==================== Binary ====================

#[test]
fn test_binary_writes_ascii_txt_in_cwd() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "white.png", "white", 2, 2);

    let out = run_binary(dir.path(), &["white.png"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("ascii.txt")).unwrap(),
        "██\n██\n"
    );
}

#[test]
fn test_binary_with_width() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "img.png", "black", 40, 20);

    let out = run_binary(dir.path(), &["img.png", "10"]);
    assert!(out.status.success());
    let text = std::fs::read_to_string(dir.path().join("ascii.txt")).unwrap();
    assert_eq!(text, "          \n".repeat(5));
}

#[test]
fn test_binary_no_arguments() {
    let dir = TempDir::new().unwrap();
    let out = run_binary(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
    assert!(!dir.path().join("ascii.txt").exists());
}

#[test]
fn test_binary_non_integer_width() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "img.png", "black", 2, 2);
    let out = run_binary(dir.path(), &["img.png", "abc"]);
    assert!(!out.status.success());
    assert!(!dir.path().join("ascii.txt").exists());
}

#[test]
fn test_binary_corrupt_input() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.png"), b"garbage").unwrap();
    let out = run_binary(dir.path(), &["bad.png"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: failed to decode image"), "stderr: {}", stderr);
    assert!(!dir.path().join("ascii.txt").exists());
}

#[test]
fn test_binary_huge_width_is_resize_error() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "dot.png", "white", 1, 1);

    let out = run_binary(dir.path(), &["dot.png", "4000000000"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot resize image to width 4000000000"), "stderr: {}", stderr);
    assert!(!dir.path().join("ascii.txt").exists());
}

#[test]
fn test_binary_transparent_png() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "half.png", "half_alpha", 4, 2);

    let out = run_binary(dir.path(), &["half.png"]);
    assert!(out.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("ascii.txt")).unwrap(),
        " ; ;\n ; ;\n"
    );
}

#[test]
fn test_binary_missing_input() {
    let dir = TempDir::new().unwrap();
    let out = run_binary(dir.path(), &["nope.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.png"));
}

#[test]
fn test_binary_config_file() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "img.png", "white", 8, 4);
    std::fs::write(
        dir.path().join("cfg.toml"),
        "[output]\npath = \"art.txt\"\n[resize]\nwidth = 4\n",
    )
    .unwrap();

    let out = run_binary(dir.path(), &["img.png", "--config", "cfg.toml"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(!dir.path().join("ascii.txt").exists());
    let text = std::fs::read_to_string(dir.path().join("art.txt")).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().all(|l| l.chars().count() == 4));
}
