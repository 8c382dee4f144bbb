use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use autocrop::{CropOutcome, CropParams, Error, autocrop_in_place};

fn write_png(dir: &TempDir, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

fn opaque_block(image: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x, y, Rgba([200, 100, 50, 255]));
        }
    }
}

#[test]
fn crops_centered_content_with_padding() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbaImage::new(100, 100);
    opaque_block(&mut img, 40, 40, 60, 60);
    let path = write_png(&dir, "logo.png", &img);

    let outcome = autocrop_in_place(&path, &CropParams::default()).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            width: 41,
            height: 41
        }
    );

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (41, 41));
    // Crop box is (30, 30, 71, 71): original (40, 40) lands at (10, 10).
    assert_eq!(saved.get_pixel(10, 10), &Rgba([200, 100, 50, 255]));
    assert_eq!(saved.get_pixel(30, 30), &Rgba([200, 100, 50, 255]));
    assert_eq!(saved.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
}

#[test]
fn transparent_image_is_left_byte_for_byte_unchanged() {
    let dir = TempDir::new().unwrap();
    let img = RgbaImage::new(32, 32);
    let path = write_png(&dir, "empty.png", &img);
    let before = fs::read(&path).unwrap();

    let outcome = autocrop_in_place(&path, &CropParams::default()).unwrap();
    assert_eq!(outcome, CropOutcome::NoContent);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn content_at_canvas_edge_clamps_instead_of_wrapping() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbaImage::new(50, 50);
    opaque_block(&mut img, 0, 0, 5, 5);
    let path = write_png(&dir, "corner.png", &img);

    let outcome = autocrop_in_place(&path, &CropParams::default()).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            width: 16,
            height: 16
        }
    );

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.get_pixel(0, 0), &Rgba([200, 100, 50, 255]));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.png");

    let err = autocrop_in_place(&path, &CropParams::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn undecodable_file_reports_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not-an-image.png");
    fs::write(&path, b"definitely not a png").unwrap();

    let err = autocrop_in_place(&path, &CropParams::default()).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn running_twice_never_grows_and_preserves_pixels() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbaImage::new(100, 100);
    opaque_block(&mut img, 40, 40, 60, 60);
    let path = write_png(&dir, "twice.png", &img);

    autocrop_in_place(&path, &CropParams::default()).unwrap();
    let first = image::open(&path).unwrap().to_rgba8();

    // The first pass left exactly the padding margin around the content, so
    // a second pass crops the full extent and changes nothing.
    let outcome = autocrop_in_place(&path, &CropParams::default()).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            width: first.width(),
            height: first.height()
        }
    );

    let second = image::open(&path).unwrap().to_rgba8();
    assert_eq!(second.dimensions(), first.dimensions());
    assert!(
        first
            .pixels()
            .zip(second.pixels())
            .all(|(a, b)| a == b)
    );
}

#[test]
fn custom_padding_is_honored() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbaImage::new(100, 100);
    opaque_block(&mut img, 40, 40, 60, 60);
    let path = write_png(&dir, "tight.png", &img);

    let outcome = autocrop_in_place(&path, &CropParams { padding: 0 }).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            width: 21,
            height: 21
        }
    );
}
