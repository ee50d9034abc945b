// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for loading and exporting photos

use image::metadata::Orientation;
use image::{GenericImageView, Rgba, RgbaImage};
use kontax::{FilterName, Photo, filters, storage};

#[test]
fn test_export_writes_upright_jpeg() {
    let dir = tempfile::tempdir().unwrap();

    // 40x20 stored, displayed rotated by 90 degrees
    let photo = Photo::new(
        RgbaImage::from_pixel(40, 20, Rgba([200, 120, 40, 255])),
        Orientation::Rotate90,
    );
    let developed = filters::develop(&photo, FilterName::A1, &[]).unwrap();

    let path = storage::export_photo(&developed, dir.path(), 90).unwrap();
    assert!(path.starts_with(dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.dimensions(), (20, 40));

    let reloaded = storage::load_photo(&path).unwrap();
    assert_eq!(reloaded.orientation(), Orientation::NoTransforms);
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("Kontax");

    let photo = Photo::upright(RgbaImage::from_pixel(8, 8, Rgba([10, 10, 10, 255])));
    let path = storage::export_photo(&photo, &nested, 80).unwrap();
    assert!(path.exists());
}

#[test]
fn test_repeated_exports_do_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let photo = Photo::upright(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));

    let first = storage::export_photo(&photo, dir.path(), 80).unwrap();
    let second = storage::export_photo(&photo, dir.path(), 80).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_load_photo_round_trips_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    RgbaImage::from_pixel(12, 6, Rgba([1, 2, 3, 255]))
        .save(&path)
        .unwrap();

    let photo = storage::load_photo(&path).unwrap();
    assert_eq!(photo.dimensions(), (12, 6));
    assert_eq!(photo.pixels().get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
}

#[test]
fn test_load_missing_photo_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(storage::load_photo(&dir.path().join("missing.jpg")).is_err());
}
