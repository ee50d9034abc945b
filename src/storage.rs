// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for loading and exporting photos

use crate::constants::export::FILE_PREFIX;
use crate::errors::StorageError;
use crate::filters::Photo;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Export directory (`~/Pictures/<folder_name>`)
pub fn photo_directory(folder_name: &str) -> Result<PathBuf, StorageError> {
    let pictures = dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .ok_or(StorageError::NoPicturesDirectory)?;
    Ok(pictures.join(folder_name))
}

/// Decode a photo from disk together with its EXIF orientation
pub fn load_photo(path: &Path) -> Result<Photo, StorageError> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let image = DynamicImage::from_decoder(decoder)?;

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        ?orientation,
        "Photo decoded"
    );

    Ok(Photo::new(image.to_rgba8(), orientation))
}

/// Timestamped export file name, e.g. `KONTAX_20240131_184502.jpg`
pub fn export_file_name(timestamp: chrono::DateTime<chrono::Local>) -> String {
    format!("{}_{}.jpg", FILE_PREFIX, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Pick a path in `dir` that does not exist yet
fn unique_export_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = file_name.trim_end_matches(".jpg");
    (1..)
        .map(|n| dir.join(format!("{stem}_{n}.jpg")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Write a photo upright as JPEG to an explicit path
pub fn write_jpeg(photo: &Photo, path: &Path, quality: u8) -> Result<(), StorageError> {
    // JPEG carries no alpha and the encoder writes no orientation tag
    let upright = DynamicImage::ImageRgba8(photo.to_upright()).to_rgb8();

    let writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(writer, quality).encode_image(&upright)?;

    info!(
        path = %path.display(),
        width = upright.width(),
        height = upright.height(),
        quality,
        "Photo written"
    );
    Ok(())
}

/// Export a developed photo into `dir` under a timestamped name
pub fn export_photo(photo: &Photo, dir: &Path, quality: u8) -> Result<PathBuf, StorageError> {
    std::fs::create_dir_all(dir)?;
    let path = unique_export_path(dir, &export_file_name(chrono::Local::now()));
    write_jpeg(photo, &path, quality)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_name_format() {
        let timestamp = chrono::Local
            .with_ymd_and_hms(2024, 1, 31, 18, 45, 2)
            .single()
            .unwrap();
        assert_eq!(export_file_name(timestamp), "KONTAX_20240131_184502.jpg");
    }

    #[test]
    fn test_unique_export_path_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("KONTAX_1.jpg"), b"x").unwrap();
        assert_eq!(
            unique_export_path(dir.path(), "KONTAX_1.jpg"),
            dir.path().join("KONTAX_1_1.jpg")
        );
    }
}
