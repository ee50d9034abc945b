// SPDX-License-Identifier: GPL-3.0-only

//! Photo filters
//!
//! Everything that turns a loaded photo into a developed one:
//!
//! - `catalog`: the named colour filters and their collections
//! - `lut`: colour grade behind each named filter
//! - `fx`: toggleable effects (light leaks, grain)
//! - `leaks`: light leaks overlay filter
//! - `blend`: screen blend and opacity helpers
//!
//! All filters run on the CPU against RGBA pixels and keep the
//! orientation tag of their input.

pub mod blend;
pub mod catalog;
pub mod fx;
pub mod leaks;
pub mod lut;

pub use catalog::{FilterCollection, FilterName};
pub use fx::FxName;
pub use leaks::LightLeaksFilter;
pub use lut::LutFilter;

use crate::errors::FilterError;
use image::metadata::Orientation;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Decoded photo with the orientation it was captured in
///
/// Pixels are stored as decoded; `orientation` says how they must be
/// transformed to display upright.
#[derive(Debug, Clone)]
pub struct Photo {
    pixels: RgbaImage,
    orientation: Orientation,
}

impl Photo {
    pub fn new(pixels: RgbaImage, orientation: Orientation) -> Self {
        Self {
            pixels,
            orientation,
        }
    }

    /// Photo whose pixels already display upright
    pub fn upright(pixels: RgbaImage) -> Self {
        Self::new(pixels, Orientation::NoTransforms)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// New photo with these pixels and this photo's orientation
    pub fn with_pixels(&self, pixels: RgbaImage) -> Self {
        Self::new(pixels, self.orientation)
    }

    /// Pixels with the orientation applied, ready for display or export
    pub fn to_upright(&self) -> RgbaImage {
        if self.orientation == Orientation::NoTransforms {
            return self.pixels.clone();
        }
        let mut image = DynamicImage::ImageRgba8(self.pixels.clone());
        image.apply_orientation(self.orientation);
        image.into_rgba8()
    }

    /// Downscaled copy whose longest side is at most `max_side`
    pub fn thumbnail(&self, max_side: u32) -> Self {
        let (width, height) = self.dimensions();
        let longest = width.max(height);
        if longest <= max_side || longest == 0 {
            return self.clone();
        }

        let scale = max_side as f32 / longest as f32;
        let new_width = ((width as f32 * scale).round() as u32).max(1);
        let new_height = ((height as f32 * scale).round() as u32).max(1);
        self.with_pixels(image::imageops::thumbnail(
            &self.pixels,
            new_width,
            new_height,
        ))
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<(), FilterError> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(FilterError::EmptyPhoto { width, height });
        }
        Ok(())
    }
}

/// A filter that develops a photo into a new one
pub trait ImageFilter {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce the filtered photo
    ///
    /// The result has the same dimensions and orientation as the input.
    fn process(&self, photo: &Photo) -> Result<Photo, FilterError>;
}

/// Develop a photo: colour filter first, then enabled effects in declaration order
pub fn develop(photo: &Photo, filter: FilterName, effects: &[FxName]) -> Result<Photo, FilterError> {
    let mut developed = LutFilter::new(filter).process(photo)?;

    for fx in FxName::ALL.iter().filter(|fx| effects.contains(fx)) {
        let effect = fx.filter();
        debug!(effect = effect.name(), "Applying effect");
        developed = effect.process(&developed)?;
    }

    Ok(developed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_thumbnail_keeps_aspect_and_orientation() {
        let photo = Photo::new(
            RgbaImage::from_pixel(400, 200, Rgba([10, 20, 30, 255])),
            Orientation::Rotate90,
        );
        let thumb = photo.thumbnail(100);
        assert_eq!(thumb.dimensions(), (100, 50));
        assert_eq!(thumb.orientation(), Orientation::Rotate90);
    }

    #[test]
    fn test_upright_applies_rotation() {
        let photo = Photo::new(
            RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 255])),
            Orientation::Rotate90,
        );
        assert_eq!(photo.to_upright().dimensions(), (2, 4));
    }

    #[test]
    fn test_develop_rejects_empty_photo() {
        let photo = Photo::upright(RgbaImage::new(0, 0));
        assert!(matches!(
            develop(&photo, FilterName::A1, &[]),
            Err(FilterError::EmptyPhoto { .. })
        ));
    }
}
