// SPDX-License-Identifier: GPL-3.0-only

//! Light leaks filter
//!
//! Screen-blends a bundled light leak photograph over the input. The
//! overlays live in `resources/leaks/` and are embedded at build time.

use super::{ImageFilter, Photo, blend};
use crate::constants::develop::LEAKS_STRENGTH;
use crate::errors::FilterError;
use image::RgbaImage;
use rust_embed::RustEmbed;
use std::sync::OnceLock;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "resources/leaks/"]
struct LeaksAssets;

/// Bundled light leak overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeaksName {
    #[default]
    Leaks1,
}

impl LeaksName {
    /// Asset file name inside `resources/leaks/`
    pub fn asset(&self) -> &'static str {
        match self {
            LeaksName::Leaks1 => "leaks1.png",
        }
    }

    fn load(&self) -> Result<RgbaImage, FilterError> {
        let name = self.asset();
        let file =
            LeaksAssets::get(name).ok_or_else(|| FilterError::MissingAsset(name.to_string()))?;
        let overlay = image::load_from_memory(&file.data).map_err(|source| {
            FilterError::AssetDecode {
                name: name.to_string(),
                source,
            }
        })?;
        Ok(overlay.to_rgba8())
    }

    /// Decoded overlay, shared by every filter run after the first
    fn overlay(&self) -> Result<&'static RgbaImage, FilterError> {
        static LEAKS1: OnceLock<RgbaImage> = OnceLock::new();

        let cell = match self {
            LeaksName::Leaks1 => &LEAKS1,
        };
        if let Some(overlay) = cell.get() {
            return Ok(overlay);
        }

        let decoded = self.load()?;
        debug!(overlay = self.asset(), "Light leaks overlay decoded");
        Ok(cell.get_or_init(|| decoded))
    }
}

/// Light leaks over the photo at a fixed strength
#[derive(Debug, Clone, Copy)]
pub struct LightLeaksFilter {
    leaks: LeaksName,
    strength: f32,
}

impl Default for LightLeaksFilter {
    fn default() -> Self {
        Self {
            leaks: LeaksName::default(),
            strength: LEAKS_STRENGTH,
        }
    }
}

impl LightLeaksFilter {
    pub fn new(leaks: LeaksName, strength: f32) -> Self {
        Self { leaks, strength }
    }
}

impl ImageFilter for LightLeaksFilter {
    fn name(&self) -> &'static str {
        "light-leaks"
    }

    fn process(&self, photo: &Photo) -> Result<Photo, FilterError> {
        photo.ensure_not_empty()?;

        let overlay = blend::with_opacity(self.leaks.overlay()?, self.strength);
        debug!(
            overlay = self.leaks.asset(),
            strength = self.strength,
            width = photo.dimensions().0,
            height = photo.dimensions().1,
            "Blending light leaks"
        );

        Ok(photo.with_pixels(blend::screen(photo.pixels(), &overlay)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::metadata::Orientation;
    use image::Rgba;

    #[test]
    fn test_bundled_overlay_is_present() {
        for leaks in [LeaksName::Leaks1] {
            assert!(leaks.load().is_ok(), "{} missing", leaks.asset());
        }
    }

    #[test]
    fn test_overlay_is_decoded_once() {
        let first = LeaksName::Leaks1.overlay().unwrap();
        let second = LeaksName::Leaks1.overlay().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, &LeaksName::Leaks1.load().unwrap());
    }

    #[test]
    fn test_keeps_dimensions_and_orientation() {
        let photo = Photo::new(
            RgbaImage::from_pixel(37, 21, Rgba([40, 40, 40, 255])),
            Orientation::Rotate270,
        );
        let out = LightLeaksFilter::default().process(&photo).unwrap();
        assert_eq!(out.dimensions(), (37, 21));
        assert_eq!(out.orientation(), Orientation::Rotate270);
    }

    #[test]
    fn test_zero_strength_leaves_photo_untouched() {
        let photo = Photo::upright(RgbaImage::from_pixel(8, 8, Rgba([100, 90, 80, 255])));
        let out = LightLeaksFilter::new(LeaksName::Leaks1, 0.0)
            .process(&photo)
            .unwrap();
        assert_eq!(out.pixels(), photo.pixels());
    }

    #[test]
    fn test_leaks_brighten_corner() {
        let photo = Photo::upright(RgbaImage::from_pixel(64, 64, Rgba([20, 20, 20, 255])));
        let out = LightLeaksFilter::default().process(&photo).unwrap();
        assert!(out.pixels().get_pixel(0, 0)[0] > 20);
    }
}
