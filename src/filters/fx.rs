// SPDX-License-Identifier: GPL-3.0-only

//! Effects
//!
//! Optional passes applied after the colour filter. Each one is toggled
//! independently from the effects panel.

use super::{ImageFilter, LightLeaksFilter, Photo};
use crate::constants::develop::GRAIN_STRENGTH;
use crate::errors::{FilterError, UnknownEffect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Toggleable effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FxName {
    LightLeaks,
    Grain,
}

impl FxName {
    /// Effects in application order
    pub const ALL: [FxName; 2] = [FxName::LightLeaks, FxName::Grain];

    pub fn as_str(&self) -> &'static str {
        match self {
            FxName::LightLeaks => "light-leaks",
            FxName::Grain => "grain",
        }
    }

    /// Symbolic icon shown on the effect cell
    pub fn icon_name(&self) -> &'static str {
        match self {
            FxName::LightLeaks => "weather-clear-symbolic",
            FxName::Grain => "view-grid-symbolic",
        }
    }

    /// Filter implementing this effect
    pub fn filter(&self) -> Box<dyn ImageFilter + Send> {
        match self {
            FxName::LightLeaks => Box::new(LightLeaksFilter::default()),
            FxName::Grain => Box::new(GrainFilter::default()),
        }
    }
}

impl fmt::Display for FxName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FxName {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FxName::ALL
            .into_iter()
            .find(|fx| fx.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}

/// Monochrome film grain
///
/// Noise is a hash of the pixel position, so the same photo always
/// develops to the same result.
#[derive(Debug, Clone, Copy)]
pub struct GrainFilter {
    strength: f32,
}

impl Default for GrainFilter {
    fn default() -> Self {
        Self {
            strength: GRAIN_STRENGTH,
        }
    }
}

impl GrainFilter {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    /// Noise in -1.0..1.0 for a pixel position
    #[inline]
    fn noise(x: u32, y: u32) -> f32 {
        let p = (x as f32 * 127.1 + y as f32 * 311.7) * 0.01;
        (p.sin() * 43758.5453).rem_euclid(1.0) * 2.0 - 1.0
    }
}

impl ImageFilter for GrainFilter {
    fn name(&self) -> &'static str {
        "grain"
    }

    fn process(&self, photo: &Photo) -> Result<Photo, FilterError> {
        photo.ensure_not_empty()?;

        let mut pixels = photo.pixels().clone();
        for (x, y, pixel) in pixels.enumerate_pixels_mut() {
            let offset = Self::noise(x, y) * self.strength;
            for channel in 0..3 {
                let value = pixel[channel] as f32 / 255.0 + offset;
                pixel[channel] = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }

        Ok(photo.with_pixels(pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_parse_round_trips_display() {
        for fx in FxName::ALL {
            assert_eq!(fx.to_string().parse::<FxName>(), Ok(fx));
        }
        assert!("bloom".parse::<FxName>().is_err());
    }

    #[test]
    fn test_grain_is_deterministic_and_bounded() {
        let photo = Photo::upright(RgbaImage::from_pixel(16, 16, Rgba([128, 128, 128, 255])));
        let grain = GrainFilter::default();
        let first = grain.process(&photo).unwrap();
        let second = grain.process(&photo).unwrap();
        assert_eq!(first.pixels(), second.pixels());

        let max_offset = (GRAIN_STRENGTH * 255.0).ceil() as i32;
        for pixel in first.pixels().pixels() {
            assert!((pixel[0] as i32 - 128).abs() <= max_offset);
        }
    }

    #[test]
    fn test_zero_grain_is_identity() {
        let photo = Photo::upright(RgbaImage::from_pixel(4, 4, Rgba([10, 200, 30, 255])));
        let out = GrainFilter::new(0.0).process(&photo).unwrap();
        assert_eq!(out.pixels(), photo.pixels());
    }
}
