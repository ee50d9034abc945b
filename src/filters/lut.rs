// SPDX-License-Identifier: GPL-3.0-only

//! Colour filters ("LUTs")
//!
//! Each catalog entry is a fixed colour grade applied per pixel.

use super::{FilterName, ImageFilter, Photo};
use crate::errors::FilterError;
use tracing::debug;

/// Per-pixel colour grade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGrade {
    /// Channel multipliers (r, g, b)
    pub tint: [f32; 3],
    /// 1.0 keeps saturation, 0.0 is grayscale
    pub saturation: f32,
    /// Contrast around mid-gray
    pub contrast: f32,
    /// Lifted blacks (fade)
    pub lift: f32,
    /// Render luminance only, after tint
    pub mono: bool,
}

impl ColorGrade {
    const NEUTRAL: ColorGrade = ColorGrade {
        tint: [1.0, 1.0, 1.0],
        saturation: 1.0,
        contrast: 1.0,
        lift: 0.0,
        mono: false,
    };

    /// Grade behind a catalog filter
    pub fn for_filter(filter: FilterName) -> Self {
        match filter {
            // Warm everyday film
            FilterName::A1 => ColorGrade {
                tint: [1.08, 1.0, 0.88],
                saturation: 1.05,
                contrast: 1.05,
                lift: 0.02,
                ..Self::NEUTRAL
            },
            // Cool shade
            FilterName::A2 => ColorGrade {
                tint: [0.92, 0.98, 1.08],
                saturation: 0.95,
                lift: 0.03,
                ..Self::NEUTRAL
            },
            // Faded print
            FilterName::A3 => ColorGrade {
                saturation: 0.75,
                contrast: 0.9,
                lift: 0.08,
                ..Self::NEUTRAL
            },
            // Slide film
            FilterName::A4 => ColorGrade {
                saturation: 1.35,
                contrast: 1.15,
                ..Self::NEUTRAL
            },
            // Golden hour
            FilterName::A5 => ColorGrade {
                tint: [1.12, 1.04, 0.8],
                saturation: 1.1,
                contrast: 1.05,
                ..Self::NEUTRAL
            },
            // Green-shifted expired stock
            FilterName::A6 => ColorGrade {
                tint: [0.96, 1.06, 0.94],
                saturation: 0.85,
                contrast: 0.95,
                lift: 0.05,
                ..Self::NEUTRAL
            },
            // Soft black and white
            FilterName::B1 => ColorGrade {
                contrast: 1.1,
                lift: 0.03,
                mono: true,
                ..Self::NEUTRAL
            },
            // Hard noir
            FilterName::B2 => ColorGrade {
                contrast: 1.6,
                mono: true,
                ..Self::NEUTRAL
            },
        }
    }

    /// Grade one pixel (channels in 0.0-1.0)
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let [mut r, mut g, mut b] = rgb;

        r *= self.tint[0];
        g *= self.tint[1];
        b *= self.tint[2];

        let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
        if self.mono {
            r = luminance;
            g = luminance;
            b = luminance;
        } else {
            r = luminance + (r - luminance) * self.saturation;
            g = luminance + (g - luminance) * self.saturation;
            b = luminance + (b - luminance) * self.saturation;
        }

        [r, g, b].map(|c| {
            let contrasted = (c - 0.5) * self.contrast + 0.5;
            (self.lift + contrasted * (1.0 - self.lift)).clamp(0.0, 1.0)
        })
    }

    /// Representative colour for swatches: mid-gray run through the grade
    pub fn swatch(&self) -> [f32; 3] {
        self.apply([0.55, 0.5, 0.45])
    }
}

/// Applies the colour grade of one catalog filter
#[derive(Debug, Clone, Copy)]
pub struct LutFilter {
    filter: FilterName,
    grade: ColorGrade,
}

impl LutFilter {
    pub fn new(filter: FilterName) -> Self {
        Self {
            filter,
            grade: ColorGrade::for_filter(filter),
        }
    }

    pub fn filter(&self) -> FilterName {
        self.filter
    }
}

impl ImageFilter for LutFilter {
    fn name(&self) -> &'static str {
        self.filter.as_str()
    }

    fn process(&self, photo: &Photo) -> Result<Photo, FilterError> {
        photo.ensure_not_empty()?;
        debug!(filter = %self.filter, "Applying colour grade");

        let mut pixels = photo.pixels().clone();
        for pixel in pixels.pixels_mut() {
            let graded = self.grade.apply([
                pixel[0] as f32 / 255.0,
                pixel[1] as f32 / 255.0,
                pixel[2] as f32 / 255.0,
            ]);
            for (channel, value) in graded.into_iter().enumerate() {
                pixel[channel] = (value * 255.0).round() as u8;
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
    fn test_mono_filters_produce_gray() {
        for filter in [FilterName::B1, FilterName::B2] {
            let [r, g, b] = ColorGrade::for_filter(filter).apply([0.8, 0.3, 0.1]);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_grade_output_in_range() {
        for filter in FilterName::ALL {
            let grade = ColorGrade::for_filter(filter);
            for rgb in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 0.5]] {
                assert!(grade.apply(rgb).iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }

    #[test]
    fn test_filters_are_distinct() {
        let swatches: Vec<[f32; 3]> = FilterName::ALL
            .iter()
            .map(|f| ColorGrade::for_filter(*f).apply([0.7, 0.4, 0.2]))
            .collect();
        for (i, a) in swatches.iter().enumerate() {
            for b in &swatches[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_alpha_is_preserved() {
        let photo = Photo::upright(RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 77])));
        let out = LutFilter::new(FilterName::A4).process(&photo).unwrap();
        assert!(out.pixels().pixels().all(|p| p[3] == 77));
    }
}
