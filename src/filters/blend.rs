// SPDX-License-Identifier: GPL-3.0-only

//! Compositing helpers
//!
//! Screen blend (`1 - (1 - base)(1 - overlay)`) weighted by overlay alpha,
//! plus the opacity adjustment applied to overlays before blending.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Scale the alpha channel of every pixel by `strength` (clamped to 0..=1)
pub fn with_opacity(image: &RgbaImage, strength: f32) -> RgbaImage {
    let strength = strength.clamp(0.0, 1.0);
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        pixel[3] = (pixel[3] as f32 * strength).round() as u8;
    }
    output
}

/// Screen-blend `overlay` over `base`
///
/// The overlay is stretched to the base size when they differ. Each overlay
/// channel is weighted by the overlay pixel's alpha, so a transparent or
/// black overlay leaves the base unchanged. The base alpha is kept.
pub fn screen(base: &RgbaImage, overlay: &RgbaImage) -> RgbaImage {
    let (width, height) = base.dimensions();
    let resized;
    let overlay = if overlay.dimensions() == (width, height) {
        overlay
    } else {
        resized = imageops::resize(overlay, width, height, FilterType::Triangle);
        &resized
    };

    let mut output = base.clone();
    for (out, top) in output.pixels_mut().zip(overlay.pixels()) {
        let alpha = top[3] as f32 / 255.0;
        for channel in 0..3 {
            let a = out[channel] as f32 / 255.0;
            let b = top[channel] as f32 / 255.0 * alpha;
            let screened = 1.0 - (1.0 - a) * (1.0 - b);
            out[channel] = (screened.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_black_overlay_is_identity() {
        let base = RgbaImage::from_pixel(3, 3, Rgba([90, 120, 200, 255]));
        let overlay = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        assert_eq!(screen(&base, &overlay), base);
    }

    #[test]
    fn test_white_overlay_saturates() {
        let base = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 200]));
        let overlay = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let out = screen(&base, &overlay);
        assert!(out.pixels().all(|p| *p == Rgba([255, 255, 255, 200])));
    }

    #[test]
    fn test_screen_never_darkens() {
        let base = RgbaImage::from_fn(8, 8, |x, y| Rgba([(x * 30) as u8, (y * 30) as u8, 77, 255]));
        let overlay = RgbaImage::from_fn(8, 8, |x, y| Rgba([(y * 20) as u8, 40, (x * 25) as u8, 180]));
        let out = screen(&base, &overlay);
        for (before, after) in base.pixels().zip(out.pixels()) {
            for c in 0..3 {
                assert!(after[c] >= before[c]);
            }
        }
    }

    #[test]
    fn test_overlay_is_resized_to_base() {
        let base = RgbaImage::from_pixel(6, 4, Rgba([0, 0, 0, 255]));
        let overlay = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let out = screen(&base, &overlay);
        assert_eq!(out.dimensions(), (6, 4));
        assert_eq!(out.get_pixel(5, 3)[0], 255);
    }

    #[test]
    fn test_zero_opacity_makes_overlay_inert() {
        let base = RgbaImage::from_pixel(2, 2, Rgba([50, 60, 70, 255]));
        let overlay = with_opacity(&RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])), 0.0);
        assert_eq!(screen(&base, &overlay), base);
    }
}
