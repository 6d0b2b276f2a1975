//! Best-effort brightness sampling for the viewer's inverse color
//! scheme.
//!
//! The top strip of the image (where the viewer chrome sits) is scaled
//! down to a small sample and averaged with Rec. 601 weights. Any
//! failure falls back to the dark-image assumption so chrome stays
//! readable.

use image::imageops::FilterType;
use image::DynamicImage;

use crate::infra::constants::viewer as cfg;

/// Mean luma of the top strip in [0, 1], or None when the image has no
/// pixels to sample.
pub fn average_luma(image: &DynamicImage) -> Option<f32> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return None;
    }

    let strip_height =
        ((height as f32 * cfg::LUMA_STRIP_FRACTION) as u32).max(1);
    let sample = image
        .crop_imm(0, 0, width, strip_height)
        .resize_exact(
            cfg::LUMA_SAMPLE_SIZE,
            cfg::LUMA_SAMPLE_SIZE,
            FilterType::Triangle,
        )
        .to_rgb8();

    let mut total = 0.0f32;
    for pixel in sample.pixels() {
        let [r, g, b] = pixel.0;
        total += (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114)
            / 255.0;
    }
    let count = (sample.width() * sample.height()) as f32;
    Some(total / count)
}

/// Whether the viewer should switch to dark chrome over this image.
pub fn is_light_image(image: &DynamicImage) -> bool {
    average_luma(image)
        .map(|luma| luma > cfg::LUMA_LIGHT_THRESHOLD)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(r: u8, g: u8, b: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(
            200,
            300,
            Rgb([r, g, b]),
        ))
    }

    #[test]
    fn white_image_reads_light() {
        assert!(is_light_image(&solid(255, 255, 255)));
    }

    #[test]
    fn black_image_reads_dark() {
        assert!(!is_light_image(&solid(0, 0, 0)));
    }

    #[test]
    fn only_the_top_strip_is_sampled() {
        // Light header over a dark body: the header drives the verdict.
        let mut img = RgbImage::from_pixel(100, 100, Rgb([10, 10, 10]));
        for y in 0..20 {
            for x in 0..100 {
                img.put_pixel(x, y, Rgb([250, 250, 250]));
            }
        }
        assert!(is_light_image(&DynamicImage::ImageRgb8(img)));
    }

    #[test]
    fn luma_uses_rec601_weights() {
        // Pure green is perceptually brighter than pure blue.
        let green = average_luma(&solid(0, 255, 0)).expect("luma");
        let blue = average_luma(&solid(0, 0, 255)).expect("luma");
        assert!(green > 0.5);
        assert!(blue < 0.2);
    }
}
