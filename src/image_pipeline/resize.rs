//! Long-side-fit resize stage
//!
//! Shrinks an image so its longer side is at most `target_size`, keeping the
//! aspect ratio. Images already within bounds pass through untouched; this
//! stage never upscales.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Output dimensions for fitting `width`x`height` into `target_size`, or
/// `None` when the image already fits.
///
/// Each side is scaled by the same `f64` factor and truncated, then clamped
/// to at least one pixel so extreme aspect ratios stay encodable.
pub fn fit_dimensions(width: u32, height: u32, target_size: u32) -> Option<(u32, u32)> {
    let long_side = width.max(height);
    if long_side <= target_size {
        return None;
    }

    let scale = f64::from(target_size) / f64::from(long_side);
    let new_width = ((f64::from(width) * scale) as u32).max(1);
    let new_height = ((f64::from(height) * scale) as u32).max(1);
    Some((new_width, new_height))
}

/// Applies the long-side fit with a Lanczos3 filter.
pub fn fit_long_side(image: RgbaImage, target_size: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    match fit_dimensions(width, height, target_size) {
        None => {
            debug!("{}x{} already fits {}, skipping resize", width, height, target_size);
            image
        }
        Some((new_width, new_height)) => {
            debug!(
                "Resizing {}x{} -> {}x{} (Lanczos3)",
                width, height, new_width, new_height
            );
            imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        })
    }

    #[test]
    fn test_no_upscale_when_within_target() {
        let image = gradient(300, 200);
        let result = fit_long_side(image.clone(), 1024);
        assert_eq!(result, image);
    }

    #[test]
    fn test_exact_fit_is_noop() {
        let image = gradient(512, 100);
        let result = fit_long_side(image.clone(), 512);
        assert_eq!(result, image);
    }

    #[test]
    fn test_landscape_downscale() {
        assert_eq!(fit_dimensions(2048, 1024, 1024), Some((1024, 512)));

        let result = fit_long_side(gradient(2048, 1024), 1024);
        assert_eq!(result.dimensions(), (1024, 512));
    }

    #[test]
    fn test_portrait_downscale_keeps_ratio() {
        let (w, h) = fit_dimensions(750, 3000, 256).unwrap();
        assert!((255..=256).contains(&h));
        // 750 * 256 / 3000 = 64
        assert!((63..=64).contains(&w));
    }

    #[test]
    fn test_long_side_hits_target_for_odd_sizes() {
        for (width, height, target) in [(1999, 1003, 512), (1025, 1025, 1024), (4097, 17, 256)] {
            let (w, h) = fit_dimensions(width, height, target).unwrap();
            let long = w.max(h);
            assert!(long == target || long + 1 == target, "{width}x{height} -> {w}x{h}");
        }
    }

    #[test]
    fn test_degenerate_side_clamped_to_one_pixel() {
        assert_eq!(fit_dimensions(10_000, 3, 256), Some((256, 1)));

        let result = fit_long_side(gradient(4000, 2), 100);
        assert_eq!(result.dimensions(), (100, 1));
    }
}
