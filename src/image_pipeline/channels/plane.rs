//! Single-channel 8-bit planes and the split/merge operations on them.

use image::{RgbImage, RgbaImage};

use crate::image_pipeline::common::error::{Result, TransformError};

/// One 8-bit intensity grid taken from a single channel of an image.
///
/// Planes are never modified in place; `inverted` returns a new plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl ChannelPlane {
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        if samples.len() as u64 != u64::from(width) * u64::from(height) {
            return Err(TransformError::InvalidDimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Per-sample complement, `255 - v`.
    pub fn inverted(&self) -> ChannelPlane {
        ChannelPlane {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(|&v| !v).collect(),
        }
    }
}

/// Splits an RGBA image into its R, G, B and A planes, in that order.
pub fn split_rgba(image: &RgbaImage) -> [ChannelPlane; 4] {
    let (width, height) = image.dimensions();
    let pixel_count = width as usize * height as usize;
    let mut planes: [Vec<u8>; 4] = std::array::from_fn(|_| Vec::with_capacity(pixel_count));

    for pixel in image.as_raw().chunks_exact(4) {
        for (plane, &sample) in planes.iter_mut().zip(pixel) {
            plane.push(sample);
        }
    }

    planes.map(|samples| ChannelPlane {
        width,
        height,
        samples,
    })
}

/// Interleaves equally sized planes into one buffer.
fn interleave<const N: usize>(planes: [&ChannelPlane; N]) -> Result<(u32, u32, Vec<u8>)> {
    let (width, height) = planes[0].dimensions();
    if let Some(odd) = planes.iter().find(|p| p.dimensions() != (width, height)) {
        return Err(TransformError::InvalidDimensions(odd.width, odd.height));
    }

    let mut data = Vec::with_capacity(planes[0].samples.len() * N);
    for i in 0..planes[0].samples.len() {
        for plane in &planes {
            data.push(plane.samples[i]);
        }
    }
    Ok((width, height, data))
}

pub fn merge_rgba(planes: [&ChannelPlane; 4]) -> Result<RgbaImage> {
    let (width, height, data) = interleave(planes)?;
    RgbaImage::from_raw(width, height, data).ok_or(TransformError::InvalidDimensions(width, height))
}

pub fn merge_rgb(planes: [&ChannelPlane; 3]) -> Result<RgbImage> {
    let (width, height, data) = interleave(planes)?;
    RgbImage::from_raw(width, height, data).ok_or(TransformError::InvalidDimensions(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_split_then_merge_is_lossless() {
        let image = RgbaImage::from_fn(7, 5, |x, y| {
            Rgba([x as u8, y as u8, (x * y) as u8, 255 - x as u8])
        });
        let planes = split_rgba(&image);

        assert_eq!(planes[0].samples()[6], 6);
        assert_eq!(planes[1].samples()[7], 1);
        assert_eq!(planes[3].samples()[0], 255);

        let [r, g, b, a] = &planes;
        assert_eq!(merge_rgba([r, g, b, a]).unwrap(), image);
    }

    #[test]
    fn test_invert_is_self_inverse() {
        let all_values: Vec<u8> = (0..=255).collect();
        let plane = ChannelPlane::from_samples(16, 16, all_values.clone()).unwrap();

        let once = plane.inverted();
        assert_eq!(once.samples()[0], 255);
        assert_eq!(once.samples()[255], 0);
        assert_eq!(once.samples()[100], 155);
        assert_eq!(once.inverted(), plane);
    }

    #[test]
    fn test_merge_rejects_mismatched_planes() {
        let small = ChannelPlane::from_samples(2, 2, vec![0; 4]).unwrap();
        let large = ChannelPlane::from_samples(3, 2, vec![0; 6]).unwrap();

        let result = merge_rgb([&small, &small, &large]);
        assert!(matches!(result, Err(TransformError::InvalidDimensions(3, 2))));
    }

    #[test]
    fn test_sample_count_must_match_dimensions() {
        let result = ChannelPlane::from_samples(4, 4, vec![0; 15]);
        assert!(matches!(result, Err(TransformError::InvalidDimensions(4, 4))));
    }
}
