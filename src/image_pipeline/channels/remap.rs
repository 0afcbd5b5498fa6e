//! Channel routing: builds each output plane from a chosen source plane,
//! optionally inverted.

use image::{RgbImage, RgbaImage};
use tracing::debug;

use crate::image_pipeline::channels::plane::{ChannelPlane, merge_rgb, merge_rgba, split_rgba};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::{Channel, ChannelMap};

/// The four output planes, in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappedImage {
    planes: [ChannelPlane; 4],
}

impl RemappedImage {
    pub fn plane(&self, channel: Channel) -> &ChannelPlane {
        &self.planes[channel.index()]
    }

    pub fn width(&self) -> u32 {
        self.planes[0].width()
    }

    pub fn height(&self) -> u32 {
        self.planes[0].height()
    }

    pub fn to_rgba(&self) -> Result<RgbaImage> {
        let [r, g, b, a] = &self.planes;
        merge_rgba([r, g, b, a])
    }

    /// Alpha dropped, for containers that cannot store it.
    pub fn to_rgb(&self) -> Result<RgbImage> {
        let [r, g, b, _] = &self.planes;
        merge_rgb([r, g, b])
    }
}

/// Routes `sources` (indexed R, G, B, A) into output planes according to `map`.
pub fn remap_planes(sources: &[ChannelPlane; 4], map: &ChannelMap) -> RemappedImage {
    let planes = Channel::ALL.map(|output| {
        let source = &sources[map.source(output).index()];
        if map.inverted(output) {
            source.inverted()
        } else {
            source.clone()
        }
    });
    RemappedImage { planes }
}

/// Split, remap and invert in one step.
pub fn shuffle_channels(image: &RgbaImage, map: &ChannelMap) -> RemappedImage {
    debug!("Remapping channels: {}", map);
    let sources = split_rgba(image);
    remap_planes(&sources, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(6, 4, |x, y| {
            Rgba([
                (x * 40) as u8,
                (y * 60) as u8,
                (x * y * 10) as u8,
                (200 + x) as u8,
            ])
        })
    }

    #[test]
    fn test_identity_map_is_pixel_identical() {
        let image = sample_image();
        let remapped = shuffle_channels(&image, &ChannelMap::identity());
        assert_eq!(remapped.to_rgba().unwrap(), image);
    }

    #[test]
    fn test_fan_out_copies_red_into_green_and_blue() {
        let image = sample_image();
        let map = ChannelMap::identity()
            .with_source(Channel::G, Channel::R)
            .with_source(Channel::B, Channel::R);

        let remapped = shuffle_channels(&image, &map);

        assert_eq!(remapped.plane(Channel::G), remapped.plane(Channel::R));
        assert_eq!(remapped.plane(Channel::B), remapped.plane(Channel::R));
        let alpha: Vec<u8> = image.pixels().map(|p| p[3]).collect();
        assert_eq!(remapped.plane(Channel::A).samples(), alpha.as_slice());
    }

    #[test]
    fn test_swap_and_invert() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
        let map = ChannelMap::new(
            [Channel::B, Channel::G, Channel::R, Channel::A],
            [false, true, false, true],
        );

        let rgba = shuffle_channels(&image, &map).to_rgba().unwrap();
        assert!(rgba.pixels().all(|p| *p == Rgba([30, 235, 10, 215])));
    }

    #[test]
    fn test_alpha_can_feed_colour_channels() {
        let image = RgbaImage::from_pixel(3, 1, Rgba([1, 2, 3, 99]));
        let map = ChannelMap::identity().with_source(Channel::R, Channel::A);

        let rgb = shuffle_channels(&image, &map).to_rgb().unwrap();
        assert_eq!(rgb.dimensions(), (3, 1));
        assert!(rgb.pixels().all(|p| p.0 == [99, 2, 3]));
    }

    #[test]
    fn test_remap_is_deterministic() {
        let image = sample_image();
        let map = ChannelMap::identity()
            .with_source(Channel::A, Channel::G)
            .with_invert(Channel::R, true);

        assert_eq!(shuffle_channels(&image, &map), shuffle_channels(&image, &map));
    }
}
