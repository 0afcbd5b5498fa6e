//! Transform configuration types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{Result, TransformError};
use crate::image_pipeline::config::channel::ChannelMap;

/// Long-side sizes offered as presets (the first is the default).
pub const PRESET_TARGET_SIZES: [u32; 3] = [1024, 512, 256];

/// Quality used for every JPEG encode.
pub const JPEG_QUALITY: u8 = 95;

/// Output container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, carries alpha
    Png,
    /// Lossless, carries alpha
    Tga,
    /// Lossy, alpha is dropped
    Jpeg,
}

impl OutputFormat {
    /// Lowercase extension used when naming a new output file.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Tga => "tga",
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn supports_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    /// Resolves an existing file extension to a format we can write.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_uppercase().as_str() {
            "PNG" => Some(OutputFormat::Png),
            "TGA" => Some(OutputFormat::Tga),
            "JPG" | "JPEG" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => f.write_str("PNG"),
            OutputFormat::Tga => f.write_str("TGA"),
            OutputFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TransformError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OutputFormat::from_extension(s.trim()).ok_or_else(|| {
            TransformError::InvalidConfig(format!(
                "unknown output format '{}', expected png, tga or jpg",
                s
            ))
        })
    }
}

/// Settings shared by every file of one batch run.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Maximum length of the longer side after resizing
    pub target_size: u32,
    /// Source and inversion for each output channel
    pub channel_map: ChannelMap,
    /// Write back to the source path, in the format its extension names
    pub overwrite_source: bool,
    /// Container used when not overwriting
    pub output_format: OutputFormat,
    /// Write through a temporary file and rename it over the destination.
    /// When false, the destination is truncated and written directly.
    pub atomic_write: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            target_size: PRESET_TARGET_SIZES[0],
            channel_map: ChannelMap::identity(),
            overwrite_source: false,
            output_format: OutputFormat::Tga,
            atomic_write: true,
        }
    }
}

impl TransformConfig {
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(TransformError::InvalidConfig(
                "target size must be a positive number of pixels".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for TransformConfig
#[derive(Default)]
pub struct TransformConfigBuilder {
    target_size: Option<u32>,
    channel_map: Option<ChannelMap>,
    overwrite_source: Option<bool>,
    output_format: Option<OutputFormat>,
    atomic_write: Option<bool>,
}

impl TransformConfigBuilder {
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = Some(size);
        self
    }

    pub fn channel_map(mut self, map: ChannelMap) -> Self {
        self.channel_map = Some(map);
        self
    }

    pub fn overwrite_source(mut self, overwrite: bool) -> Self {
        self.overwrite_source = Some(overwrite);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn atomic_write(mut self, enable: bool) -> Self {
        self.atomic_write = Some(enable);
        self
    }

    pub fn build(self) -> Result<TransformConfig> {
        let default = TransformConfig::default();
        let config = TransformConfig {
            target_size: self.target_size.unwrap_or(default.target_size),
            channel_map: self.channel_map.unwrap_or(default.channel_map),
            overwrite_source: self.overwrite_source.unwrap_or(default.overwrite_source),
            output_format: self.output_format.unwrap_or(default.output_format),
            atomic_write: self.atomic_write.unwrap_or(default.atomic_write),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::config::channel::Channel;

    #[test]
    fn test_config_builder() {
        let map = ChannelMap::identity().with_invert(Channel::G, true);
        let config = TransformConfig::builder()
            .target_size(512)
            .channel_map(map)
            .overwrite_source(true)
            .output_format(OutputFormat::Jpeg)
            .atomic_write(false)
            .build()
            .unwrap();

        assert_eq!(config.target_size, 512);
        assert_eq!(config.channel_map, map);
        assert!(config.overwrite_source);
        assert_eq!(config.output_format, OutputFormat::Jpeg);
        assert!(!config.atomic_write);
    }

    #[test]
    fn test_builder_defaults() {
        let config = TransformConfig::builder().build().unwrap();
        assert_eq!(config.target_size, 1024);
        assert!(config.channel_map.is_identity());
        assert!(!config.overwrite_source);
        assert_eq!(config.output_format, OutputFormat::Tga);
        assert!(config.atomic_write);
    }

    #[test]
    fn test_zero_target_size_rejected() {
        let result = TransformConfig::builder().target_size(0).build();
        assert!(matches!(result, Err(TransformError::InvalidConfig(_))));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension("TGA"), Some(OutputFormat::Tga));
        assert_eq!(OutputFormat::from_extension("jpg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("Jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("bmp"), None);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap().extension(), "jpg");
        assert!("webp".parse::<OutputFormat>().is_err());
    }
}
