//! Where a transformed image goes and in which container.

use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{Result, TransformError};
use crate::image_pipeline::config::{OutputFormat, TransformConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Resolves the output path and format for `source`.
///
/// Without overwrite the output sits next to the source as
/// `<stem>.<png|tga|jpg>`. With overwrite the source path is reused and its
/// extension picks the format; extensions we cannot encode (e.g. `bmp`) are
/// refused rather than written in some other container under the old name.
pub fn resolve_destination(source: &Path, config: &TransformConfig) -> Result<Destination> {
    if !config.overwrite_source {
        let format = config.output_format;
        return Ok(Destination {
            path: source.with_extension(format.extension()),
            format,
        });
    }

    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let format = OutputFormat::from_extension(extension).ok_or_else(|| {
        TransformError::UnsupportedFormat(format!(
            "cannot overwrite {}: '{}' files cannot be written, only png, tga and jpg",
            source.display(),
            extension
        ))
    })?;

    Ok(Destination {
        path: source.to_path_buf(),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(overwrite: bool, format: OutputFormat) -> TransformConfig {
        TransformConfig::builder()
            .overwrite_source(overwrite)
            .output_format(format)
            .build()
            .unwrap()
    }

    fn resolve(path: &str, overwrite: bool, format: OutputFormat) -> Destination {
        resolve_destination(Path::new(path), &config(overwrite, format)).unwrap()
    }

    #[test]
    fn test_new_file_next_to_source() {
        let dest = resolve("/art/textures/brick.bmp", false, OutputFormat::Png);
        assert_eq!(dest.path, PathBuf::from("/art/textures/brick.png"));
        assert_eq!(dest.format, OutputFormat::Png);

        let dest = resolve("a.b.png", false, OutputFormat::Jpeg);
        assert_eq!(dest.path, PathBuf::from("a.b.jpg"));

        let dest = resolve("noext", false, OutputFormat::Tga);
        assert_eq!(dest.path, PathBuf::from("noext.tga"));
    }

    #[test]
    fn test_overwrite_uses_source_extension() {
        let dest = resolve("/tmp/photo.jpg", true, OutputFormat::Png);
        assert_eq!(dest.path, PathBuf::from("/tmp/photo.jpg"));
        assert_eq!(dest.format, OutputFormat::Jpeg);

        let dest = resolve("mask.TGA", true, OutputFormat::Png);
        assert_eq!(dest.format, OutputFormat::Tga);

        let dest = resolve("scan.jpeg", true, OutputFormat::Tga);
        assert_eq!(dest.format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_overwrite_refuses_unwritable_extension() {
        let result = resolve_destination(Path::new("old.bmp"), &config(true, OutputFormat::Png));
        assert!(matches!(result, Err(TransformError::UnsupportedFormat(_))));

        let result = resolve_destination(Path::new("README"), &config(true, OutputFormat::Png));
        assert!(matches!(result, Err(TransformError::UnsupportedFormat(_))));
    }
}
