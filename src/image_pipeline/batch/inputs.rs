//! Expansion of command-line paths into the ordered list of files to process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::common::error::{Result, TransformError};

/// Extensions picked up when a directory is given as input.
pub const SUPPORTED_INPUT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tga"];

pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_INPUT_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Files are kept as given, in order. Directories contribute their supported
/// image files (not recursive), sorted by name.
///
/// # Errors
///
/// * `TransformError::InputReadError` - a path does not exist
/// * `TransformError::IoError` - a directory could not be listed
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry_path = entry?.path();
                if entry_path.is_file() && is_supported_input(&entry_path) {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            debug!("{}: {} image file(s)", path.display(), entries.len());
            files.extend(entries);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            return Err(TransformError::InputReadError(format!(
                "{}: no such file or directory",
                path.display()
            )));
        }
    }

    Ok(files)
}
