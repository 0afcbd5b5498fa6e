use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse failure class reported for each file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be read as an image.
    Decode,
    /// Output could not be produced in the requested container.
    Encode,
    /// Filesystem failure (permissions, missing directory, disk full).
    Io,
    /// The transform settings themselves are unusable.
    Config,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DecodeError(_) | Self::InvalidDimensions(_, _) => ErrorKind::Decode,
            // Unsupported formats are only raised while resolving where and
            // how to write, so they belong with the encode side.
            Self::EncodeError(_) | Self::UnsupportedFormat(_) => ErrorKind::Encode,
            Self::InputReadError(_) | Self::OutputWriteError(_) | Self::IoError(_) => ErrorKind::Io,
            Self::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode => f.write_str("decode"),
            Self::Encode => f.write_str("encode"),
            Self::Io => f.write_str("io"),
            Self::Config => f.write_str("config"),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
