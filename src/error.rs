use std::path::PathBuf;

use bilevel_dither::RasterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),
}

impl ImageError {
    /// Short error class name shown next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageError::Read { .. } | ImageError::Write { .. } => "IOError",
            ImageError::Decode(_) => "DecodeError",
            ImageError::Encode(_) | ImageError::UnsupportedDimensions { .. } => "EncodeError",
            ImageError::Raster(_) => "RasterError",
        }
    }
}
