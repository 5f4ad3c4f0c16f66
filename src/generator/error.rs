//! Errors that end a generation run.

use std::path::PathBuf;
use thiserror::Error;

/// Category of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input image could not be read or decoded.
    InputRead,
    /// The two inputs differ in width or height.
    DimensionMismatch,
    /// An output file or image could not be written.
    OutputWrite,
    /// An input file could not be deleted.
    InputDeletion,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InputRead => "input read error",
            Self::DimensionMismatch => "dimension mismatch",
            Self::OutputWrite => "output write error",
            Self::InputDeletion => "input deletion error",
        };
        f.write_str(name)
    }
}

/// Fatal failure of a generation run.
///
/// No partial output is returned alongside any of these.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Reading or decoding an input image failed.
    #[error("failed to read input image {}: {source}", path.display())]
    InputRead {
        /// Image that failed.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The inputs do not share a resolution.
    #[error(
        "input images have different resolutions: {}x{} vs {}x{}",
        first.0, first.1, second.0, second.1
    )]
    DimensionMismatch {
        /// `(width, height)` of the first image.
        first: (u32, u32),
        /// `(width, height)` of the second image.
        second: (u32, u32),
    },

    /// Writing the raw byte file failed.
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        /// Destination file.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding or saving the visualization image failed.
    #[error("failed to write output image {}: {source}", path.display())]
    OutputImage {
        /// Destination image.
        path: PathBuf,
        /// Encoder error.
        #[source]
        source: image::ImageError,
    },

    /// Removing an input file failed after outputs were written.
    #[error("failed to delete input file {}: {source}", path.display())]
    InputDeletion {
        /// First input that could not be removed.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputRead { .. } => ErrorKind::InputRead,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::OutputWrite { .. } | Self::OutputImage { .. } => ErrorKind::OutputWrite,
            Self::InputDeletion { .. } => ErrorKind::InputDeletion,
        }
    }
}
