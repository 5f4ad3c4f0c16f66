//! Loading and validating the two source images.

use super::PixelGrid;
use crate::generator::GenerationError;
use image::RgbImage;
use std::path::Path;

/// Two decoded images of identical dimensions.
#[derive(Debug, Clone)]
pub struct ImagePair<G = RgbImage> {
    first: G,
    second: G,
}

impl<G: PixelGrid> ImagePair<G> {
    /// Pairs two grids, failing if their dimensions differ.
    pub fn new(first: G, second: G) -> Result<Self, GenerationError> {
        validate_dimensions(&first, &second)?;
        Ok(Self { first, second })
    }

    /// First grid of the pair.
    pub fn first(&self) -> &G {
        &self.first
    }

    /// Second grid of the pair.
    pub fn second(&self) -> &G {
        &self.second
    }

    /// Shared `(width, height)` of both grids.
    pub fn dimensions(&self) -> (u32, u32) {
        self.first.dimensions()
    }
}

impl ImagePair<RgbImage> {
    /// Decodes both files to RGB and validates their dimensions.
    pub fn open(first: impl AsRef<Path>, second: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let first = load_rgb(first.as_ref())?;
        let second = load_rgb(second.as_ref())?;
        Self::new(first, second)
    }
}

/// Succeeds only if both grids have the same width and height.
pub fn validate_dimensions<A, B>(first: &A, second: &B) -> Result<(), GenerationError>
where
    A: PixelGrid + ?Sized,
    B: PixelGrid + ?Sized,
{
    let (a, b) = (first.dimensions(), second.dimensions());
    if a != b {
        return Err(GenerationError::DimensionMismatch { first: a, second: b });
    }
    Ok(())
}

fn load_rgb(path: &Path) -> Result<RgbImage, GenerationError> {
    let img = image::open(path)
        .map_err(|source| GenerationError::InputRead {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    let (width, height) = img.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded input image");
    Ok(img)
}
