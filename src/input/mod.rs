//! Image input and pixel access.
//!
//! The two source images are decoded into RGB grids and checked for
//! matching dimensions before any sampling happens. Decoding is delegated
//! to the `image` crate; the extractor only sees the [`PixelGrid`] trait.

mod grid;
mod pair;

pub use grid::{Channel, PixelGrid};
pub use pair::{validate_dimensions, ImagePair};
