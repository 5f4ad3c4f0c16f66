//! Pixel grid abstraction over decoded images.

use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Color channel sampled for noise bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Red component.
    Red,
    /// Green component.
    Green,
    /// Blue carries the most sensor noise on typical Bayer sensors.
    #[default]
    Blue,
}

impl Channel {
    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// A row-major grid of color pixels.
///
/// This abstraction lets the extractor run over decoded image files
/// as well as synthetic grids built in memory.
pub trait PixelGrid {
    /// Grid width in pixels.
    fn width(&self) -> u32;

    /// Grid height in pixels.
    fn height(&self) -> u32;

    /// Value of `channel` at `(x, y)`, normalized to `0..=255`.
    ///
    /// Callers must keep `x < width()` and `y < height()`.
    fn channel(&self, x: u32, y: u32, channel: Channel) -> u8;

    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    #[inline]
    fn channel(&self, x: u32, y: u32, channel: Channel) -> u8 {
        self.get_pixel(x, y).0[channel.index()]
    }
}
