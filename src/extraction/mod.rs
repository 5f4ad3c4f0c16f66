//! Bit harvesting from an image pair.
//!
//! The extractor walks both grids in row-major order. Each pixel position
//! is a candidate; a candidate is consumed only when the skip-delay is
//! zero, in which case one bit is derived from the two images and handed
//! to the [`BitPacker`]. A new delay is drawn after every consumed pixel.

mod bits;
mod bitstream;
mod delay;
mod packer;

pub use bits::BitMode;
pub use bitstream::ByteStream;
pub use delay::{DelayBounds, DelayScheduler, FixedDelay, SkipSchedule};
pub use packer::BitPacker;

use crate::input::{Channel, ImagePair, PixelGrid};

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Pixel positions visited.
    pub candidates: u64,
    /// Pixel positions a bit was taken from.
    pub consumed: u64,
    /// Trailing bits dropped because they did not fill a byte.
    pub discarded_bits: u8,
}

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Packed output bytes.
    pub bytes: ByteStream,
    /// Scan counters.
    pub stats: ExtractionStats,
}

/// Derives bytes from the pixel noise of two equal-sized grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    mode: BitMode,
    channel: Channel,
}

impl Extractor {
    /// Creates an extractor sampling `channel` with the given bit mode.
    pub fn new(mode: BitMode, channel: Channel) -> Self {
        Self { mode, channel }
    }

    /// Scans every pixel position once and packs the consumed bits.
    ///
    /// The schedule is only consulted after a bit has been extracted;
    /// the first candidate is always consumed.
    pub fn run<G, S>(&self, pair: &ImagePair<G>, schedule: &mut S) -> Extraction
    where
        G: PixelGrid,
        S: SkipSchedule + ?Sized,
    {
        self.run_with(pair, schedule, |_, _, _| {})
    }

    /// Like [`run`](Self::run), reporting each consumed `(x, y, bit)`.
    pub fn run_with<G, S, F>(&self, pair: &ImagePair<G>, schedule: &mut S, mut on_bit: F) -> Extraction
    where
        G: PixelGrid,
        S: SkipSchedule + ?Sized,
        F: FnMut(u32, u32, u8),
    {
        let (width, height) = pair.dimensions();
        let mut packer = BitPacker::new();
        let mut stats = ExtractionStats::default();
        let mut delay = 0u64;

        for y in 0..height {
            for x in 0..width {
                stats.candidates += 1;

                if delay > 0 {
                    delay -= 1;
                    continue;
                }

                let c1 = pair.first().channel(x, y, self.channel);
                let c2 = pair.second().channel(x, y, self.channel);
                let bit = self.mode.derive(c1, c2);

                on_bit(x, y, bit);
                packer.push(bit);
                stats.consumed += 1;
                delay = schedule.next_delay();
            }
        }

        stats.discarded_bits = packer.pending_bits();
        let bytes = packer.finish();

        tracing::debug!(
            candidates = stats.candidates,
            consumed = stats.consumed,
            bytes = bytes.len(),
            "Extraction pass complete"
        );

        Extraction { bytes, stats }
    }
}
