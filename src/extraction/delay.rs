//! Randomized spacing between consumed pixels.
//!
//! After every extracted bit a fresh skip count is drawn, so that the
//! pixels feeding adjacent output bits are not spatial neighbours.

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// Upper bound on rejected draws before falling back to a direct draw.
const MAX_REJECTIONS: u32 = 64;

/// Source of skip counts between extractions.
pub trait SkipSchedule {
    /// Number of candidate pixels to bypass before the next extraction.
    fn next_delay(&mut self) -> u64;
}

/// Skip-delay bounds derived from the pixel count of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayBounds {
    /// Inclusive lower bound of an accepted draw.
    pub min: u64,
    /// Exclusive upper bound of a draw.
    pub max: u64,
}

impl DelayBounds {
    /// Computes `max = floor(ln(width * height))`, clamped to at least 1,
    /// and `min = max / 2`.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let pixels = u64::from(width) * u64::from(height);
        let max = if pixels == 0 {
            1
        } else {
            ((pixels as f64).ln().floor() as u64).max(1)
        };
        Self { min: max / 2, max }
    }
}

/// Random skip scheduler over a uniform source.
///
/// Draws from `[0, max)` and rejects values below `min`, which biases
/// spacing toward the upper half of the range.
pub struct DelayScheduler<R = ChaCha20Rng> {
    bounds: DelayBounds,
    rng: R,
}

impl DelayScheduler<ChaCha20Rng> {
    /// Creates a scheduler seeded from the OS entropy source.
    pub fn from_os_entropy(bounds: DelayBounds) -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::new(bounds, ChaCha20Rng::from_seed(seed))
    }

    /// Creates a reproducible scheduler from a fixed seed.
    pub fn from_seed(bounds: DelayBounds, seed: u64) -> Self {
        Self::new(bounds, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> DelayScheduler<R> {
    /// Creates a scheduler drawing from `rng`.
    pub fn new(bounds: DelayBounds, rng: R) -> Self {
        Self { bounds, rng }
    }
}

impl<R: RngCore> SkipSchedule for DelayScheduler<R> {
    fn next_delay(&mut self) -> u64 {
        let DelayBounds { min, max } = self.bounds;
        if min >= max {
            return min;
        }

        for _ in 0..MAX_REJECTIONS {
            let delay = self.rng.gen_range(0..max);
            if delay >= min {
                return delay;
            }
        }

        // Same distribution as an accepted draw
        self.rng.gen_range(min..max)
    }
}

/// Constant skip count, for calibration runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay(pub u64);

impl SkipSchedule for FixedDelay {
    fn next_delay(&mut self) -> u64 {
        self.0
    }
}
