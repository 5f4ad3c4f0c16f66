//! Bit-level statistics over generated output.
//!
//! The extractor emits one bit per consumed pixel, so the checks work on
//! the bit sequence in emission order: the share of ones, the correlation
//! between adjacent bits (what the skip-delay is meant to suppress) and
//! the longest run of equal bits.

use crate::extraction::ByteStream;

/// Statistics of one generated bit sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalTests {
    /// Share of ones minus 0.5, in [-0.5, 0.5].
    pub bit_bias: f64,
    /// Lag-1 correlation between adjacent bits, in [-1, 1].
    pub serial_correlation: f64,
    /// Longest run of identical consecutive bits.
    pub longest_run: u64,
    /// Number of bits analyzed.
    pub bit_count: u64,
}

impl StatisticalTests {
    /// Runs all statistics on the stream's bits, MSB first.
    pub fn analyze(stream: &ByteStream) -> Self {
        let mut pairs = PairCounts::default();
        let mut longest_run = 0u64;
        let mut run = 0u64;
        let mut previous = None;

        for bit in bits(stream.data()) {
            match previous {
                Some(prev) if prev == bit => run += 1,
                _ => run = 1,
            }
            if let Some(prev) = previous {
                pairs.record(prev, bit);
            }
            longest_run = longest_run.max(run);
            previous = Some(bit);
        }

        let bit_count = stream.bit_count() as u64;
        Self {
            bit_bias: stream.bit_bias(),
            serial_correlation: pairs.correlation(bit_count, stream.popcount() as u64),
            longest_run,
            bit_count,
        }
    }
}

/// Adjacent-pair tallies of a 0/1 sequence.
#[derive(Debug, Default)]
struct PairCounts {
    zero_zero: u64,
    one_one: u64,
    mixed: u64,
}

impl PairCounts {
    fn record(&mut self, a: u8, b: u8) {
        match (a, b) {
            (0, 0) => self.zero_zero += 1,
            (1, 1) => self.one_one += 1,
            _ => self.mixed += 1,
        }
    }

    /// Lag-1 correlation: sum of `(a - p)(b - p)` over adjacent pairs
    /// divided by `n p (1 - p)`. A constant sequence reports 1.0.
    fn correlation(&self, bit_count: u64, ones: u64) -> f64 {
        if bit_count < 2 {
            return 0.0;
        }

        let n = bit_count as f64;
        let p = ones as f64 / n;
        let variance = n * p * (1.0 - p);
        if variance == 0.0 {
            return 1.0;
        }

        let q = 1.0 - p;
        let covariance = self.one_one as f64 * q * q + self.zero_zero as f64 * p * p
            - self.mixed as f64 * p * q;
        covariance / variance
    }
}

fn bits(data: &[u8]) -> impl Iterator<Item = u8> + '_ {
    data.iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::{RngCore, SeedableRng};

    fn seeded_stream(len: usize, seed: u64) -> ByteStream {
        let mut data = vec![0u8; len];
        ChaCha20Rng::seed_from_u64(seed).fill_bytes(&mut data);
        ByteStream::from_bytes(data)
    }

    #[test]
    fn test_random_stream_near_zero() {
        let stats = StatisticalTests::analyze(&seeded_stream(4096, 1));

        assert_eq!(stats.bit_count, 32768);
        assert!(stats.bit_bias.abs() < 0.02);
        assert!(stats.serial_correlation.abs() < 0.05);
        assert!(stats.longest_run < 30);
    }

    #[test]
    fn test_alternating_bits_anticorrelated() {
        let stats = StatisticalTests::analyze(&ByteStream::from_bytes(vec![0xAA; 100]));

        assert!(stats.bit_bias.abs() < 1e-9);
        assert!(stats.serial_correlation < -0.95);
        assert_eq!(stats.longest_run, 1);
    }

    #[test]
    fn test_nibble_pattern_correlated() {
        // 00001111: three of every four adjacent pairs match
        let stats = StatisticalTests::analyze(&ByteStream::from_bytes(vec![0x0F; 100]));

        assert!(stats.bit_bias.abs() < 1e-9);
        assert!((stats.serial_correlation - 0.5).abs() < 0.02);
        assert_eq!(stats.longest_run, 4);
    }

    #[test]
    fn test_constant_stream() {
        let stats = StatisticalTests::analyze(&ByteStream::from_bytes(vec![0xFF; 10]));

        assert!((stats.bit_bias - 0.5).abs() < 1e-9);
        assert_eq!(stats.serial_correlation, 1.0);
        assert_eq!(stats.longest_run, 80);
    }

    #[test]
    fn test_empty_stream() {
        let stats = StatisticalTests::analyze(&ByteStream::new());
        assert_eq!(stats.bit_count, 0);
        assert_eq!(stats.serial_correlation, 0.0);
        assert_eq!(stats.longest_run, 0);
    }

    #[test]
    fn test_runs_span_byte_boundaries() {
        // 0000_0001 1000_0000: the two ones are adjacent across bytes
        let stats = StatisticalTests::analyze(&ByteStream::from_bytes(vec![0x01, 0x80]));
        assert_eq!(stats.longest_run, 7);
    }
}
