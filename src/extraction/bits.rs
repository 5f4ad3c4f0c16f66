//! Per-pixel bit derivation.
//!
//! Each consumed pixel contributes one bit: the XOR of a noise bit taken
//! from the same channel of both images. Two independently noisy sources
//! combined by XOR give an unbiased bit even when one source alone is
//! biased, as long as their noise is uncorrelated.

use serde::{Deserialize, Serialize};

/// How a channel value is reduced to a single noise bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitMode {
    /// Least significant bit of the channel value.
    #[default]
    Lsb,
    /// XOR of the two least significant bits of the channel value.
    TwoLsb,
}

impl BitMode {
    /// Selects the mode from the `consider_two_lsb` flag.
    pub fn from_two_lsb(consider_two_lsb: bool) -> Self {
        if consider_two_lsb {
            Self::TwoLsb
        } else {
            Self::Lsb
        }
    }

    /// Reduces one channel value to its noise bit.
    #[inline]
    pub fn noise_bit(self, value: u8) -> u8 {
        match self {
            Self::Lsb => value & 1,
            Self::TwoLsb => ((value >> 1) ^ value) & 1,
        }
    }

    /// Derives the output bit from the channel values of both images.
    #[inline]
    pub fn derive(self, c1: u8, c2: u8) -> u8 {
        self.noise_bit(c1) ^ self.noise_bit(c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_xor() {
        let mode = BitMode::Lsb;
        assert_eq!(mode.derive(0, 1), 1);
        assert_eq!(mode.derive(1, 1), 0);
        assert_eq!(mode.derive(2, 4), 0);
        assert_eq!(mode.derive(255, 128), 1);
    }

    #[test]
    fn test_high_values_use_unsigned_parity() {
        // 0xFF is odd whether read as 255 or as -1
        assert_eq!(BitMode::Lsb.noise_bit(0xFF), 1);
        assert_eq!(BitMode::Lsb.noise_bit(0x80), 0);
    }

    #[test]
    fn test_two_lsb_noise_bit() {
        let mode = BitMode::TwoLsb;
        assert_eq!(mode.noise_bit(0b00), 0);
        assert_eq!(mode.noise_bit(0b01), 1);
        assert_eq!(mode.noise_bit(0b10), 1);
        assert_eq!(mode.noise_bit(0b11), 0);
        // Higher bits are ignored
        assert_eq!(mode.noise_bit(0b1111_1101), 1);
    }

    #[test]
    fn test_two_lsb_uses_bits_zero_and_one() {
        // Bit 2 never contributes, even though it is "position 2" from the LSB
        let mode = BitMode::TwoLsb;
        assert_eq!(mode.noise_bit(0b100), 0);
        assert_eq!(mode.noise_bit(0b110), 1);
        assert_eq!(mode.noise_bit(0b101), 1);
        assert_eq!(mode.derive(0b100, 0b000), 0);
    }

    #[test]
    fn test_two_lsb_derive() {
        let mode = BitMode::TwoLsb;
        assert_eq!(mode.derive(0b01, 0b10), 0);
        assert_eq!(mode.derive(0b01, 0b11), 1);
        assert_eq!(mode.derive(0, 1), 1);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(BitMode::from_two_lsb(false), BitMode::Lsb);
        assert_eq!(BitMode::from_two_lsb(true), BitMode::TwoLsb);
    }
}
