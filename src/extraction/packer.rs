//! MSB-first bit packing.

use super::ByteStream;

/// Index of the first bit written into each byte.
const FIRST_BIT: u8 = 7;

/// Packs individual bits into bytes, most significant bit first.
///
/// Every bit position is written explicitly (set or cleared), and the
/// in-progress byte is reset to zero whenever a completed byte is emitted.
/// Bits left over when packing stops are discarded, never padded.
#[derive(Debug)]
pub struct BitPacker {
    current: u8,
    index: u8,
    output: ByteStream,
}

impl BitPacker {
    /// Creates a packer positioned at the MSB of an empty byte.
    pub fn new() -> Self {
        Self {
            current: 0,
            index: FIRST_BIT,
            output: ByteStream::new(),
        }
    }

    /// Writes one bit at the current position.
    ///
    /// Any non-zero `bit` is treated as 1.
    pub fn push(&mut self, bit: u8) {
        let mask = 1u8 << self.index;
        if bit == 0 {
            self.current &= !mask;
        } else {
            self.current |= mask;
        }

        if self.index == 0 {
            tracing::trace!(byte = self.current, "Packed byte");
            self.output.push(self.current);
            self.current = 0;
            self.index = FIRST_BIT;
        } else {
            self.index -= 1;
        }
    }

    /// Number of bits waiting in the in-progress byte.
    pub fn pending_bits(&self) -> u8 {
        FIRST_BIT - self.index
    }

    /// Returns the completed bytes, dropping any partial trailing byte.
    pub fn finish(self) -> ByteStream {
        if self.pending_bits() > 0 {
            tracing::debug!(
                discarded_bits = self.pending_bits(),
                "Dropping incomplete trailing byte"
            );
        }
        self.output
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pack(bits: &[u8]) -> ByteStream {
        let mut packer = BitPacker::new();
        for &bit in bits {
            packer.push(bit);
        }
        packer.finish()
    }

    #[test]
    fn test_msb_first() {
        let bytes = pack(&[1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bytes.data(), &[0x81]);
    }

    #[test]
    fn test_trailing_bits_dropped() {
        let bytes = pack(&[1; 15]);
        assert_eq!(bytes.data(), &[0xFF]);
    }

    #[test]
    fn test_fewer_than_eight_bits_yields_nothing() {
        let mut packer = BitPacker::new();
        for _ in 0..7 {
            packer.push(1);
        }
        assert_eq!(packer.pending_bits(), 7);
        assert!(packer.finish().is_empty());
    }

    #[test]
    fn test_zeros_after_ones_are_cleared() {
        let bytes = pack(&[1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bytes.data(), &[0xFF, 0x00]);
    }

    proptest! {
        #[test]
        fn prop_packing_law(bits in proptest::collection::vec(0u8..2, 0..256)) {
            let bytes = pack(&bits);
            prop_assert_eq!(bytes.len(), bits.len() / 8);

            for (k, byte) in bytes.data().iter().enumerate() {
                for i in 0..8 {
                    let expected = bits[8 * k + (7 - i)];
                    prop_assert_eq!((byte >> i) & 1, expected);
                }
            }
        }
    }
}
