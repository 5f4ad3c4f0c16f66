//! Completed byte sequence produced by one generation run.

/// Ordered bytes harvested from an image pair.
///
/// Append-only while a run is in progress and handed back wholesale
/// once the pixel scan completes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteStream {
    /// Completed bytes in emission order.
    data: Vec<u8>,
}

impl ByteStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already completed bytes.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Returns the byte data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bits.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.data.len() * 8
    }

    /// Counts the number of set bits.
    pub fn popcount(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is unbiased.
    pub fn bit_bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let ones = self.popcount() as f64;
        let total = self.bit_count() as f64;
        (ones / total) - 0.5
    }
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("bytes", &self.data.len())
            .field("bit_bias", &format!("{:.4}", self.bit_bias()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbiased_data() {
        // 0xAA = 10101010
        let stream = ByteStream::from_bytes(vec![0xAA; 100]);
        assert!((stream.bit_bias()).abs() < 0.001);
    }

    #[test]
    fn test_all_ones_bias() {
        let stream = ByteStream::from_bytes(vec![0xFF; 100]);
        assert!((stream.bit_bias() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_empty_stream_has_no_bias() {
        let stream = ByteStream::new();
        assert!(stream.is_empty());
        assert_eq!(stream.bit_bias(), 0.0);
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut stream = ByteStream::new();
        stream.push(1);
        stream.push(2);
        stream.push(3);
        assert_eq!(stream.data(), &[1, 2, 3]);
        assert_eq!(stream.len(), 3);
    }
}
