//! Post-run output quality checks.
//!
//! Statistical tests and a digest over the generated bytes. These are
//! sanity checks, not proofs of randomness: a failing report points at
//! bad inputs (identical images, a static or saturated scene) but a
//! passing one guarantees nothing.

mod digest;
mod statistics;
mod threshold;

pub use digest::{Fingerprint, HashAlgorithm};
pub use statistics::StatisticalTests;
pub use threshold::{QualityThresholds, ThresholdViolation};

use crate::extraction::ByteStream;

/// Quality summary of one generated sequence.
#[derive(Debug, Clone)]
pub struct QualityReport {
    /// Bit statistics of the sequence.
    pub stats: StatisticalTests,
    /// First threshold exceeded, if any.
    pub violation: Option<ThresholdViolation>,
    /// Digest of the generated bytes.
    pub fingerprint: Fingerprint,
}

impl QualityReport {
    /// Analyzes `stream` against `thresholds`.
    ///
    /// Violations are logged and recorded; they do not fail the run.
    pub fn assess(
        stream: &ByteStream,
        thresholds: &QualityThresholds,
        algorithm: HashAlgorithm,
    ) -> Self {
        let stats = StatisticalTests::analyze(stream);
        let violation = thresholds.check(&stats).err();
        let fingerprint = Fingerprint::compute(algorithm, stream.data());

        match &violation {
            Some(violation) => tracing::warn!(
                violation = %violation,
                bits = stats.bit_count,
                "Generated output failed a quality check"
            ),
            None => tracing::debug!(
                bias = stats.bit_bias,
                correlation = stats.serial_correlation,
                longest_run = stats.longest_run,
                "Quality check passed"
            ),
        }

        Self {
            stats,
            violation,
            fingerprint,
        }
    }

    /// Returns true if no threshold was exceeded.
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}
