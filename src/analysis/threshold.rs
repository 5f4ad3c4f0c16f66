//! Length-aware quality limits for generated output.
//!
//! Small input images yield only a few dozen bytes, so fixed limits would
//! flag honest short outputs and wave through biased long ones. Each limit
//! is instead a number of standard errors for the analyzed bit count: bias
//! has standard error `0.5 / sqrt(n)`, lag-1 correlation `1 / sqrt(n)`,
//! and the longest run of a fair sequence stays near `log2(n)`.
//!
//! A violation is reported with the run result; it never discards the
//! generated bytes.

use super::statistics::StatisticalTests;
use serde::{Deserialize, Serialize};

/// Quality limits, scaled by the number of bits analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Allowed bit bias, in standard errors.
    pub max_bias_sigma: f64,
    /// Allowed lag-1 bit correlation, in standard errors.
    pub max_correlation_sigma: f64,
    /// Bits a run may exceed `log2(n)` by.
    pub run_slack_bits: u64,
    /// Fewer bits than this cannot be judged.
    pub min_sample_bits: u64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_bias_sigma: 4.0,
            max_correlation_sigma: 4.0,
            run_slack_bits: 8,
            min_sample_bits: 64,
        }
    }
}

impl QualityThresholds {
    /// Tighter limits for long outputs that feed other tools.
    pub fn conservative() -> Self {
        Self {
            max_bias_sigma: 3.0,
            max_correlation_sigma: 3.0,
            run_slack_bits: 5,
            min_sample_bits: 1024,
        }
    }

    /// Looser limits that only catch grossly broken inputs.
    pub fn permissive() -> Self {
        Self {
            max_bias_sigma: 6.0,
            max_correlation_sigma: 6.0,
            run_slack_bits: 12,
            min_sample_bits: 16,
        }
    }

    /// Looks up a preset by name: `default`, `conservative` or `permissive`.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::default()),
            "conservative" => Some(Self::conservative()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Largest bias accepted for `bit_count` bits.
    pub fn bias_limit(&self, bit_count: u64) -> f64 {
        self.max_bias_sigma * 0.5 / (bit_count.max(1) as f64).sqrt()
    }

    /// Largest absolute lag-1 correlation accepted for `bit_count` bits.
    pub fn correlation_limit(&self, bit_count: u64) -> f64 {
        self.max_correlation_sigma / (bit_count.max(1) as f64).sqrt()
    }

    /// Longest run accepted for `bit_count` bits.
    pub fn run_limit(&self, bit_count: u64) -> u64 {
        let log2 = u64::from(bit_count.max(1).ilog2());
        log2 + self.run_slack_bits
    }

    /// Checks statistics against the limits for their sample size.
    pub fn check(&self, stats: &StatisticalTests) -> Result<(), ThresholdViolation> {
        let n = stats.bit_count;
        if n < self.min_sample_bits {
            return Err(ThresholdViolation::InsufficientSample {
                bits: n,
                required: self.min_sample_bits,
            });
        }

        let bias_limit = self.bias_limit(n);
        if stats.bit_bias.abs() > bias_limit {
            return Err(ThresholdViolation::BitBias {
                observed: stats.bit_bias,
                threshold: bias_limit,
            });
        }

        let correlation_limit = self.correlation_limit(n);
        if stats.serial_correlation.abs() > correlation_limit {
            return Err(ThresholdViolation::SerialCorrelation {
                observed: stats.serial_correlation,
                threshold: correlation_limit,
            });
        }

        let run_limit = self.run_limit(n);
        if stats.longest_run > run_limit {
            return Err(ThresholdViolation::LongRun {
                observed: stats.longest_run,
                threshold: run_limit,
            });
        }

        Ok(())
    }
}

/// Threshold violation types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdViolation {
    /// Too few bits for a meaningful check.
    #[error("only {bits} bits generated, at least {required} needed for a quality check")]
    InsufficientSample {
        /// Bits analyzed.
        bits: u64,
        /// Minimum sample size.
        required: u64,
    },

    /// Share of ones too far from one half.
    #[error("bit bias {observed:.4} exceeds threshold {threshold:.4}")]
    BitBias {
        /// Measured bias.
        observed: f64,
        /// Limit for this sample size.
        threshold: f64,
    },

    /// Adjacent bits too strongly correlated.
    #[error("serial correlation {observed:.4} exceeds threshold {threshold:.4}")]
    SerialCorrelation {
        /// Measured lag-1 correlation.
        observed: f64,
        /// Limit for this sample size.
        threshold: f64,
    },

    /// A run of equal bits longer than a fair source would produce.
    #[error("run of {observed} equal bits exceeds threshold {threshold}")]
    LongRun {
        /// Longest run found.
        observed: u64,
        /// Limit for this sample size.
        threshold: u64,
    },
}
