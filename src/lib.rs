//! BlueRand: random bytes from the color noise of two images
//!
//! Two photographs of the same scene, taken with the same sensor, differ
//! in the low bits of every pixel because of sensor noise. This crate
//! harvests that difference: one bit per sampled pixel, taken from the
//! XOR of the two images' channel values, packed MSB-first into bytes.
//!
//! # Architecture
//!
//! ```text
//! input (decode + validate) → extraction (sample, delay, pack) → output (file, image)
//!                                        ↓
//!                              analysis (quality report)
//! ```
//!
//! A randomized skip between consumed pixels keeps adjacent output bits
//! from coming from neighbouring pixels.
//!
//! # Design Principles
//!
//! - **Fresh state per run**: no draws or partial bytes carry over
//! - **Validate before sampling**: mismatched inputs produce no output
//! - **No cryptographic claims**: this is an entropy-harvesting heuristic,
//!   not a certified CSPRNG
//!
//! # Example
//!
//! ```no_run
//! use bluerand::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     output_file: Some("random.bin".into()),
//!     ..Default::default()
//! };
//!
//! let bytes = Generator::with_config("shot1.png", "shot2.png", config)
//!     .generate_random()
//!     .unwrap();
//!
//! println!("{} random bytes", bytes.len());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod extraction;
pub mod generator;
pub mod input;
pub mod output;

// Re-export commonly used types at crate root
pub use analysis::{Fingerprint, HashAlgorithm, QualityReport, QualityThresholds};
pub use extraction::{BitMode, ByteStream, DelayBounds, DelayScheduler, Extractor, FixedDelay};
pub use generator::{ErrorKind, FileConfig, GenerationError, Generator, GeneratorConfig};
pub use input::{Channel, ImagePair, PixelGrid};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
