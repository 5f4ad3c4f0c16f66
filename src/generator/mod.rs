//! End-to-end generation runs.
//!
//! A run loads both images, validates their dimensions, extracts the
//! byte sequence, then drives the optional sinks in a fixed order:
//! byte file, visualization image, input deletion. Any failure aborts
//! the run with a [`GenerationError`].

mod config;
mod error;

pub use config::{ConfigError, FileConfig, GeneratorConfig};
pub use error::{ErrorKind, GenerationError};

use crate::extraction::{ByteStream, DelayBounds, DelayScheduler, Extractor, SkipSchedule};
use crate::input::{ImagePair, PixelGrid};
use crate::output::{self, WriteMode};
use std::path::PathBuf;

/// Random byte generator over a pair of image files.
#[derive(Debug, Clone)]
pub struct Generator {
    first: PathBuf,
    second: PathBuf,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator for two input images with default settings.
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        Self::with_config(first, second, GeneratorConfig::default())
    }

    /// Creates a generator for two input images.
    pub fn with_config(
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            config,
        }
    }

    /// Runs the full pipeline and returns the generated bytes.
    ///
    /// Every call starts from fresh state: a newly seeded scheduler and
    /// an empty packer. If input deletion fails, the error is raised
    /// after the output file and image have been written.
    pub fn generate_random(&self) -> Result<ByteStream, GenerationError> {
        let pair = ImagePair::open(&self.first, &self.second)?;
        let (width, height) = pair.dimensions();
        let bounds = DelayBounds::for_dimensions(width, height);

        tracing::info!(
            first = %self.first.display(),
            second = %self.second.display(),
            width,
            height,
            delay_min = bounds.min,
            delay_max = bounds.max,
            "Starting generation"
        );

        let bytes = match self.config.seed {
            Some(seed) => self.extract(&pair, &mut DelayScheduler::from_seed(bounds, seed)),
            None => self.extract(&pair, &mut DelayScheduler::from_os_entropy(bounds)),
        };
        drop(pair);

        self.write_outputs(&bytes)?;

        if self.config.delete_input_files {
            self.delete_inputs()?;
        }

        tracing::info!(bytes = bytes.len(), "Generation finished");
        Ok(bytes)
    }

    /// Extracts bytes from an already loaded pair without touching any sink.
    pub fn extract<G, S>(&self, pair: &ImagePair<G>, schedule: &mut S) -> ByteStream
    where
        G: PixelGrid,
        S: SkipSchedule + ?Sized,
    {
        let extractor = Extractor::new(self.config.bit_mode(), self.config.channel);
        let extraction = extractor.run(pair, schedule);

        tracing::debug!(
            candidates = extraction.stats.candidates,
            consumed = extraction.stats.consumed,
            discarded_bits = extraction.stats.discarded_bits,
            "Extracted bits"
        );
        extraction.bytes
    }

    fn write_outputs(&self, bytes: &ByteStream) -> Result<(), GenerationError> {
        let mode = WriteMode::from_overwrite(self.config.overwrite_output_file);

        if let Some(path) = &self.config.output_file {
            output::write_bytes(path, bytes.data(), mode)?;
            tracing::info!(path = %path.display(), mode = ?mode, "Wrote random bytes");
        }

        if let Some(image_path) = &self.config.output_image {
            match (mode, &self.config.output_file) {
                (WriteMode::Append, Some(file)) => output::write_image_from_file(image_path, file)?,
                (WriteMode::Append, None) => {
                    tracing::warn!(
                        "Append mode without an output file; rendering this run's bytes only"
                    );
                    output::write_image(image_path, bytes.data())?;
                }
                (WriteMode::Overwrite, _) => output::write_image(image_path, bytes.data())?,
            }
            tracing::info!(path = %image_path.display(), "Wrote output image");
        }

        Ok(())
    }

    /// Attempts both deletions, then reports the first failure.
    fn delete_inputs(&self) -> Result<(), GenerationError> {
        let mut first_failure = None;

        for path in [&self.first, &self.second] {
            match std::fs::remove_file(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "Deleted input file"),
                Err(source) => {
                    tracing::error!(path = %path.display(), error = %source, "Failed to delete input file");
                    first_failure.get_or_insert(GenerationError::InputDeletion {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
