//! Raw byte dump of generated sequences.

use crate::generator::GenerationError;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite.
    Overwrite,
    /// Keep existing content and write after it.
    Append,
}

impl WriteMode {
    /// Maps the `overwrite_output_file` flag to a mode.
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::Append
        }
    }
}

/// Writes `bytes` verbatim to `path`, creating the file if needed.
pub fn write_bytes(path: &Path, bytes: &[u8], mode: WriteMode) -> Result<(), GenerationError> {
    let wrap = |source: std::io::Error| GenerationError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Overwrite => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    let file = options.open(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes).map_err(wrap)?;
    out.flush().map_err(wrap)?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        mode = ?mode,
        "Wrote output file"
    );
    Ok(())
}
