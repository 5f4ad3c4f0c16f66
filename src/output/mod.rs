//! Sinks for generated bytes.
//!
//! A raw binary dump (truncating or appending) and a bitmap rendering
//! of the sequence. Both are optional and run only after extraction
//! has finished.

mod file;
mod visualize;

pub use file::{write_bytes, WriteMode};
pub use visualize::{layout, render, write_image, write_image_from_file};
