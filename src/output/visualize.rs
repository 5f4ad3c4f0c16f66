//! Bitmap rendering of generated bytes.
//!
//! Every bit becomes one pixel (white for 1, black for 0), MSB first,
//! laid out row-major in a near-square image. Structure in the output
//! shows up as visible patterns.

use crate::generator::GenerationError;
use image::{Rgb, RgbImage};
use std::path::Path;

const ONE: Rgb<u8> = Rgb([255, 255, 255]);
const ZERO: Rgb<u8> = Rgb([0, 0, 0]);
/// Fill for positions past the last bit.
const PADDING: Rgb<u8> = Rgb([128, 128, 128]);

/// Image dimensions used for `bit_count` bits.
pub fn layout(bit_count: u64) -> (u32, u32) {
    if bit_count == 0 {
        return (0, 0);
    }
    let mut width = (bit_count as f64).sqrt().ceil() as u64;
    // Guard against float rounding below the true root
    while width * width < bit_count {
        width += 1;
    }
    let height = bit_count.div_ceil(width);
    (width as u32, height as u32)
}

/// Renders `bytes` into a bitmap. Returns `None` for an empty sequence.
pub fn render(bytes: &[u8]) -> Option<RgbImage> {
    let bit_count = bytes.len() as u64 * 8;
    if bit_count == 0 {
        return None;
    }
    let (width, height) = layout(bit_count);

    Some(RgbImage::from_fn(width, height, |x, y| {
        let index = u64::from(y) * u64::from(width) + u64::from(x);
        if index >= bit_count {
            return PADDING;
        }
        let byte = bytes[(index / 8) as usize];
        if (byte >> (7 - index % 8)) & 1 == 1 {
            ONE
        } else {
            ZERO
        }
    }))
}

/// Renders `bytes` and saves the image to `path`.
///
/// The format follows the file extension. Nothing is written for an
/// empty sequence.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), GenerationError> {
    let Some(img) = render(bytes) else {
        tracing::warn!(path = %path.display(), "No bytes to render; output image skipped");
        return Ok(());
    };

    img.save(path).map_err(|source| GenerationError::OutputImage {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Wrote output image"
    );
    Ok(())
}

/// Renders the full contents of an existing byte file.
pub fn write_image_from_file(path: &Path, source_file: &Path) -> Result<(), GenerationError> {
    let bytes = std::fs::read(source_file).map_err(|source| GenerationError::OutputWrite {
        path: source_file.to_path_buf(),
        source,
    })?;
    write_image(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_square() {
        assert_eq!(layout(64), (8, 8));
        assert_eq!(layout(0), (0, 0));
    }

    #[test]
    fn test_layout_covers_all_bits() {
        for bits in [8u64, 16, 24, 96, 800, 8 * 1000] {
            let (w, h) = layout(bits);
            assert!(u64::from(w) * u64::from(h) >= bits);
            assert!(u64::from(w) * u64::from(h - 1) < bits);
        }
    }

    #[test]
    fn test_render_bits_msb_first() {
        let img = render(&[0b1000_0001, 0xFF, 0x00, 0x0F, 0xF0, 0xAA, 0x55, 0x00]).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(0, 0), ONE);
        assert_eq!(*img.get_pixel(1, 0), ZERO);
        assert_eq!(*img.get_pixel(7, 0), ONE);
        assert_eq!(*img.get_pixel(0, 2), ZERO);
        assert_eq!(*img.get_pixel(4, 3), ONE);
    }

    #[test]
    fn test_render_pads_tail() {
        // 24 bits in a 5x5 image leaves one padding pixel
        let img = render(&[0xFF; 3]).unwrap();
        assert_eq!(img.dimensions(), (5, 5));
        assert_eq!(*img.get_pixel(3, 4), ONE);
        assert_eq!(*img.get_pixel(4, 4), PADDING);
    }

    #[test]
    fn test_empty_render_skipped() {
        assert!(render(&[]).is_none());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        write_image(&path, &[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viz.png");
        write_image(&path, &[0xAA; 8]).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(*decoded.get_pixel(0, 0), ONE);
        assert_eq!(*decoded.get_pixel(1, 0), ZERO);
    }

    #[test]
    fn test_unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viz.notanimage");
        let err = write_image(&path, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, GenerationError::OutputImage { .. }));
    }

    #[test]
    fn test_render_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bytes.bin");
        let path = dir.path().join("viz.png");
        std::fs::write(&source, [0u8; 8]).unwrap();

        write_image_from_file(&path, &source).unwrap();
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert!(decoded.pixels().all(|p| *p == ZERO));
    }
}
