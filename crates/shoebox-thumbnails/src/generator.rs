use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use tracing::debug;

pub const THUMBNAIL_LONGEST_EDGE: u32 = 256;

/// Decode the image at `path` and produce JPEG thumbnail bytes whose
/// longest edge is bounded by [`THUMBNAIL_LONGEST_EDGE`].
pub fn thumbnail_bytes(path: &Path) -> Result<Vec<u8>> {
    let img = image::open(path).with_context(|| format!("decode {}", path.display()))?;
    let thumb = img.resize(
        THUMBNAIL_LONGEST_EDGE,
        THUMBNAIL_LONGEST_EDGE,
        FilterType::Lanczos3,
    );

    let mut jpeg_bytes = Vec::new();
    thumb
        .to_rgb8()
        .write_to(&mut Cursor::new(&mut jpeg_bytes), image::ImageFormat::Jpeg)
        .context("encode thumbnail as JPEG")?;

    debug!(path = %path.display(), size = jpeg_bytes.len(), "generated thumbnail");

    Ok(jpeg_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn bounds_the_longest_edge() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("wide.png");
        RgbImage::from_pixel(1024, 512, Rgb([10, 200, 30]))
            .save(&source)
            .unwrap();

        let bytes = thumbnail_bytes(&source).unwrap();
        let thumb = image::load_from_memory(&bytes).unwrap();
        assert_eq!(thumb.width(), THUMBNAIL_LONGEST_EDGE);
        assert_eq!(thumb.height(), THUMBNAIL_LONGEST_EDGE / 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(thumbnail_bytes(&dir.path().join("absent.jpg")).is_err());
    }
}
