use std::path::Path;

pub mod cache;
pub mod generator;

pub use cache::ThumbnailCache;

/// Load the cached thumbnail for `path`, generating and storing it on a
/// miss. A failed cache write is ignored; the freshly generated bytes are
/// still returned.
pub fn cached_thumbnail(cache: &ThumbnailCache, path: &Path) -> anyhow::Result<Vec<u8>> {
    let key = cache::cache_key(path);
    if let Some(bytes) = cache.load(&key) {
        return Ok(bytes);
    }

    let bytes = generator::thumbnail_bytes(path)?;
    cache.store(&key, &bytes).ok();
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn generates_then_serves_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.png");
        RgbImage::from_pixel(32, 32, Rgb([200, 100, 50]))
            .save(&source)
            .unwrap();

        let cache = ThumbnailCache::new(dir.path().join("cache")).unwrap();
        let first = cached_thumbnail(&cache, &source).unwrap();
        assert!(cache.load(&cache::cache_key(&source)).is_some());

        let second = cached_thumbnail(&cache, &source).unwrap();
        assert_eq!(first, second);
    }
}
