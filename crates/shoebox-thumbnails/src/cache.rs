use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::debug;

/// Disk-backed thumbnail cache keyed by [`cache_key`].
pub struct ThumbnailCache {
    cache_dir: PathBuf,
}

impl ThumbnailCache {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)
            .with_context(|| format!("create cache dir: {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    /// The path where a thumbnail for this key would be stored.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        // Use first 2 chars as subdirectory to avoid too many files in one dir
        let subdir = &key[..2.min(key.len())];
        self.cache_dir.join(subdir).join(format!("{key}.jpg"))
    }

    /// Store thumbnail bytes under `key`, returning the entry path.
    pub fn store(&self, key: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data).with_context(|| format!("write thumbnail: {}", path.display()))?;
        debug!(?path, "cached thumbnail");
        Ok(path)
    }

    /// Read cached thumbnail bytes, if present.
    pub fn load(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.entry_path(key)).ok()
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

/// Cache key for a source image: a blake3 hash of the locator path plus
/// the file's modification time, so an overwritten source gets a fresh
/// thumbnail.
pub fn cache_key(path: &Path) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(path.to_string_lossy().as_bytes());

    if let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) {
        let dur = modified.duration_since(UNIX_EPOCH).unwrap_or_default();
        hasher.update(&dur.as_nanos().to_le_bytes());
    }

    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThumbnailCache::new(dir.path().to_path_buf()).unwrap();

        let key = "abcdef1234567890";
        assert!(cache.load(key).is_none());

        let data = b"fake jpeg data";
        let path = cache.store(key, data).unwrap();
        assert!(path.exists());
        assert_eq!(cache.load(key).unwrap(), data);
    }

    #[test]
    fn subdirectory_bucketing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThumbnailCache::new(dir.path().to_path_buf()).unwrap();

        let path = cache.entry_path("ff1234");
        assert!(path.parent().unwrap().ends_with("ff"));
        assert!(path.to_string_lossy().ends_with("ff1234.jpg"));
    }

    #[test]
    fn overwrite_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThumbnailCache::new(dir.path().to_path_buf()).unwrap();

        cache.store("overwrite", b"version1").unwrap();
        cache.store("overwrite", b"version2").unwrap();
        assert_eq!(cache.load("overwrite").unwrap(), b"version2");
    }

    #[test]
    fn key_changes_when_source_changes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.jpg");
        fs::write(&source, b"one").unwrap();
        let key_one = cache_key(&source);

        // Same path, different mtime.
        let later = std::time::SystemTime::now() + std::time::Duration::from_secs(5);
        fs::write(&source, b"two").unwrap();
        fs::File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(later)
            .unwrap();

        assert_ne!(key_one, cache_key(&source));
    }

    #[test]
    fn key_is_stable_for_missing_files() {
        let ghost = Path::new("/nowhere/ghost.jpg");
        assert_eq!(cache_key(ghost), cache_key(ghost));
    }
}
