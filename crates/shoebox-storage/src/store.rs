use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::info;

/// Directory-backed store for captured photos. Each capture is written out
/// as a JPEG; afterwards the photo is identified only by the returned
/// locator string, which the rest of the application treats as opaque.
#[derive(Clone, Debug)]
pub struct CaptureStore {
    root: PathBuf,
}

impl CaptureStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("create capture directory: {}", root.display()))?;
        Ok(Self { root })
    }

    /// The platform pictures directory, falling back to the application
    /// data directory on platforms without one.
    pub fn default_location() -> Result<Self> {
        let root = dirs::picture_dir()
            .map(|dir| dir.join("Shoebox"))
            .or_else(|| dirs::data_dir().map(|dir| dir.join("shoebox").join("pictures")))
            .context("no pictures or data directory available")?;
        Self::new(root)
    }

    /// Write `image` as a JPEG named after the capture moment and return
    /// the path string used as the photo's locator.
    pub fn save_capture(&self, image: &DynamicImage) -> Result<String> {
        let path = self.next_capture_path();

        let file =
            fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, 100);

        // JPEG has no alpha channel; flatten before encoding.
        image
            .to_rgb8()
            .write_with_encoder(encoder)
            .with_context(|| format!("encode JPEG: {}", path.display()))?;

        info!(path = %path.display(), "saved capture");
        Ok(path.to_string_lossy().to_string())
    }

    fn next_capture_path(&self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        let mut path = self.root.join(format!("Photo_{millis}.jpg"));
        let mut attempt = 1u32;
        while path.exists() {
            path = self.root.join(format!("Photo_{millis}_{attempt}.jpg"));
            attempt += 1;
        }
        path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
