/// Image loader
///
/// Decodes the user's chosen file off the UI thread. Each new upload replaces
/// the previous one entirely.

use image::DynamicImage;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{MemeError, Result};

/// A decoded image, read-only once loaded
#[derive(Clone)]
pub struct LoadedImage {
    pub pixels: DynamicImage,
    pub width: u32,
    pub height: u32,
    /// File name, used as the image's alt text
    pub alt: String,
}

// pixels are left out; a photo would flood the log
impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("alt", &self.alt)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Load an image from disk
///
/// Decoding is CPU-bound, so it runs on tokio's blocking pool.
pub async fn load_image(path: PathBuf) -> Result<LoadedImage> {
    task::spawn_blocking(move || load_image_blocking(&path)).await?
}

/// Blocking implementation of image loading
fn load_image_blocking(path: &Path) -> Result<LoadedImage> {
    if !path.exists() {
        return Err(MemeError::NotFound(path.to_path_buf()));
    }

    // guess the format from content, not the extension
    let pixels = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let alt = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    tracing::info!("📷 Loaded image {}: {}x{}", alt, pixels.width(), pixels.height());

    Ok(LoadedImage {
        width: pixels.width(),
        height: pixels.height(),
        pixels,
        alt,
    })
}
