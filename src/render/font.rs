/// Caption font loading
///
/// Captions are rasterized with ab_glyph. The font comes from the settings
/// file when one is configured, otherwise the first common sans-serif face
/// found on the system is used.

use ab_glyph::FontVec;
use std::path::{Path, PathBuf};

use crate::error::{MemeError, Result};

/// System locations tried when no font is configured, in preference order
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

/// A loaded caption font
pub struct CaptionFont {
    font: FontVec,
    path: PathBuf,
}

impl CaptionFont {
    /// Load the configured font, or try the system candidates
    pub fn load(configured: Option<&Path>) -> Result<Self> {
        match configured {
            Some(path) => Self::from_file(path),
            None => {
                let found = FONT_CANDIDATES
                    .iter()
                    .map(Path::new)
                    .find(|p| p.is_file())
                    .ok_or(MemeError::FontNotFound(FONT_CANDIDATES.len()))?;
                Self::from_file(found)
            }
        }
    }

    /// Load a font from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MemeError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec(data)?;

        tracing::info!("🔤 Caption font loaded from {}", path.display());
        Ok(Self { font, path: path.to_path_buf() })
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configured_font() {
        let result = CaptionFont::load(Some(Path::new("/nonexistent/font.ttf")));
        assert!(matches!(result, Err(MemeError::NotFound(_))));
    }

    #[test]
    fn test_garbage_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let result = CaptionFont::from_file(&path);
        assert!(matches!(result, Err(MemeError::InvalidFont(_))));
    }
}
