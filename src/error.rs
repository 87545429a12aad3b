/// Error types for the meme generator
///
/// Nothing in here is fatal to the session: every error ends up in the
/// status line and a `warn!` log entry, and the UI keeps running.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MemeError>;

#[derive(Debug, Error)]
pub enum MemeError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid font: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error("no caption font found (tried {0} locations)")]
    FontNotFound(usize),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("speech backend failed: {0}")]
    Speech(String),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
