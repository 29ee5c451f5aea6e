//! Subtitle error types.

use std::path::PathBuf;

/// Errors that can occur while sampling subtitle files.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// Failed to read subtitle file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Format carries no readable dialogue (bitmaps, unknown codecs).
    #[error("Subtitle format '{0}' has no text dialogue")]
    NotText(String),
}

impl SubtitleError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}

pub type SubtitleResult<T> = Result<T, SubtitleError>;
