//! Container inspection and extraction errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::tools::ToolError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The inspector ran but its report could not be used.
    #[error("Container inspection failed for '{}': {message}", path.display())]
    InspectionFailed { path: PathBuf, message: String },

    #[error("Failed to extract track {track_id}: {source}")]
    TrackFailed {
        track_id: u64,
        #[source]
        source: ToolError,
    },

    #[error("Output file missing or empty: {}", .0.display())]
    OutputMissing(PathBuf),
}

impl ExtractionError {
    pub fn inspection(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InspectionFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
