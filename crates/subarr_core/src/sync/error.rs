//! Realignment errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::tools::ToolError;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Realignment report carries no offset")]
    MissingOffset,

    #[error("Implausible sync offset {0:.3}s")]
    ImplausibleOffset(f64),

    #[error("No usable reference track")]
    NoReference,

    #[error("Format '{0}' cannot be realigned")]
    NotSyncable(String),

    #[error("Failed to export reference track: {0}")]
    Reference(#[from] ExtractionError),

    #[error("Realignment failed: {0}")]
    Tool(#[from] ToolError),

    #[error("Failed to move realigned file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type SyncResult<T> = Result<T, SyncError>;
