//! Pipeline error types.
//!
//! Only container-level problems surface as errors. Track-level failures
//! (one extraction, one sidecar, one realignment) are logged and counted in
//! the episode report instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::language::TagError;
use crate::mux::MuxError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Video not found: {}", .0.display())]
    VideoNotFound(PathBuf),

    #[error("Container inspection failed: {0}")]
    ContainerInspectionFailed(#[from] ExtractionError),

    #[error("Remux failed: {0}")]
    Mux(#[from] MuxError),

    #[error("Invalid default language: {0}")]
    DefaultLanguage(#[from] TagError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A failure while processing one episode, with the episode named.
    #[error("{episode}: {source}")]
    ContainerFailed {
        episode: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn for_episode(episode: impl Into<String>, source: PipelineError) -> Self {
        Self::ContainerFailed {
            episode: episode.into(),
            source: Box::new(source),
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
