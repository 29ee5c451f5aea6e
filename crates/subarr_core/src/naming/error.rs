//! Filename codec errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The filename does not follow the canonical pattern.
    #[error("Malformed subtitle filename '{filename}': {reason}")]
    MalformedFilename { filename: String, reason: String },
}

impl NamingError {
    pub fn malformed(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFilename {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}

pub type NamingResult<T> = Result<T, NamingError>;
