//! External tool errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    /// The executable could not be started at all.
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    /// The tool ran past its deadline and was killed.
    #[error("{tool} timed out after {secs}s")]
    Timeout { tool: String, secs: u64 },

    /// The tool exited unsuccessfully.
    #[error("{tool} failed (exit code {exit_code}): {message}")]
    Failed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    #[error("I/O error while waiting for {tool}: {source}")]
    Io {
        tool: String,
        source: std::io::Error,
    },
}

impl ToolError {
    pub fn spawn(tool: &str, source: std::io::Error) -> Self {
        Self::Spawn {
            tool: tool.to_string(),
            source,
        }
    }

    pub fn io(tool: &str, source: std::io::Error) -> Self {
        Self::Io {
            tool: tool.to_string(),
            source,
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
