//! External process execution.

mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod runner;
mod toolbox;

pub use error::{ToolError, ToolResult};
pub use runner::{CommandOutput, CommandRunner, ToolRunner};
pub use toolbox::Toolbox;
