//! Scripted runner for tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::error::ToolResult;
use super::runner::{CommandOutput, ToolRunner};

type Handler = dyn Fn(&str, &[String], Option<&Path>) -> ToolResult<CommandOutput>;

/// Records every call and answers with a test-supplied closure.
pub struct FakeRunner {
    handler: Box<Handler>,
    pub calls: RefCell<Vec<FakeCall>>,
}

#[derive(Debug, Clone)]
pub struct FakeCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl FakeRunner {
    pub fn new(
        handler: impl Fn(&str, &[String], Option<&Path>) -> ToolResult<CommandOutput> + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> ToolResult<CommandOutput> {
        self.calls.borrow_mut().push(FakeCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
        });
        (self.handler)(program, args, cwd)
    }
}

pub fn ok(stdout: &str) -> ToolResult<CommandOutput> {
    Ok(CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
        exit_code: Some(0),
    })
}

pub fn exit(code: i32, stderr: &str) -> ToolResult<CommandOutput> {
    Ok(CommandOutput {
        stdout: String::new(),
        stderr: stderr.to_string(),
        exit_code: Some(code),
    })
}
