//! Command runner for external process execution.
//!
//! Every call has a deadline. Output pipes are drained on helper threads so
//! a chatty tool cannot block on a full pipe while we wait for it.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::error::{ToolError, ToolResult};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// stdout followed by stderr.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Turn a non-zero exit into [`ToolError::Failed`].
    pub fn ensure_success(self, tool: &str) -> ToolResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(self.failure(tool))
        }
    }

    pub fn failure(&self, tool: &str) -> ToolError {
        let message = if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };
        ToolError::Failed {
            tool: tool.to_string(),
            exit_code: self.exit_code.unwrap_or(-1),
            message,
        }
    }
}

/// Runs external programs. Implemented by [`CommandRunner`] and by fakes in
/// tests.
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> ToolResult<CommandOutput>;
}

/// Runs real processes with a fixed timeout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    fn wait_with_deadline(&self, program: &str, child: &mut Child) -> ToolResult<ExitStatus> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait().map_err(|e| ToolError::io(program, e))? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Already exited between the two calls is fine.
                let _ = child.kill();
                let _ = child.wait();
                return Err(ToolError::Timeout {
                    tool: program.to_string(),
                    secs: self.timeout.as_secs(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::from_secs(600)
    }
}

impl ToolRunner for CommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> ToolResult<CommandOutput> {
        tracing::debug!("Running: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|e| ToolError::spawn(program, e))?;

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = self.wait_with_deadline(program, &mut child)?;

        Ok(CommandOutput {
            stdout: collect(stdout),
            stderr: collect(stderr),
            exit_code: status.code(),
        })
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<thread::JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn captures_both_streams() {
        let runner = CommandRunner::from_secs(10);
        let out = runner
            .run("sh", &args(&["-c", "echo out; echo err >&2"]), None)
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let runner = CommandRunner::from_secs(10);
        let out = runner.run("sh", &args(&["-c", "echo boom >&2; exit 3"]), None).unwrap();
        assert_eq!(out.exit_code, Some(3));
        let err = out.ensure_success("sh").unwrap_err();
        assert!(matches!(err, ToolError::Failed { exit_code: 3, ref message, .. } if message == "boom"));
    }

    #[cfg(unix)]
    #[test]
    fn slow_tool_times_out() {
        let runner = CommandRunner::new(Duration::from_millis(200));
        let err = runner.run("sleep", &args(&["5"]), None).unwrap_err();
        assert!(matches!(err, ToolError::Timeout { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::from_secs(10);
        let out = runner.run("pwd", &[], Some(dir.path())).unwrap();
        let reported = std::fs::canonicalize(out.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let runner = CommandRunner::from_secs(1);
        let err = runner.run("definitely-not-a-real-tool-xyz", &[], None).unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }
}
