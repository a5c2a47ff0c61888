//! Process execution for external formatters.
//!
//! Runs a command with the code on stdin and collects stdout/stderr, killing
//! the process if it outlives the configured timeout.

use std::io::{self, Read, Write};
#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Result of running a tool to completion.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, -1 when the process was terminated by a signal.
    pub exit_code: i32,
    pub success: bool,
}

/// Error during tool execution.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    #[error("Tool '{tool}' failed: {message}")]
    ExecutionFailed { tool: String, message: String },

    #[error("Tool '{tool}' timed out after {timeout_ms}ms")]
    Timeout { tool: String, timeout_ms: u64 },

    #[error("I/O error running '{tool}': {source}")]
    Io { tool: String, source: io::Error },
}

/// Runs external tools over stdin/stdout.
#[derive(Debug, Clone)]
pub struct ToolExecutor {
    /// Milliseconds before a tool is killed; 0 waits forever.
    timeout_ms: u64,
}

impl ToolExecutor {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    /// Run `command` followed by `args`, writing `input` to its stdin.
    ///
    /// A non-zero exit is not an error here; see [`ToolExecutor::run_filter`].
    pub fn execute(&self, command: &[String], args: &[String], input: &str) -> Result<ToolOutput, ExecutorError> {
        let Some((program, base_args)) = command.split_first() else {
            return Err(ExecutorError::ExecutionFailed {
                tool: "unknown".to_string(),
                message: "Empty command".to_string(),
            });
        };

        let mut cmd = Command::new(program);
        cmd.args(base_args)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // Own process group, so a timeout also reaches anything a wrapper like `npx` forks
        #[cfg(unix)]
        cmd.process_group(0);

        let mut child = cmd.spawn().map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ExecutorError::ToolNotFound { tool: program.clone() },
            _ => ExecutorError::Io {
                tool: program.clone(),
                source,
            },
        })?;

        let stdout_handle = child
            .stdout
            .take()
            .map(|stdout| thread::spawn(move || read_pipe_to_string(stdout)));
        let stderr_handle = child
            .stderr
            .take()
            .map(|stderr| thread::spawn(move || read_pipe_to_string(stderr)));
        let stdin_handle = child.stdin.take().map(|mut stdin| {
            let input = input.to_owned();
            thread::spawn(move || match stdin.write_all(input.as_bytes()) {
                // A tool that exits without reading closes the pipe; its exit status tells the story
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            })
        });

        let timeout = Duration::from_millis(self.timeout_ms);
        let status = if timeout.is_zero() {
            child.wait().map_err(|source| ExecutorError::Io {
                tool: program.clone(),
                source,
            })?
        } else {
            let start = Instant::now();
            loop {
                if let Some(status) = child.try_wait().map_err(|source| ExecutorError::Io {
                    tool: program.clone(),
                    source,
                })? {
                    break status;
                }
                if start.elapsed() >= timeout {
                    kill_process_group(&mut child);
                    let _ = child.wait();
                    // Pipe threads are left detached; joining them could wait on a stray descendant
                    log::debug!("Killed '{program}' after {}ms", self.timeout_ms);
                    return Err(ExecutorError::Timeout {
                        tool: program.clone(),
                        timeout_ms: self.timeout_ms,
                    });
                }
                thread::sleep(Duration::from_millis(5));
            }
        };

        // Still blocked means a descendant holds stdin open without reading it
        if let Some(handle) = stdin_handle.filter(|handle| handle.is_finished())
            && let Ok(Err(source)) = handle.join()
        {
            return Err(ExecutorError::Io {
                tool: program.clone(),
                source,
            });
        }

        let stdout = join_reader(stdout_handle).map_err(|message| ExecutorError::ExecutionFailed {
            tool: program.clone(),
            message,
        })?;
        let stderr = join_reader(stderr_handle).map_err(|message| ExecutorError::ExecutionFailed {
            tool: program.clone(),
            message,
        })?;

        Ok(ToolOutput {
            stdout,
            stderr,
            exit_code: status.code().unwrap_or(-1),
            success: status.success(),
        })
    }

    /// Run a tool as a stdin-to-stdout filter, failing on a non-zero exit.
    pub fn run_filter(&self, command: &[String], args: &[String], input: &str) -> Result<String, ExecutorError> {
        let output = self.execute(command, args, input)?;

        if output.success {
            Ok(output.stdout)
        } else {
            let exit_code = output.exit_code;
            let stderr = output.stderr.trim();
            Err(ExecutorError::ExecutionFailed {
                tool: command.first().cloned().unwrap_or_default(),
                message: format!("Exit code {exit_code}: {stderr}"),
            })
        }
    }
}

#[cfg(unix)]
fn kill_process_group(child: &mut Child) {
    // The child leads its group, so its pid is the group id
    if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: kill(2) only sends a signal and touches no memory of ours
        unsafe {
            libc::kill(-pgid, libc::SIGKILL);
        }
    }
    let _ = child.kill();
}

#[cfg(not(unix))]
fn kill_process_group(child: &mut Child) {
    let _ = child.kill();
}

fn read_pipe_to_string<R: Read>(mut pipe: R) -> io::Result<String> {
    let mut buf = Vec::new();
    pipe.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn join_reader(handle: Option<thread::JoinHandle<io::Result<String>>>) -> Result<String, String> {
    match handle {
        Some(handle) => match handle.join() {
            Ok(res) => res.map_err(|e| format!("Failed to read output: {e}")),
            Err(_) => Err("Output reader thread panicked".to_string()),
        },
        None => Ok(String::new()),
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new(30_000)
    }
}
