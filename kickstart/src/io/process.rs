//! Helpers for running external tools with an optional timeout and bounded output.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// Captured child process output.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub stdout_truncated: usize,
    pub stderr_truncated: usize,
    pub timed_out: bool,
}

impl CommandOutput {
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Turn a non-zero exit or timeout into an error naming `label`.
    pub fn ensure_success(&self, label: &str, timeout: Option<Duration>) -> Result<()> {
        if self.timed_out {
            let secs = timeout.map(|t| t.as_secs()).unwrap_or_default();
            return Err(anyhow!("{label} timed out after {secs}s"));
        }
        if self.status.success() {
            return Ok(());
        }
        let stderr = self.stderr_lossy();
        if stderr.is_empty() {
            Err(anyhow!("{label} failed with status {:?}", self.status.code()))
        } else {
            Err(anyhow!(
                "{label} failed with status {:?}: {stderr}",
                self.status.code()
            ))
        }
    }
}

/// Run a command and capture stdout/stderr without risking pipe deadlocks.
///
/// Output is read concurrently while the child runs. `output_limit_bytes` bounds the amount of
/// stdout/stderr stored in memory (bytes beyond this are discarded while still draining the pipe).
/// With `timeout` set, a child still running when it elapses is killed and `timed_out` is set.
#[instrument(skip_all, fields(program = ?cmd.get_program(), timeout_secs = timeout.map(|t| t.as_secs()), output_limit_bytes))]
pub fn run_command(
    mut cmd: Command,
    timeout: Option<Duration>,
    output_limit_bytes: usize,
) -> Result<CommandOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!("spawning child process");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return Err(e).with_context(|| format!("spawn {}", cmd.get_program().to_string_lossy()));
        }
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let stdout_handle = thread::spawn(move || read_stream_limited(stdout, output_limit_bytes));
    let stderr_handle = thread::spawn(move || read_stream_limited(stderr, output_limit_bytes));

    let mut timed_out = false;
    let status = match timeout {
        Some(limit) => match child.wait_timeout(limit).context("wait for command")? {
            Some(status) => status,
            None => {
                warn!(timeout_secs = limit.as_secs(), "command timed out, killing");
                timed_out = true;
                child.kill().context("kill command")?;
                child.wait().context("wait command after kill")?
            }
        },
        None => child.wait().context("wait for command")?,
    };

    let (stdout, stdout_truncated) = join_output(stdout_handle).context("join stdout")?;
    let (stderr, stderr_truncated) = join_output(stderr_handle).context("join stderr")?;

    if stdout_truncated > 0 || stderr_truncated > 0 {
        warn!(stdout_truncated, stderr_truncated, "output truncated");
    }

    debug!(exit_code = ?status.code(), timed_out, "command finished");
    Ok(CommandOutput {
        status,
        stdout,
        stderr,
        stdout_truncated,
        stderr_truncated,
        timed_out,
    })
}

fn join_output(handle: thread::JoinHandle<Result<(Vec<u8>, usize)>>) -> Result<(Vec<u8>, usize)> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("output reader thread panicked")),
    }
}

fn read_stream_limited<R: Read>(mut reader: R, limit: usize) -> Result<(Vec<u8>, usize)> {
    let mut buf = Vec::new();
    let mut truncated = 0usize;
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).context("read output")?;
        if n == 0 {
            break;
        }
        let remaining = limit.saturating_sub(buf.len());
        if remaining > 0 {
            let keep = n.min(remaining);
            buf.extend_from_slice(&chunk[..keep]);
            truncated += n.saturating_sub(keep);
        } else {
            truncated += n;
        }
    }

    Ok((buf, truncated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_stream_limited_counts_discarded_bytes() {
        let input: &[u8] = b"0123456789";
        let (kept, truncated) = read_stream_limited(input, 4).expect("read");
        assert_eq!(kept, b"0123");
        assert_eq!(truncated, 6);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let cmd = Command::new("kickstart-definitely-missing-program");
        let err = run_command(cmd, None, 1024).unwrap_err();
        assert!(format!("{err:#}").contains("spawn kickstart-definitely-missing-program"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_stderr() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo boom >&2; exit 3"]);
        let output = run_command(cmd, None, 1024).expect("run");
        let err = output.ensure_success("sh", None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Some(3)"), "{msg}");
        assert!(msg.contains("boom"), "{msg}");
    }

    #[cfg(unix)]
    #[test]
    fn slow_command_is_killed_after_timeout() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");
        let timeout = Some(Duration::from_millis(100));
        let output = run_command(cmd, timeout, 1024).expect("run");
        assert!(output.timed_out);
        assert!(output.ensure_success("sleep", timeout).is_err());
    }
}
