//! Child-process helpers
//!
//! Two styles: `exec` runs a shell one-liner and captures its output;
//! `run_process` spawns a program directly and streams its output through
//! caller-supplied sinks as it is produced.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Error, Result};

/// Captured result of a completed command.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// Run a command line through the shell and capture its output.
///
/// A non-zero exit is an error; use [`exec_unchecked`] to inspect the exit
/// code yourself.
pub fn exec(command: &str) -> Result<ExecOutput> {
    let output = exec_unchecked(command)?;
    if output.success() {
        Ok(output)
    } else {
        Err(Error::ProcessFailed { code: output.code })
    }
}

/// Run a command line through the shell and capture its output, reporting a
/// non-zero exit in `code` instead of failing.
///
/// Only spawn/IO failures are errors here.
pub fn exec_unchecked(command: &str) -> Result<ExecOutput> {
    let output = shell_command(command).output()?;
    Ok(ExecOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code(),
    })
}

/// Spawn a program directly (no shell) and stream its output.
///
/// stdout and stderr are copied to the given sinks concurrently while the
/// child runs, so output appears as it is produced rather than at exit.
/// Returns the exit code on success (always 0); a non-zero exit or a sink
/// write failure is an error.
pub fn run_process<O, E>(
    program: &str,
    args: &[&str],
    mut stdout_sink: O,
    mut stderr_sink: E,
) -> Result<i32>
where
    O: Write + Send,
    E: Write + Send,
{
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Both pipes are open; taking them cannot fail
    let mut child_stdout = child.stdout.take().expect("stdout was piped");
    let mut child_stderr = child.stderr.take().expect("stderr was piped");

    let (out_result, err_result) = thread::scope(|scope| {
        let out = scope.spawn(move || io::copy(&mut child_stdout, &mut stdout_sink));
        let err = scope.spawn(move || io::copy(&mut child_stderr, &mut stderr_sink));
        (
            out.join().expect("stdout pump panicked"),
            err.join().expect("stderr pump panicked"),
        )
    });

    let status = child.wait()?;
    out_result?;
    err_result?;

    match status.code() {
        Some(0) => Ok(0),
        code => Err(Error::ProcessFailed { code }),
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_captures_stdout() {
        let output = exec("echo hello").unwrap();
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.success());
    }

    #[test]
    fn test_exec_captures_stderr() {
        let output = exec("echo oops >&2").unwrap();
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[test]
    fn test_exec_nonzero_exit_is_error() {
        let err = exec("exit 3").unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
    }

    #[test]
    fn test_exec_unchecked_reports_code() {
        let output = exec_unchecked("echo partial && exit 7").unwrap();
        assert_eq!(output.code, Some(7));
        assert!(!output.success());
        assert_eq!(output.stdout.trim(), "partial");
    }

    #[test]
    fn test_run_process_streams_both_pipes() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_process(
            "sh",
            &["-c", "echo to-out; echo to-err >&2"],
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8_lossy(&out).trim(), "to-out");
        assert_eq!(String::from_utf8_lossy(&err).trim(), "to-err");
    }

    #[test]
    fn test_run_process_nonzero_exit() {
        let err = run_process("sh", &["-c", "exit 5"], io::sink(), io::sink()).unwrap_err();
        assert_eq!(err.exit_code(), Some(5));
    }

    #[test]
    fn test_run_process_missing_program() {
        let result = run_process(
            "definitely-not-a-real-program",
            &[],
            io::sink(),
            io::sink(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
