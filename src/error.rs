//! Crate error type
//!
//! Traversal and plain file helpers return `io::Result` directly so the
//! platform error reaches the caller untouched. This enum exists for the
//! operations where a second failure domain appears: JSON decoding and
//! child-process exit status.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A child process ran to completion but exited non-zero (or was killed
    /// by a signal, in which case there is no code).
    #[error("process exited with {}", exit_description(.code))]
    ProcessFailed { code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Exit code of a failed process, if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ProcessFailed { code } => *code,
            _ => None,
        }
    }
}
