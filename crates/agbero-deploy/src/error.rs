use std::path::PathBuf;

use thiserror::Error;

use crate::parse::ParseError;

/// Exit code used when a failure has no command exit status of its own.
const GENERIC_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("'{command}' failed with exit code {code}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to patch '{path}': {source}")]
    Patch {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DeployError {
    /// Process exit code to report for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } if *code != 0 => *code,
            _ => GENERIC_FAILURE,
        }
    }
}
