//! git command execution layer
//!
//! This module handles running `git log` and friends and turning their
//! output into validated, oldest-first revision data.

pub mod constants;
mod executor;
mod history;
/// Parser module (public for integration testing)
pub mod parser;
mod template;
mod validate;

pub use executor::{CommandGateway, GitExecutor};
pub use history::{History, HistoryOptions, unique_authors};
pub use template::Formats;
pub use validate::validate_hashes;

use std::io;
use thiserror::Error;

/// Errors that can occur when querying git history
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git {args} failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        args: String,
        stderr: String,
        exit_code: i32,
    },

    #[error("{source_name}: invalid hashes {hashes:?}")]
    InvalidHashes {
        source_name: &'static str,
        hashes: Vec<String>,
    },

    #[error("less hashes than expected: wanted {expected}, got {found}")]
    InsufficientHistory { expected: usize, found: usize },

    #[error("Malformed detailed log output ({lines} lines, need at least 6): {output:?}")]
    MalformedMessage { lines: usize, output: String },

    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    #[error("git version {version} is not supported (minimum: {minimum})")]
    UnsupportedVersion { version: String, minimum: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

impl GitError {
    /// Whether running the same query again might succeed
    ///
    /// Only process-level failures qualify. Bad output and missing history
    /// will not change on a second try.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GitError::CommandFailed { .. } | GitError::IoError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failure_is_retryable() {
        let err = GitError::CommandFailed {
            args: "log".to_string(),
            stderr: "fatal: unable to read".to_string(),
            exit_code: 128,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_data_errors_are_not_retryable() {
        let invalid = GitError::InvalidHashes {
            source_name: "range_to_here",
            hashes: vec!["zz".to_string()],
        };
        let short = GitError::InsufficientHistory {
            expected: 2,
            found: 1,
        };
        assert!(!invalid.is_retryable());
        assert!(!short.is_retryable());
    }

    #[test]
    fn test_command_failed_message() {
        let err = GitError::CommandFailed {
            args: "log HEAD -n 1".to_string(),
            stderr: "boom".to_string(),
            exit_code: 1,
        };
        assert_eq!(
            err.to_string(),
            "git log HEAD -n 1 failed (exit code 1): boom"
        );
    }
}
