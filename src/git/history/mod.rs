//! Revision history queries
//!
//! [`History`] binds a [`CommandGateway`] to the range, revision and author
//! operations. Every hash list it returns is validated and ordered
//! oldest-first.

mod authors;
mod body;
mod range;
mod revision;


use std::path::PathBuf;

pub use authors::unique_authors;

use super::GitError;
use super::executor::{CommandGateway, GitExecutor};

/// Tuning for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Upper bound on concurrent per-commit queries in batch operations.
    /// `1` keeps batches strictly sequential.
    pub jobs: usize,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

/// Read-only view of a working copy's history
#[derive(Debug, Clone)]
pub struct History<G> {
    gateway: G,
    options: HistoryOptions,
}

impl History<GitExecutor> {
    /// History of the git working copy at `path`
    pub fn open(path: PathBuf) -> Self {
        Self::new(GitExecutor::with_repo_path(path))
    }
}

impl<G: CommandGateway> History<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_options(gateway, HistoryOptions::default())
    }

    pub fn with_options(gateway: G, options: HistoryOptions) -> Self {
        Self { gateway, options }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

/// Fail with [`GitError::UnknownRevision`] for references git would read as
/// an option
fn check_reference(reference: &str) -> Result<(), GitError> {
    if reference.starts_with('-') {
        return Err(GitError::UnknownRevision(reference.to_string()));
    }
    Ok(())
}
