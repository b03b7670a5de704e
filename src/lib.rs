//! gitrev - commit history extraction for git
//!
//! Runs `git log`, validates what comes back and turns it into
//! oldest-first revision data.
//!
//! This library provides:
//! - [`git`]: git command execution, parsing and history queries
//! - [`logging`]: reporting of system errors, retries and IO events
//! - [`model`]: Domain models
//! - [`retry`]: retrying queries after transient failures

pub mod git;
pub mod logging;
pub mod model;
pub mod retry;
