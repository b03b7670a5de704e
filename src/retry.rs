//! Retrying history queries
//!
//! The query layer never retries on its own. Callers that want another
//! attempt after a transient backend failure wrap the query here, and each
//! failed attempt is reported through the [`LogContext`].

use std::thread;
use std::time::Duration;

use crate::git::GitError;
use crate::logging::LogContext;

/// How many extra attempts to make and how long to wait between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 0,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Run `op` once and never retry
    pub fn none() -> Self {
        Self::default()
    }
}

/// Run `op`, retrying retryable failures according to `policy`
///
/// Every failure is reported with `identifier`. Failures that
/// [`GitError::is_retryable`] rejects end the loop immediately.
pub fn with_retry<T, F>(
    ctx: &LogContext,
    identifier: &str,
    policy: RetryPolicy,
    mut op: F,
) -> Result<T, GitError>
where
    F: FnMut() -> Result<T, GitError>,
{
    let attempts = policy.retries.saturating_add(1);
    let mut attempt = 1;

    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => {
                let detail = format!("attempt {attempt} of {attempts}");
                if attempt < attempts && err.is_retryable() {
                    ctx.on_retry_exception(identifier, &detail, &err, Some(policy.delay));
                    thread::sleep(policy.delay);
                    attempt += 1;
                } else {
                    ctx.on_retry_exception(identifier, &detail, &err, None);
                    return Err(err);
                }
            }
        }
    }
}
