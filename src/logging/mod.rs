//! Operational event reporting
//!
//! A [`LogContext`] is built once by the caller and passed to whatever
//! needs to report. It has two optional sinks:
//! - an external command run as `<command> <identifier> <detail>` for
//!   system errors, usually an alerting hook
//! - an append-only text file receiving timestamped IO events

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;

/// Longest detail forwarded to the external system error command.
///
/// Details can easily exceed the platform's argument length limit.
pub const MAX_DETAIL_CHARS: usize = 160;

/// Handle for reporting system errors, retries and IO events
#[derive(Debug, Default)]
pub struct LogContext {
    system_error_command: Option<PathBuf>,
    io_log_path: Option<PathBuf>,
    io_log_lock: Mutex<()>,
}

impl LogContext {
    /// A context with no sinks configured; only `tracing` output is produced
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_error_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.set_system_error_command(command);
        self
    }

    pub fn with_io_log_path(mut self, path: impl AsRef<Path>) -> io::Result<Self> {
        self.set_io_log_path(path)?;
        Ok(self)
    }

    pub fn set_system_error_command(&mut self, command: impl Into<PathBuf>) {
        self.system_error_command = Some(command.into());
    }

    pub fn clear_system_error_command(&mut self) {
        self.system_error_command = None;
    }

    /// Set the IO event log file, resolved to an absolute path now so later
    /// working directory changes do not move it
    pub fn set_io_log_path(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        self.io_log_path = Some(std::path::absolute(path)?);
        Ok(())
    }

    pub fn system_error_command(&self) -> Option<&Path> {
        self.system_error_command.as_deref()
    }

    pub fn io_log_path(&self) -> Option<&Path> {
        self.io_log_path.as_deref()
    }

    /// Forward a system error to the external command, if one is configured
    ///
    /// Never fails; problems running the command are logged and dropped.
    pub fn on_system_error(&self, identifier: &str, detail: &str) {
        let Some(ref command) = self.system_error_command else {
            return;
        };

        let detail = truncate_detail(detail, MAX_DETAIL_CHARS);
        match Command::new(command).arg(identifier).arg(detail).output() {
            Ok(output) if output.status.success() => {}
            Ok(output) => tracing::warn!(
                command = %command.display(),
                identifier,
                exit_code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "system error command failed"
            ),
            Err(e) => tracing::warn!(
                command = %command.display(),
                identifier,
                error = %e,
                "could not run system error command"
            ),
        }
    }

    /// Report a failed attempt of a retried operation
    ///
    /// `delay` is the wait before the next attempt, or `None` when no
    /// further attempt will be made.
    pub fn on_retry_exception<E>(
        &self,
        identifier: &str,
        detail: &str,
        error: &E,
        delay: Option<Duration>,
    ) where
        E: fmt::Debug + fmt::Display + ?Sized,
    {
        match delay {
            Some(delay) => tracing::warn!(
                "on_retry_exception: during \"{identifier}\" encountered error \"{error}\", \
                 will retry in {delay:?}. More detail: \"{detail}\"."
            ),
            None => tracing::error!(
                "on_retry_exception: during \"{identifier}\" encountered error \"{error}\", \
                 will not retry. More detail: \"{detail}\"."
            ),
        }

        self.on_system_error(identifier, &format!("{detail}\n{error:?}"));
    }

    /// Append a timestamped line to the IO event log, if one is configured
    ///
    /// Never fails; write errors are logged and dropped.
    pub fn on_io_event(&self, identifier: &str, detail: &str) {
        let _guard = self.io_log_lock.lock().unwrap_or_else(|e| e.into_inner());
        let Some(ref path) = self.io_log_path else {
            return;
        };

        if let Err(e) = append_io_event(path, identifier, detail) {
            tracing::warn!(path = %path.display(), error = %e, "could not write io event");
        }
    }
}

fn append_io_event(path: &Path, identifier: &str, detail: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.6f");
    writeln!(file, "{now}: {identifier} - {detail}")
}

/// First `max_chars` characters of `detail`, never splitting a character
pub fn truncate_detail(detail: &str, max_chars: usize) -> &str {
    match detail.char_indices().nth(max_chars) {
        Some((end, _)) => &detail[..end],
        None => detail,
    }
}
