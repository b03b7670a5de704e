//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use super::GitError;
use super::constants::{self, errors, flags, special};

/// Matches the numeric part of `git --version`, ignoring vendor suffixes
/// such as "2.39.3 (Apple Git-145)" or "2.43.0.windows.1"
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?").expect("Invalid version regex"));

/// Something that can run a git subcommand against a bound working copy
///
/// Returns captured stdout on success. A non-zero exit must surface as
/// [`GitError::CommandFailed`] carrying the captured stderr.
///
/// Gateways are shared across the batch worker pool, hence `Sync`.
pub trait CommandGateway: Sync {
    fn call(&self, args: &[&str]) -> Result<String, GitError>;
}

impl<G: CommandGateway + ?Sized> CommandGateway for &G {
    fn call(&self, args: &[&str]) -> Result<String, GitError> {
        (**self).call(args)
    }
}

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the working copy (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific working copy
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Path of the bound working copy, if any
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically adds `--no-pager` so output is never held by a pager.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.args(args);

        tracing::debug!(?args, repo = ?self.repo_path, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed {
                args: args.join(" "),
                stderr,
                exit_code,
            })
        }
    }

    /// Get the git version
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "git version 2.43.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Check if git version is supported
    pub fn check_version(&self) -> Result<(), GitError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_GIT_VERSION) {
            return Err(GitError::UnsupportedVersion {
                version,
                minimum: constants::MIN_GIT_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

impl CommandGateway for GitExecutor {
    fn call(&self, args: &[&str]) -> Result<String, GitError> {
        self.run(args)
    }
}

/// Compare version strings (simple semver comparison)
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let caps = VERSION_REGEX.captures(v)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        let patch = caps
            .get(3)
            .and_then(|p| p.as_str().parse().ok())
            .unwrap_or(0);
        Some((major, minor, patch))
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
