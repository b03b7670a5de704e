//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Minimum supported git version
pub const MIN_GIT_VERSION: &str = "1.8.0";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Never page output (global flag, must precede the subcommand)
    pub const NO_PAGER: &str = "--no-pager";
    /// Run as if git was started in the given path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Limit the number of commits
    pub const MAX_COUNT: &str = "-n";
    /// Only output arguments that resolve to revisions
    pub const REVS_ONLY: &str = "--revs-only";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Special git values
pub mod special {
    /// The current position in history
    pub const HEAD: &str = "HEAD";

    /// Suffix selecting exactly one commit, excluding its parents
    pub const SINGLE_COMMIT_SUFFIX: &str = "^!";

    /// Range operator between two references
    pub const RANGE: &str = "..";

    /// Ends the revision arguments; anything after it is a path
    pub const END_OF_REVISIONS: &str = "--";

    /// Version output prefix (e.g., "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}

pub use special::HEAD;
