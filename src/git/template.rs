//! git log format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from `git log`
//! regardless of user configuration.

/// Number of leading lines that must be present in detailed output
/// (hash, author email, author name, committer email, committer name, subject)
pub const DETAILED_HEADER_LINES: usize = 6;

/// Formats for `git log --format=...`
pub struct Formats;

impl Formats {
    /// One full hash per line
    pub fn hash() -> &'static str {
        "--format=%H"
    }

    /// Detailed per-commit format
    ///
    /// Fields (separated by newline):
    /// 1. full hash
    /// 2. author email
    /// 3. author name
    /// 4. committer email
    /// 5. committer name
    /// 6. subject
    /// 7. body (may span several lines, may be empty)
    ///
    /// The body is last because it is the only field that can contain
    /// line breaks.
    pub fn detailed() -> &'static str {
        concat!(
            "--format=",
            "%H", "%n",  // hash
            "%ae", "%n", // author email
            "%an", "%n", // author name
            "%ce", "%n", // committer email
            "%cn", "%n", // committer name
            "%s", "%n",  // subject
            "%b",        // body
        )
    }

    /// Raw message (subject and body), without the trailing terminator
    pub fn raw_body() -> &'static str {
        "--format=format:%B"
    }

    /// Raw message (subject and body), newline terminated
    pub fn message() -> &'static str {
        "--format=%B"
    }
}
