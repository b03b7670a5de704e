//! Detailed log parser (git log <hash>^! --format=%H%n%ae%n%an%n%ce%n%cn%n%s%n%b)

use super::super::GitError;
use super::super::template::DETAILED_HEADER_LINES;
use crate::model::Revision;

use super::Parser;

impl Parser {
    /// Parse one commit's detailed log output into a [`Revision`]
    ///
    /// The first six lines are the fixed header fields. Everything after is
    /// the body, rejoined with `\n`, so blank lines inside the body survive
    /// and git's record terminator shows up as a trailing newline.
    pub fn parse_revision(output: &str) -> Result<Revision, GitError> {
        let lines: Vec<&str> = output.lines().collect();

        if lines.len() < DETAILED_HEADER_LINES {
            return Err(GitError::MalformedMessage {
                lines: lines.len(),
                output: output.to_string(),
            });
        }

        Ok(Revision {
            hash: lines[0].to_string(),
            author_email: lines[1].to_string(),
            author_name: lines[2].to_string(),
            committer_email: lines[3].to_string(),
            committer_name: lines[4].to_string(),
            subject: lines[5].to_string(),
            message: lines[DETAILED_HEADER_LINES..].join("\n"),
        })
    }
}
