//! Range resolution: which commits lie between two points in history

use super::super::constants::{HEAD, commands, flags, special};
use super::super::parser::Parser;
use super::super::template::Formats;
use super::super::validate::validate_hashes;
use super::super::{CommandGateway, GitError};
use super::{History, check_reference};

impl<G: CommandGateway> History<G> {
    /// Hashes of the commits after `start` up to `HEAD`, oldest first
    ///
    /// The list begins with the commit closest to, but not including,
    /// `start`. Empty when `start` is `HEAD` itself.
    pub fn range_to_here(&self, start: &str) -> Result<Vec<String>, GitError> {
        check_reference(start)?;

        let range = format!("{start}{}", special::RANGE);
        let output = self.gateway.call(&[
            commands::LOG,
            &range,
            Formats::hash(),
            special::END_OF_REVISIONS,
        ])?;

        let hashes = Parser::parse_hashes_oldest_first(&output);
        validate_hashes("range_to_here", &hashes)?;
        Ok(hashes)
    }

    /// The last `n` commit hashes reachable from `reference`, oldest first
    ///
    /// Fails with [`GitError::InsufficientHistory`] rather than returning a
    /// short list when fewer than `n` commits exist.
    pub fn last_n_from_ref(&self, n: usize, reference: &str) -> Result<Vec<String>, GitError> {
        check_reference(reference)?;

        let count = n.to_string();
        let output = self.gateway.call(&[
            commands::LOG,
            reference,
            flags::MAX_COUNT,
            &count,
            Formats::hash(),
            special::END_OF_REVISIONS,
        ])?;

        let hashes = Parser::parse_hashes_oldest_first(&output);
        if hashes.len() < n {
            return Err(GitError::InsufficientHistory {
                expected: n,
                found: hashes.len(),
            });
        }
        validate_hashes("last_n_from_ref", &hashes)?;
        Ok(hashes)
    }

    /// The last `n` commit hashes reachable from `HEAD`, oldest first
    pub fn last_n(&self, n: usize) -> Result<Vec<String>, GitError> {
        self.last_n_from_ref(n, HEAD)
    }

    /// The hash of the commit `reference` points at
    pub fn last_commit_from_ref(&self, reference: &str) -> Result<String, GitError> {
        let mut hashes = self.last_n_from_ref(1, reference)?;
        hashes.pop().ok_or(GitError::InsufficientHistory {
            expected: 1,
            found: 0,
        })
    }

    /// The hash of `HEAD`
    pub fn last_commit(&self) -> Result<String, GitError> {
        self.last_commit_from_ref(HEAD)
    }

    /// Hashes of the commits in `start..end`, oldest first
    ///
    /// Both endpoints must resolve; this is checked before the log query
    /// is issued.
    pub fn range_between(&self, start: &str, end: &str) -> Result<Vec<String>, GitError> {
        check_reference(start)?;
        check_reference(end)?;
        self.ensure_revision(start)?;
        self.ensure_revision(end)?;

        let range = format!("{start}{}{end}", special::RANGE);
        let output = self.gateway.call(&[
            commands::LOG,
            &range,
            Formats::hash(),
            special::END_OF_REVISIONS,
        ])?;

        let hashes = Parser::parse_hashes_oldest_first(&output);
        validate_hashes("range_between", &hashes)?;
        Ok(hashes)
    }

    /// Fail with [`GitError::UnknownRevision`] unless `reference` resolves
    ///
    /// Takes no `--`: with it an unknown name is fatal rather than empty
    /// output. Resolved names are never checked against the working tree.
    fn ensure_revision(&self, reference: &str) -> Result<(), GitError> {
        let output = self
            .gateway
            .call(&[commands::REV_PARSE, flags::REVS_ONLY, reference])?;

        if output.trim().is_empty() {
            return Err(GitError::UnknownRevision(reference.to_string()));
        }
        Ok(())
    }
}
