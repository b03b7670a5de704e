//! Author deduplication across a list of commits

use std::collections::HashSet;

use super::super::{CommandGateway, GitError};
use super::History;
use crate::model::{Author, Revision};

impl<G: CommandGateway> History<G> {
    /// Unique authors of `hashes`, in order of first appearance
    ///
    /// Email is the identity key: a later commit under the same email with
    /// a different display name does not add a second entry.
    pub fn author_names_emails_from_hashes<S>(&self, hashes: &[S]) -> Result<Vec<Author>, GitError>
    where
        S: AsRef<str> + Sync,
    {
        let revisions = self.revisions_from_hashes(hashes)?;
        Ok(unique_authors(&revisions))
    }
}

/// Reduce `revisions` to unique authors by email, keeping the first name seen
pub fn unique_authors(revisions: &[Revision]) -> Vec<Author> {
    let mut observed = HashSet::new();
    let mut authors = Vec::new();

    for revision in revisions {
        if observed.insert(revision.author_email.as_str()) {
            authors.push(revision.author());
        }
    }

    authors
}
