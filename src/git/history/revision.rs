//! Revision assembly: hashes to structured revisions

use std::slice;

use rayon::prelude::*;

use super::super::constants::{commands, special};
use super::super::parser::Parser;
use super::super::template::Formats;
use super::super::validate::validate_hashes;
use super::super::{CommandGateway, GitError};
use super::{History, check_reference};
use crate::model::Revision;

impl<G: CommandGateway> History<G> {
    /// Fetch and parse the detailed log entry for one commit
    pub fn revision_from_hash(&self, hash: &str) -> Result<Revision, GitError> {
        check_reference(hash)?;

        let single = format!("{hash}{}", special::SINGLE_COMMIT_SUFFIX);
        let output = self.gateway.call(&[
            commands::LOG,
            &single,
            Formats::detailed(),
            special::END_OF_REVISIONS,
        ])?;

        let revision = Parser::parse_revision(&output)?;
        validate_hashes("revision_from_hash", slice::from_ref(&revision.hash))?;
        Ok(revision)
    }

    /// Fetch revisions for every hash, preserving input order
    ///
    /// All or nothing: the first failing query fails the whole batch.
    /// With `jobs > 1` the queries run on a bounded worker pool that is
    /// joined before this returns.
    pub fn revisions_from_hashes<S>(&self, hashes: &[S]) -> Result<Vec<Revision>, GitError>
    where
        S: AsRef<str> + Sync,
    {
        let jobs = self.options.jobs.min(hashes.len());
        if jobs <= 1 {
            return hashes
                .iter()
                .map(|h| self.revision_from_hash(h.as_ref()))
                .collect();
        }

        tracing::debug!(jobs, commits = hashes.len(), "fetching revisions in parallel");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|idx| format!("gitrev fetch {idx}"))
            .build()?;

        pool.install(|| {
            hashes
                .par_iter()
                .map(|h| self.revision_from_hash(h.as_ref()))
                .collect()
        })
    }
}
