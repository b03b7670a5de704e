//! Raw commit message retrieval

use super::super::constants::{commands, flags, special};
use super::super::template::Formats;
use super::super::{CommandGateway, GitError};
use super::{History, check_reference};

impl<G: CommandGateway> History<G> {
    /// Raw message of the most recent commit in `start..HEAD`
    ///
    /// Only one message is returned even when the range holds several
    /// commits; use [`History::range_to_here_bodies`] for all of them.
    /// Empty when the range is empty.
    pub fn range_to_here_raw_body(&self, start: &str) -> Result<String, GitError> {
        check_reference(start)?;

        let range = format!("{start}{}", special::RANGE);
        self.gateway.call(&[
            commands::LOG,
            &range,
            Formats::raw_body(),
            flags::MAX_COUNT,
            "1",
            special::END_OF_REVISIONS,
        ])
    }

    /// Raw messages of every commit in `start..HEAD`, oldest first
    pub fn range_to_here_bodies(&self, start: &str) -> Result<Vec<String>, GitError> {
        self.range_to_here(start)?
            .iter()
            .map(|hash| {
                let single = format!("{hash}{}", special::SINGLE_COMMIT_SUFFIX);
                self.gateway.call(&[
                    commands::LOG,
                    &single,
                    Formats::message(),
                    special::END_OF_REVISIONS,
                ])
            })
            .collect()
    }
}
