//! Hash list parser (git log --format=%H)

use super::Parser;

impl Parser {
    /// Split `git log --format=%H` output into hashes, in emitted order
    ///
    /// Whitespace of any kind separates entries; blank lines are skipped.
    /// No validation happens here.
    pub fn parse_hashes(output: &str) -> Vec<String> {
        output.split_whitespace().map(str::to_string).collect()
    }

    /// Split newest-first log output into an oldest-first hash list
    pub fn parse_hashes_oldest_first(output: &str) -> Vec<String> {
        let mut hashes = Self::parse_hashes(output);
        hashes.reverse();
        hashes
    }
}
