//! Hash list validation
//!
//! Log output is free text. Anything that is about to be trusted as a list
//! of commit hashes goes through here first.

use std::sync::LazyLock;

use regex::Regex;

use super::GitError;

static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("Invalid hex regex"));

/// Check that every entry of `hashes` is a non-empty run of hex digits
///
/// `source_name` names the collection in the error so the failing producer
/// can be identified. An empty slice is valid.
pub fn validate_hashes<S: AsRef<str>>(
    source_name: &'static str,
    hashes: &[S],
) -> Result<(), GitError> {
    if hashes.iter().all(|h| is_hex(h.as_ref())) {
        return Ok(());
    }

    Err(GitError::InvalidHashes {
        source_name,
        hashes: hashes.iter().map(|h| h.as_ref().to_string()).collect(),
    })
}

/// Whether `token` is a non-empty run of hex digits
pub fn is_hex(token: &str) -> bool {
    HEX_REGEX.is_match(token)
}
