//! git output parser
//!
//! Parses the output from git commands into structured data.

mod hashes;
mod revision;


/// Parser for git command output
pub struct Parser;
