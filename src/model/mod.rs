//! Data models for gitrev
//!
//! Plain, read-only values derived from git output.

mod author;
mod revision;

pub use author::Author;
pub use revision::Revision;
