//! Revision (commit) data model

/// One commit as reported by the detailed log format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Revision {
    /// Full commit hash (hex)
    pub hash: String,

    /// Email of the original author
    pub author_email: String,

    /// Name of the original author
    pub author_name: String,

    /// Email of whoever committed the change
    pub committer_email: String,

    /// Name of whoever committed the change
    pub committer_name: String,

    /// First line of the commit message
    pub subject: String,

    /// Remaining lines of the commit message, empty if none
    pub message: String,
}

impl Revision {
    /// The author of this revision
    pub fn author(&self) -> super::Author {
        super::Author::new(&self.author_name, &self.author_email)
    }
}
