//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing history queries.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Default author for commits made by [`TestRepo::commit_file`]
pub const AUTHOR_NAME: &str = "No one";
pub const AUTHOR_EMAIL: &str = "noone@nowhere.com";

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
/// The initial branch is always `master`.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/master"]);
        repo.git(&["config", "user.name", "Test Committer"]);
        repo.git(&["config", "user.email", "committer@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Create an empty file and commit it as the default author.
    ///
    /// The subject defaults to the file name. `body` requires `subject`.
    pub fn commit_file(&self, filename: &str, subject: Option<&str>, body: Option<&str>) -> String {
        let author = format!("{AUTHOR_NAME} <{AUTHOR_EMAIL}>");
        let message = match (subject, body) {
            (None, None) => filename.to_string(),
            (Some(subject), None) => subject.to_string(),
            (Some(subject), Some(body)) => format!("{subject}\n\n{body}"),
            (None, Some(_)) => panic!("didn't expect message with empty subject"),
        };
        self.commit_with(filename, &message, &author)
    }

    /// Create an empty file and commit it with the given author
    /// (`"Name <email>"`), using the file name as the subject.
    pub fn commit_as(&self, filename: &str, author: &str) -> String {
        self.commit_with(filename, filename, author)
    }

    fn commit_with(&self, filename: &str, message: &str, author: &str) -> String {
        std::fs::write(self.dir.path().join(filename), "").expect("Failed to write file");
        self.git(&["add", filename]);
        self.git(&["commit", "-q", "-m", message, "--author", author]);
        self.rev_parse("HEAD")
    }

    /// Resolve a reference to its full hash.
    pub fn rev_parse(&self, reference: &str) -> String {
        self.git(&["rev-parse", reference]).trim().to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
