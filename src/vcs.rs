//! Local version control bootstrap.
//!
//! Version control is modeled as a capability trait so the orchestrator can
//! be exercised in tests without a `git` binary or a real repository.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Capability interface over the local version control system.
pub trait VersionControl {
    /// Initializes a repository in `dir`.
    fn init(&self, dir: &Path) -> Result<()>;
    /// Stages everything in `dir` and creates a commit.
    fn commit_all(&self, dir: &Path, message: &str) -> Result<()>;
    /// Registers `url` as the remote called `name`.
    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()>;
    /// Pushes `branch` to `remote`, setting the upstream.
    fn push(&self, dir: &Path, remote: &str, branch: &str) -> Result<()>;
}

/// Implementation backed by the `git` binary on `PATH`.
pub struct GitCli;

impl GitCli {
    fn run(dir: &Path, args: &[&str]) -> Result<()> {
        let output = Command::new("git").current_dir(dir).args(args).output()?;
        if !output.status.success() {
            return Err(Error::GitCommandError {
                command: format!("git {}", args.join(" ")),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl VersionControl for GitCli {
    fn init(&self, dir: &Path) -> Result<()> {
        Self::run(dir, &["init"])
    }

    fn commit_all(&self, dir: &Path, message: &str) -> Result<()> {
        Self::run(dir, &["add", "."])?;
        Self::run(dir, &["commit", "-m", message])
    }

    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()> {
        Self::run(dir, &["remote", "add", name, url])
    }

    fn push(&self, dir: &Path, remote: &str, branch: &str) -> Result<()> {
        Self::run(dir, &["push", "-u", remote, branch])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().map(|o| o.status.success()).unwrap_or(false)
    }

    #[test]
    fn init_creates_a_repository() {
        if !git_available() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        GitCli.init(tmp.path()).unwrap();
        assert!(tmp.path().join(".git").exists());
    }

    #[test]
    fn commit_all_records_staged_files() {
        if !git_available() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        GitCli.init(tmp.path()).unwrap();
        // Commits need an identity; configure one locally for the test repo.
        GitCli::run(tmp.path(), &["config", "user.email", "tester@example.com"]).unwrap();
        GitCli::run(tmp.path(), &["config", "user.name", "Tester"]).unwrap();
        std::fs::write(tmp.path().join("README.md"), "# hello\n").unwrap();
        GitCli.commit_all(tmp.path(), "Initial commit").unwrap();
    }

    #[test]
    fn failed_command_reports_status_and_stderr() {
        if !git_available() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        // No repository yet, so adding a remote must fail.
        let err = GitCli.add_remote(tmp.path(), "origin", "https://example.com/x.git");
        assert!(err.is_err());
    }
}
