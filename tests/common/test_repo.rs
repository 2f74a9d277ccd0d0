//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing knot operations.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository on branch `main` in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Knot Test"]);
        repo.git(&["config", "user.email", "knot@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "core.autocrlf", "false"]);
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
        match self.git_result(args) {
            Ok(stdout) => stdout,
            Err(stderr) => panic!("git {:?} failed:\n{}", args, stderr),
        }
    }

    /// Execute a git command, returning Result instead of panicking.
    ///
    /// Use this when failure is expected (e.g. a conflicting merge).
    pub fn git_result(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("LC_ALL", "C")
            .output()
            .expect("Failed to execute git command");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(format!(
                "{}{}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ))
        }
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the repository.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Stage everything and commit.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// `git status --porcelain` output
    pub fn status(&self) -> String {
        self.git(&["status", "--porcelain"])
    }

    /// Create a conflicting merge of branch `topic` into `main`.
    ///
    /// Each `(path, base, ours, theirs)` entry is committed as `base`, then
    /// changed to `ours` on main and `theirs` on topic. A `None` side deletes
    /// the file on that branch.
    pub fn conflicting_merge(&self, files: &[(&str, &str, Option<&str>, Option<&str>)]) {
        for (path, base, _, _) in files {
            self.write_file(path, base);
        }
        self.commit_all("base");

        self.git(&["checkout", "-q", "-b", "topic"]);
        for (path, _, _, theirs) in files {
            self.apply_side(path, *theirs);
        }
        self.commit_all("topic");

        self.git(&["checkout", "-q", "main"]);
        for (path, _, ours, _) in files {
            self.apply_side(path, *ours);
        }
        self.commit_all("main");

        let merge = self.git_result(&["merge", "--no-edit", "topic"]);
        assert!(merge.is_err(), "merge should stop on conflicts");
    }

    fn apply_side(&self, path: &str, contents: Option<&str>) {
        match contents {
            Some(text) => self.write_file(path, text),
            None => {
                self.git(&["rm", "-q", path]);
            }
        }
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
