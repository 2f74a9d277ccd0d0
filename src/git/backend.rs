//! [`Backend`] implementation over the git CLI and the working tree

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::conflict::{Backend, BackendError};
use crate::model::UnmergedPath;

use super::GitError;
use super::executor::GitExecutor;
use super::parser::parse_unmerged;

/// A git working tree
///
/// Paths handed to the [`Backend`] methods are relative to the repository
/// root, exactly as `git status` reports them.
#[derive(Debug, Clone)]
pub struct GitBackend {
    executor: GitExecutor,
    root: PathBuf,
}

impl GitBackend {
    /// Locate the working tree root the executor points into
    pub fn open(executor: GitExecutor) -> Result<Self, GitError> {
        let root = executor.toplevel()?;
        debug!(root = %root.display(), "git repository opened");
        // Pin every later command to the root so relative paths line up
        let executor = GitExecutor::with_repo_path(root.clone()).with_program(executor.program());
        Ok(Self { executor, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn executor(&self) -> &GitExecutor {
        &self.executor
    }

    /// Absolute location of a repository-relative path
    pub fn absolute_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Backend for GitBackend {
    fn list_unmerged(&self) -> Result<Vec<UnmergedPath>, BackendError> {
        let output = self.executor.status_raw()?;
        Ok(parse_unmerged(&output)?)
    }

    /// A path deleted on both sides has no working tree file; it reads as empty.
    fn read_file(&self, path: &str) -> Result<String, BackendError> {
        match fs::read_to_string(self.absolute_path(path)) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a temporary file in the same directory, then rename over
    /// the target. The file's permissions are carried over.
    fn write_file(&self, path: &str, contents: &str) -> Result<(), BackendError> {
        let target = self.absolute_path(path);
        let dir = target.parent().unwrap_or(&self.root);

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(&target).map_err(|e| e.error)?;
        debug!(path = %path, bytes = contents.len(), "file written");
        Ok(())
    }

    fn stage_path(&self, path: &str) -> Result<(), BackendError> {
        self.executor.add(path)?;
        Ok(())
    }
}
