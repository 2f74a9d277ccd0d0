//! External editor launcher used for manual resolution

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::git::{GitBackend, GitExecutor};

/// Opens repository files in the user's editor
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    executor: GitExecutor,
    root: PathBuf,
    /// Overrides git's editor choice when set
    command: Option<String>,
}

impl ExternalEditor {
    pub fn new(executor: GitExecutor, root: PathBuf, command: Option<String>) -> Self {
        Self {
            executor,
            root,
            command,
        }
    }

    /// Editor for the working tree a [`GitBackend`] operates on
    pub fn for_backend(backend: &GitBackend, command: Option<String>) -> Self {
        Self::new(
            backend.executor().clone(),
            backend.root().to_path_buf(),
            command,
        )
    }

    /// Open a repository-relative path and wait for the editor to exit
    ///
    /// The caller must disable raw mode before calling this method.
    pub fn open(&self, path: &str) -> io::Result<ExitStatus> {
        self.executor
            .open_in_editor(&self.root.join(path), self.command.as_deref())
    }
}
