//! In-memory backend for engine scenario tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;

use knot::conflict::{Backend, BackendError};
use knot::model::{UnmergedKind, UnmergedPath};

/// Working tree and index held in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    unmerged: RefCell<Vec<UnmergedPath>>,
    contents: RefCell<HashMap<String, String>>,
    staged: RefCell<Vec<String>>,
    failing_reads: RefCell<HashSet<String>>,
    failing_writes: RefCell<HashSet<String>>,
    failing_stages: RefCell<HashSet<String>>,
}

fn injected(op: &str, path: &str) -> BackendError {
    io::Error::other(format!("injected {op} failure for {path}")).into()
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a both-modified path with the given contents
    pub fn with_conflict(self, path: &str, contents: &str) -> Self {
        self.with_kind(path, UnmergedKind::BothModified, contents)
    }

    pub fn with_kind(self, path: &str, kind: UnmergedKind, contents: &str) -> Self {
        self.unmerged.borrow_mut().push(UnmergedPath::new(path, kind));
        self.set_contents(path, contents);
        self
    }

    /// Simulate an edit made outside the engine
    pub fn set_contents(&self, path: &str, contents: &str) {
        self.contents
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
    }

    pub fn contents(&self, path: &str) -> String {
        self.contents.borrow().get(path).cloned().unwrap_or_default()
    }

    pub fn staged(&self) -> Vec<String> {
        self.staged.borrow().clone()
    }

    /// Make every later read of `path` fail
    pub fn fail_reads(&self, path: &str) {
        self.failing_reads.borrow_mut().insert(path.to_string());
    }

    pub fn fail_writes(&self, path: &str) {
        self.failing_writes.borrow_mut().insert(path.to_string());
    }

    pub fn fail_stages(&self, path: &str) {
        self.failing_stages.borrow_mut().insert(path.to_string());
    }
}

impl Backend for MemoryBackend {
    fn list_unmerged(&self) -> Result<Vec<UnmergedPath>, BackendError> {
        let staged = self.staged.borrow();
        Ok(self
            .unmerged
            .borrow()
            .iter()
            .filter(|p| !staged.contains(&p.path))
            .cloned()
            .collect())
    }

    fn read_file(&self, path: &str) -> Result<String, BackendError> {
        if self.failing_reads.borrow().contains(path) {
            return Err(injected("read", path));
        }
        self.contents
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound).into())
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<(), BackendError> {
        if self.failing_writes.borrow().contains(path) {
            return Err(injected("write", path));
        }
        self.set_contents(path, contents);
        Ok(())
    }

    fn stage_path(&self, path: &str) -> Result<(), BackendError> {
        if self.failing_stages.borrow().contains(path) {
            return Err(injected("stage", path));
        }
        self.staged.borrow_mut().push(path.to_string());
        Ok(())
    }
}
