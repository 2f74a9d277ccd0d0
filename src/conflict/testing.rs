//! In-memory backend for unit tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;

use crate::model::UnmergedPath;

use super::backend::{Backend, BackendError};

#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    unmerged: RefCell<Vec<UnmergedPath>>,
    contents: RefCell<HashMap<String, String>>,
    staged: RefCell<Vec<String>>,
    writes: RefCell<usize>,
    failing_reads: RefCell<HashSet<String>>,
    failing_writes: RefCell<HashSet<String>>,
    failing_stages: RefCell<HashSet<String>>,
    reads_fail_after_write: RefCell<HashSet<String>>,
}

fn injected(op: &str, path: &str) -> BackendError {
    Box::new(io::Error::other(format!("injected {op} failure for {path}")))
}

impl MemoryBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_conflict(self, path: &str, contents: &str) -> Self {
        self.unmerged
            .borrow_mut()
            .push(UnmergedPath::both_modified(path));
        self.set_contents(path, contents);
        self
    }

    pub(crate) fn set_contents(&self, path: &str, contents: &str) {
        self.contents
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
    }

    pub(crate) fn contents(&self, path: &str) -> Option<String> {
        self.contents.borrow().get(path).cloned()
    }

    pub(crate) fn staged(&self) -> Vec<String> {
        self.staged.borrow().clone()
    }

    pub(crate) fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub(crate) fn fail_reads(&self, path: &str) {
        self.failing_reads.borrow_mut().insert(path.to_string());
    }

    pub(crate) fn fail_writes(&self, path: &str) {
        self.failing_writes.borrow_mut().insert(path.to_string());
    }

    /// Reads of `path` start failing once it has been written
    pub(crate) fn fail_reads_after_write(&self, path: &str) {
        self.reads_fail_after_write
            .borrow_mut()
            .insert(path.to_string());
    }

    pub(crate) fn fail_stages(&self, path: &str) {
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
            .ok_or_else(|| Box::new(io::Error::from(io::ErrorKind::NotFound)) as BackendError)
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<(), BackendError> {
        if self.failing_writes.borrow().contains(path) {
            return Err(injected("write", path));
        }
        *self.writes.borrow_mut() += 1;
        self.set_contents(path, contents);
        if self.reads_fail_after_write.borrow().contains(path) {
            self.fail_reads(path);
        }
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
