//! Session-wide index of conflict hunks
//!
//! Holds every unmerged file of a session in backend order and a flat,
//! globally ordered sequence of their hunks used for navigation.

use tracing::{debug, info, warn};

use crate::model::{ConflictHunk, UnmergedKind, UnmergedPath};

use super::backend::Backend;
use super::file::ConflictFile;
use super::ConflictError;

/// A point in the flat hunk order: `(file order, 1-based line)`
///
/// Ordered lexicographically. [`CursorPosition::START`] precedes every hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CursorPosition {
    /// Index of the file in the session's file order
    pub file: usize,
    /// Line within that file (0 = before the first line)
    pub line: usize,
}

impl CursorPosition {
    pub const START: Self = Self { file: 0, line: 0 };

    pub fn new(file: usize, line: usize) -> Self {
        Self { file, line }
    }

    /// The position immediately before this one within the same file
    pub(crate) fn just_before(self) -> Self {
        Self {
            file: self.file,
            line: self.line.saturating_sub(1),
        }
    }
}

/// A hunk address produced by navigation
///
/// Plain value: valid until the owning file is next modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkRef {
    pub path: String,
    pub index_in_file: usize,
    /// Position of the hunk's start marker
    pub position: CursorPosition,
}

/// Read-only per-file projection for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: String,
    pub kind: UnmergedKind,
    pub hunk_count: usize,
    pub malformed: bool,
}

/// Slot pair into `files` and that file's `hunks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlatEntry {
    file: usize,
    hunk: usize,
}

/// All conflict files of a session plus the flat hunk order
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    files: Vec<ConflictFile>,
    flat: Vec<FlatEntry>,
}

impl ConflictIndex {
    /// Read and parse every unmerged path
    ///
    /// All or nothing: the first read failure aborts the build. Files whose
    /// markers do not parse are kept (flagged as malformed) with no hunks.
    pub fn build<B: Backend>(unmerged: &[UnmergedPath], backend: &B) -> Result<Self, ConflictError> {
        let mut files = Vec::with_capacity(unmerged.len());

        for entry in unmerged {
            let contents =
                backend
                    .read_file(&entry.path)
                    .map_err(|source| ConflictError::FileRead {
                        path: entry.path.clone(),
                        source,
                    })?;
            let file = ConflictFile::from_contents(entry.path.clone(), entry.kind, &contents);
            if let Some(err) = file.malformed() {
                warn!(path = %entry.path, error = %err, "conflict markers could not be parsed");
            }
            files.push(file);
        }

        let index = Self::from_files(files);
        info!(
            files = index.files.len(),
            hunks = index.total_hunks(),
            "conflict index built"
        );
        Ok(index)
    }

    /// Assemble an index from already parsed files, keeping their order
    pub fn from_files(files: Vec<ConflictFile>) -> Self {
        let mut index = Self {
            files,
            flat: Vec::new(),
        };
        index.rebuild_flat();
        index
    }

    fn rebuild_flat(&mut self) {
        self.flat = self
            .files
            .iter()
            .enumerate()
            .flat_map(|(file, f)| (0..f.hunks().len()).map(move |hunk| FlatEntry { file, hunk }))
            .collect();
    }

    /// Files in backend order
    pub fn files(&self) -> &[ConflictFile] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&ConflictFile> {
        self.files.iter().find(|f| f.path() == path)
    }

    pub(crate) fn file_slot(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|f| f.path() == path)
    }

    /// Look up a hunk by `(path, 1-based ordinal)`
    pub fn hunk(&self, path: &str, index_in_file: usize) -> Option<&ConflictHunk> {
        self.file(path).and_then(|f| f.hunk(index_in_file))
    }

    /// Every indexed hunk in navigation order
    pub fn flat_hunks(&self) -> impl Iterator<Item = &ConflictHunk> + '_ {
        self.flat.iter().map(|e| self.entry_hunk(*e))
    }

    /// Number of hunks across all files
    pub fn total_hunks(&self) -> usize {
        self.flat.len()
    }

    /// No files are tracked any more
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Hunks currently indexed for `path` (0 for unknown paths)
    pub fn remaining_count(&self, path: &str) -> usize {
        self.file(path).map_or(0, ConflictFile::remaining_count)
    }

    /// Per-file projection for the host
    pub fn summaries(&self) -> Vec<FileSummary> {
        self.files
            .iter()
            .map(|f| FileSummary {
                path: f.path().to_string(),
                kind: f.kind(),
                hunk_count: f.remaining_count(),
                malformed: f.malformed().is_some(),
            })
            .collect()
    }

    /// Cursor position of a hunk's start marker
    pub fn position_of(&self, path: &str, index_in_file: usize) -> Option<CursorPosition> {
        let slot = self.file_slot(path)?;
        let hunk = self.files[slot].hunk(index_in_file)?;
        Some(CursorPosition::new(slot, hunk.start_line))
    }

    fn entry_hunk(&self, entry: FlatEntry) -> &ConflictHunk {
        &self.files[entry.file].hunks()[entry.hunk]
    }

    fn entry_position(&self, entry: FlatEntry) -> CursorPosition {
        CursorPosition::new(entry.file, self.entry_hunk(entry).start_line)
    }

    fn entry_ref(&self, entry: FlatEntry) -> HunkRef {
        let hunk = self.entry_hunk(entry);
        HunkRef {
            path: hunk.file_path.clone(),
            index_in_file: hunk.index_in_file,
            position: self.entry_position(entry),
        }
    }

    /// First hunk strictly after `cursor`, wrapping to the first hunk
    pub fn next(&self, cursor: CursorPosition) -> Result<HunkRef, ConflictError> {
        self.flat
            .iter()
            .find(|e| self.entry_position(**e) > cursor)
            .or_else(|| self.flat.first())
            .map(|e| self.entry_ref(*e))
            .ok_or(ConflictError::NoConflicts)
    }

    /// Last hunk strictly before `cursor`, wrapping to the last hunk
    pub fn previous(&self, cursor: CursorPosition) -> Result<HunkRef, ConflictError> {
        self.flat
            .iter()
            .rev()
            .find(|e| self.entry_position(**e) < cursor)
            .or_else(|| self.flat.last())
            .map(|e| self.entry_ref(*e))
            .ok_or(ConflictError::NoConflicts)
    }

    /// Re-read one file from the backend and re-parse it
    ///
    /// A file that ends up with zero hunks stays tracked so it can be staged.
    /// On a read failure the previous model is kept.
    pub fn refresh_file<B: Backend>(
        &mut self,
        path: &str,
        backend: &B,
    ) -> Result<&ConflictFile, ConflictError> {
        let slot = self
            .file_slot(path)
            .ok_or_else(|| ConflictError::NotTracked(path.to_string()))?;
        let contents = backend
            .read_file(path)
            .map_err(|source| ConflictError::FileRead {
                path: path.to_string(),
                source,
            })?;
        self.replace_contents(slot, &contents);
        Ok(&self.files[slot])
    }

    pub(crate) fn replace_contents(&mut self, slot: usize, contents: &str) {
        let file = &mut self.files[slot];
        file.set_contents(contents);
        if let Some(err) = file.malformed() {
            warn!(path = %file.path(), error = %err, "conflict markers could not be parsed");
        }
        debug!(
            path = %file.path(),
            remaining = file.remaining_count(),
            "conflict file re-parsed"
        );
        self.rebuild_flat();
    }

    /// Drop a file from the session (after it was staged)
    pub(crate) fn remove_file(&mut self, path: &str) -> Option<ConflictFile> {
        let slot = self.file_slot(path)?;
        let file = self.files.remove(slot);
        self.rebuild_flat();
        Some(file)
    }
}
