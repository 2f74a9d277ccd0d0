//! A caller-owned resolution session
//!
//! Binds a backend, the conflict index built from it, and a navigation
//! cursor. Every mutating call takes `&mut self`, so at most one operation on
//! any path is in flight at a time.

use tracing::{debug, info};

use crate::model::ConflictHunk;

use super::backend::Backend;
use super::file::ConflictFile;
use super::index::{ConflictIndex, CursorPosition, FileSummary, HunkRef};
use super::resolve::{Resolved, Strategy};
use super::stage::StageReport;
use super::ConflictError;

/// Owned summary of a resolution performed through the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The hunk as it was before the edit, in its terminal state
    pub hunk: ConflictHunk,
    /// Hunks left in the owning file
    pub remaining: usize,
}

impl From<Resolved<'_>> for Resolution {
    fn from(resolved: Resolved<'_>) -> Self {
        let remaining = resolved.remaining();
        Self {
            hunk: resolved.hunk,
            remaining,
        }
    }
}

pub struct ConflictSession<B: Backend> {
    backend: B,
    index: ConflictIndex,
    cursor: CursorPosition,
    focused: Option<HunkRef>,
}

impl<B: Backend> ConflictSession<B> {
    /// List unmerged paths, index them and focus the first hunk
    pub fn open(backend: B) -> Result<Self, ConflictError> {
        let index = Self::load(&backend)?;
        let mut session = Self {
            backend,
            index,
            cursor: CursorPosition::START,
            focused: None,
        };
        session.refocus();
        info!(
            files = session.index.files().len(),
            hunks = session.index.total_hunks(),
            "conflict session opened"
        );
        Ok(session)
    }

    fn load(backend: &B) -> Result<ConflictIndex, ConflictError> {
        let unmerged = backend.list_unmerged().map_err(ConflictError::Backend)?;
        ConflictIndex::build(&unmerged, backend)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn index(&self) -> &ConflictIndex {
        &self.index
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn focused(&self) -> Option<&HunkRef> {
        self.focused.as_ref()
    }

    pub fn focused_hunk(&self) -> Option<&ConflictHunk> {
        let focus = self.focused.as_ref()?;
        self.index.hunk(&focus.path, focus.index_in_file)
    }

    pub fn focused_file(&self) -> Option<&ConflictFile> {
        let focus = self.focused.as_ref()?;
        self.index.file(&focus.path)
    }

    pub fn summaries(&self) -> Vec<FileSummary> {
        self.index.summaries()
    }

    /// Every file has been staged or dropped
    pub fn is_done(&self) -> bool {
        self.index.is_empty()
    }

    /// Focus the first hunk after the cursor (wrapping)
    pub fn next(&mut self) -> Result<&HunkRef, ConflictError> {
        let target = self.index.next(self.cursor)?;
        Ok(self.set_focus(target))
    }

    /// Focus the last hunk before the cursor (wrapping)
    pub fn previous(&mut self) -> Result<&HunkRef, ConflictError> {
        let target = self.index.previous(self.cursor)?;
        Ok(self.set_focus(target))
    }

    pub fn focus(&mut self, path: &str, index_in_file: usize) -> Result<&HunkRef, ConflictError> {
        let position =
            self.index
                .position_of(path, index_in_file)
                .ok_or_else(|| ConflictError::HunkNotFound {
                    path: path.to_string(),
                    index: index_in_file,
                })?;
        Ok(self.set_focus(HunkRef {
            path: path.to_string(),
            index_in_file,
            position,
        }))
    }

    /// Resolve the focused hunk with one of its sides
    ///
    /// On success the next hunk in reading order becomes focused.
    pub fn resolve_focused(&mut self, strategy: Strategy) -> Result<Resolution, ConflictError> {
        let target = self.focused.clone().ok_or(ConflictError::NoConflicts)?;
        let result = self
            .index
            .resolve(&self.backend, &target.path, target.index_in_file, strategy)
            .map(Resolution::from);
        self.after_resolve(&target, result)
    }

    /// Resolve the focused hunk with caller-supplied lines
    pub fn resolve_focused_manual(&mut self, lines: &[String]) -> Result<Resolution, ConflictError> {
        let target = self.focused.clone().ok_or(ConflictError::NoConflicts)?;
        let result = self
            .index
            .resolve_manual(&self.backend, &target.path, target.index_in_file, lines)
            .map(Resolution::from);
        self.after_resolve(&target, result)
    }

    fn after_resolve(
        &mut self,
        target: &HunkRef,
        result: Result<Resolution, ConflictError>,
    ) -> Result<Resolution, ConflictError> {
        match &result {
            Ok(_) => {
                // The resolved range now holds plain lines; step back one so a
                // hunk starting right there is still strictly ahead.
                self.cursor = target.position.just_before();
                self.refocus();
            }
            Err(err) if err.is_stale() => self.revalidate_focus(),
            Err(_) => {}
        }
        result
    }

    /// Stage one file and re-validate the focus
    pub fn stage(&mut self, path: &str) -> Result<(), ConflictError> {
        self.index.stage(&self.backend, path)?;
        self.revalidate_focus();
        Ok(())
    }

    /// Stage every fully resolved file
    pub fn stage_all(&mut self) -> StageReport {
        let report = self.index.stage_all(&self.backend);
        self.revalidate_focus();
        report
    }

    /// Rebuild the whole index from the backend
    ///
    /// Paths the backend no longer reports as unmerged are dropped. On error
    /// the previous index is kept.
    pub fn reload(&mut self) -> Result<(), ConflictError> {
        self.index = Self::load(&self.backend)?;
        self.revalidate_focus();
        info!(
            files = self.index.files().len(),
            hunks = self.index.total_hunks(),
            "conflict session reloaded"
        );
        Ok(())
    }

    /// Re-read one file after it was edited outside the session
    ///
    /// Returns the number of hunks left in it.
    pub fn refresh_path(&mut self, path: &str) -> Result<usize, ConflictError> {
        let remaining = self
            .index
            .refresh_file(path, &self.backend)
            .map(ConflictFile::remaining_count)?;
        self.revalidate_focus();
        Ok(remaining)
    }

    fn set_focus(&mut self, target: HunkRef) -> &HunkRef {
        debug!(path = %target.path, hunk = target.index_in_file, "focus");
        self.cursor = target.position;
        self.focused.insert(target)
    }

    fn refocus(&mut self) {
        match self.index.next(self.cursor) {
            Ok(target) => {
                self.set_focus(target);
            }
            Err(_) => self.focused = None,
        }
    }

    /// Keep the focused `(path, ordinal)` when it still exists, otherwise
    /// move on from the cursor
    fn revalidate_focus(&mut self) {
        let kept = self.focused.as_ref().and_then(|focus| {
            self.index
                .position_of(&focus.path, focus.index_in_file)
                .map(|position| HunkRef {
                    path: focus.path.clone(),
                    index_in_file: focus.index_in_file,
                    position,
                })
        });
        match kept {
            Some(target) => {
                self.set_focus(target);
            }
            None => {
                if self.cursor.file >= self.index.files().len() {
                    self.cursor = CursorPosition::START;
                }
                self.refocus();
            }
        }
    }
}
