//! Applying a resolution to a single hunk

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::model::{ConflictHunk, HunkState};

use super::backend::Backend;
use super::file::{ConflictFile, Replacement};
use super::index::ConflictIndex;
use super::marker::has_conflict_markers;
use super::ConflictError;

/// Which side of a hunk survives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Ours,
    Theirs,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ours => "ours",
            Self::Theirs => "theirs",
        }
    }

    fn resolved_state(self) -> HunkState {
        match self {
            Self::Ours => HunkState::ResolvedOurs,
            Self::Theirs => HunkState::ResolvedTheirs,
        }
    }

    fn replacement(self) -> Replacement<'static> {
        match self {
            Self::Ours => Replacement::Ours,
            Self::Theirs => Replacement::Theirs,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConflictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ours" => Ok(Self::Ours),
            "theirs" => Ok(Self::Theirs),
            other => Err(ConflictError::Strategy(format!(
                "unknown strategy '{}' (expected 'ours' or 'theirs')",
                other
            ))),
        }
    }
}

/// Result of a successful resolution
#[derive(Debug)]
pub struct Resolved<'a> {
    /// The hunk as it was before the edit, now in a terminal state
    pub hunk: ConflictHunk,
    /// The owning file after re-parsing
    pub file: &'a ConflictFile,
}

impl Resolved<'_> {
    /// Hunks left in the owning file
    pub fn remaining(&self) -> usize {
        self.file.remaining_count()
    }
}

impl ConflictIndex {
    /// Replace hunk `hunk_index` of `path` with one of its sides
    ///
    /// The chosen side's lines are kept verbatim and all marker lines of the
    /// hunk are removed. Once the new contents are written through the
    /// backend the model is re-parsed from them, so every other hunk of the
    /// file gets fresh line numbers and ordinals.
    pub fn resolve<B: Backend>(
        &mut self,
        backend: &B,
        path: &str,
        hunk_index: usize,
        strategy: Strategy,
    ) -> Result<Resolved<'_>, ConflictError> {
        let hunk = self.locate(path, hunk_index)?;
        self.apply(
            backend,
            hunk,
            strategy.replacement(),
            strategy.resolved_state(),
        )
    }

    /// Replace hunk `hunk_index` of `path` with caller-supplied lines
    ///
    /// The lines must not contain start or end conflict markers.
    pub fn resolve_manual<B: Backend>(
        &mut self,
        backend: &B,
        path: &str,
        hunk_index: usize,
        lines: &[String],
    ) -> Result<Resolved<'_>, ConflictError> {
        if has_conflict_markers(lines) {
            return Err(ConflictError::Strategy(
                "manual resolution must not contain conflict markers".to_string(),
            ));
        }
        let hunk = self.locate(path, hunk_index)?;
        self.apply(
            backend,
            hunk,
            Replacement::Lines(lines),
            HunkState::ResolvedManual,
        )
    }

    fn locate(&self, path: &str, hunk_index: usize) -> Result<ConflictHunk, ConflictError> {
        self.hunk(path, hunk_index)
            .cloned()
            .ok_or_else(|| ConflictError::HunkNotFound {
                path: path.to_string(),
                index: hunk_index,
            })
    }

    fn apply<B: Backend>(
        &mut self,
        backend: &B,
        hunk: ConflictHunk,
        replacement: Replacement<'_>,
        state: HunkState,
    ) -> Result<Resolved<'_>, ConflictError> {
        let path = hunk.file_path.clone();
        let slot = self
            .file_slot(&path)
            .ok_or_else(|| ConflictError::NotTracked(path.clone()))?;

        let on_disk = backend
            .read_file(&path)
            .map_err(|source| ConflictError::FileRead {
                path: path.clone(),
                source,
            })?;
        if !self.files()[slot].matches_contents(&on_disk) {
            warn!(path = %path, "file changed outside the session, re-indexing");
            self.replace_contents(slot, &on_disk);
            return Err(ConflictError::HunkNotFound {
                path,
                index: hunk.index_in_file,
            });
        }

        let updated = self.files()[slot].contents_with_replacement(&hunk, replacement);
        backend
            .write_file(&path, &updated)
            .map_err(|source| ConflictError::Write {
                path: path.clone(),
                source,
            })?;
        info!(
            path = %path,
            hunk = hunk.index_in_file,
            state = ?state,
            kept_lines = replacement.line_count(&hunk),
            "conflict resolved"
        );

        // re-parse from what was written, not from a second read
        self.replace_contents(slot, &updated);
        let file = &self.files()[slot];
        if file.remaining_count() == 0 {
            info!(path = %path, "no conflicts left, file is ready to stage");
        }

        Ok(Resolved {
            hunk: hunk.into_resolved(state),
            file,
        })
    }
}
