//! Merge conflict resolution engine
//!
//! Parses conflict markers out of unmerged files, indexes every hunk of a
//! session in one navigable sequence, applies ours/theirs/manual resolutions
//! with write-through persistence, and stages files once no hunks remain.
//!
//! Hunks are addressed by `(path, index_in_file)` values resolved against the
//! current index. Every edit re-parses the owning file from scratch, so any
//! ordinal or line number obtained before an edit must be re-derived after it.

mod backend;
mod file;
mod index;
pub mod marker;
mod resolve;
mod session;
mod stage;
#[cfg(test)]
pub(crate) mod testing;

pub use backend::{Backend, BackendError};
pub use file::ConflictFile;
pub use index::{ConflictIndex, CursorPosition, FileSummary, HunkRef};
pub use marker::{MarkerError, parse_markers};
pub use resolve::{Resolved, Strategy};
pub use session::{ConflictSession, Resolution};
pub use stage::{SkipReason, StageOutcome, StageReport};

use thiserror::Error;

/// Errors raised by the conflict engine
#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Malformed conflict markers in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: MarkerError,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: BackendError,
    },

    #[error("Conflict #{index} not found in {path} (index is stale, refresh and retry)")]
    HunkNotFound { path: String, index: usize },

    #[error("Invalid resolution: {0}")]
    Strategy(String),

    #[error("{path} still has {remaining} unresolved conflict(s)")]
    NotFullyResolved { path: String, remaining: usize },

    #[error("Failed to stage {path}: {source}")]
    VersionControl {
        path: String,
        #[source]
        source: BackendError,
    },

    #[error("No conflicts to navigate")]
    NoConflicts,

    #[error("{0} is not part of this conflict session")]
    NotTracked(String),

    #[error("Failed to list unmerged paths: {0}")]
    Backend(#[source] BackendError),
}

impl ConflictError {
    /// Whether the caller should refresh its index and retry
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::HunkNotFound { .. } | Self::NotTracked(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = ConflictError::NotFullyResolved {
            path: "src/lib.rs".to_string(),
            remaining: 2,
        };
        assert_eq!(
            err.to_string(),
            "src/lib.rs still has 2 unresolved conflict(s)"
        );

        let err = ConflictError::HunkNotFound {
            path: "a.txt".to_string(),
            index: 3,
        };
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("a.txt"));
    }

    #[test]
    fn test_malformed_keeps_marker_source() {
        let err = ConflictError::Malformed {
            path: "a.txt".to_string(),
            source: MarkerError::Unterminated { start_line: 4 },
        };
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("conflict opened at line 4 is never closed")
        );
    }

    #[test]
    fn test_is_stale() {
        assert!(
            ConflictError::HunkNotFound {
                path: "a".to_string(),
                index: 1
            }
            .is_stale()
        );
        assert!(ConflictError::NotTracked("a".to_string()).is_stale());
        assert!(!ConflictError::NoConflicts.is_stale());
    }
}
