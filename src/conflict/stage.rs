//! Staging fully resolved files

use std::fmt;

use tracing::{info, warn};

use super::backend::Backend;
use super::index::ConflictIndex;
use super::ConflictError;

/// Why a file was left unstaged by a bulk stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Hunks remain
    Unresolved { remaining: usize },
    /// Markers did not parse, the file cannot be checked
    Malformed,
}

/// Per-file outcome of [`ConflictIndex::stage_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Staged,
    Skipped(SkipReason),
    /// The backend refused to stage the file
    Failed { message: String },
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staged => write!(f, "staged"),
            Self::Skipped(SkipReason::Unresolved { remaining }) => {
                write!(f, "skipped, {} unresolved conflict(s)", remaining)
            }
            Self::Skipped(SkipReason::Malformed) => write!(f, "skipped, malformed conflict markers"),
            Self::Failed { message } => write!(f, "failed, {}", message),
        }
    }
}

/// Outcomes of a bulk stage, in session file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    results: Vec<(String, StageOutcome)>,
}

impl StageReport {
    pub fn get(&self, path: &str) -> Option<&StageOutcome> {
        self.results
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StageOutcome)> + '_ {
        self.results.iter().map(|(p, o)| (p.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn staged_count(&self) -> usize {
        self.count(|o| matches!(o, StageOutcome::Staged))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, StageOutcome::Skipped(_)))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, StageOutcome::Failed { .. }))
    }

    /// Every attempted file was staged
    pub fn all_staged(&self) -> bool {
        self.staged_count() == self.len()
    }

    fn count(&self, pred: impl Fn(&StageOutcome) -> bool) -> usize {
        self.results.iter().filter(|(_, o)| pred(o)).count()
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, outcome)) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", path, outcome)?;
        }
        Ok(())
    }
}

impl ConflictIndex {
    /// Stage `path` if it has no hunks left
    ///
    /// Never stages a file with live or unparseable markers. A staged file is
    /// dropped from the session.
    pub fn stage<B: Backend>(&mut self, backend: &B, path: &str) -> Result<(), ConflictError> {
        let file = self
            .file(path)
            .ok_or_else(|| ConflictError::NotTracked(path.to_string()))?;

        if let Some(err) = file.malformed() {
            return Err(ConflictError::Malformed {
                path: path.to_string(),
                source: err.clone(),
            });
        }
        let remaining = file.remaining_count();
        if remaining > 0 {
            return Err(ConflictError::NotFullyResolved {
                path: path.to_string(),
                remaining,
            });
        }

        backend
            .stage_path(path)
            .map_err(|source| ConflictError::VersionControl {
                path: path.to_string(),
                source,
            })?;
        self.remove_file(path);
        info!(path = %path, "file staged");
        Ok(())
    }

    /// Try to stage every tracked file independently
    ///
    /// Unresolved and malformed files are skipped, backend failures are
    /// recorded; neither stops the remaining files from being attempted.
    pub fn stage_all<B: Backend>(&mut self, backend: &B) -> StageReport {
        let paths: Vec<String> = self.files().iter().map(|f| f.path().to_string()).collect();
        let mut report = StageReport::default();

        for path in paths {
            let outcome = match self.stage(backend, &path) {
                Ok(()) => StageOutcome::Staged,
                Err(ConflictError::NotFullyResolved { remaining, .. }) => {
                    StageOutcome::Skipped(SkipReason::Unresolved { remaining })
                }
                Err(ConflictError::Malformed { .. }) => StageOutcome::Skipped(SkipReason::Malformed),
                Err(err) => {
                    warn!(path = %path, error = %err, "staging failed");
                    StageOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };
            report.results.push((path, outcome));
        }

        info!(
            staged = report.staged_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            "bulk stage finished"
        );
        report
    }
}
