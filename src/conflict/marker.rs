//! Conflict marker parser
//!
//! Turns the lines of a conflicted file into an ordered list of hunks.
//! Recognised markers (conflict-marker-size 7):
//!
//! ```text
//! <<<<<<< ours-label
//! ours lines
//! ||||||| base-label      (optional, diff3 style)
//! base lines
//! =======
//! theirs lines
//! >>>>>>> theirs-label
//! ```

use thiserror::Error;

use crate::model::{ConflictHunk, HunkState};

const START_MARKER: &str = "<<<<<<<";
const BASE_MARKER: &str = "|||||||";
const DIVIDER_MARKER: &str = "=======";
const END_MARKER: &str = ">>>>>>>";

/// Structural problems in a file's conflict markers
///
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("conflict start at line {line} is nested in the conflict opened at line {open_line}")]
    NestedStart { line: usize, open_line: usize },

    #[error("conflict end at line {line} has no matching start")]
    UnexpectedEnd { line: usize },

    #[error("conflict end at line {line} comes before the divider of the conflict opened at line {start_line}")]
    MissingDivider { line: usize, start_line: usize },

    #[error("conflict opened at line {start_line} is never closed")]
    Unterminated { start_line: usize },
}

impl MarkerError {
    /// Line where the problem was detected
    pub fn line(&self) -> usize {
        match self {
            Self::NestedStart { line, .. }
            | Self::UnexpectedEnd { line }
            | Self::MissingDivider { line, .. } => *line,
            Self::Unterminated { start_line } => *start_line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    Base,
    Divider,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ours,
    Base,
    Theirs,
}

/// A hunk whose end marker has not been seen yet
#[derive(Debug)]
struct OpenHunk {
    start_line: usize,
    base_divider_line: Option<usize>,
    divider_line: usize,
    ours_label: String,
    section: Section,
    ours: Vec<String>,
    base: Vec<String>,
    theirs: Vec<String>,
}

impl OpenHunk {
    fn new(start_line: usize, ours_label: String) -> Self {
        Self {
            start_line,
            base_divider_line: None,
            divider_line: 0,
            ours_label,
            section: Section::Ours,
            ours: Vec::new(),
            base: Vec::new(),
            theirs: Vec::new(),
        }
    }

    fn push(&mut self, line: &str) {
        let target = match self.section {
            Section::Ours => &mut self.ours,
            Section::Base => &mut self.base,
            Section::Theirs => &mut self.theirs,
        };
        target.push(line.to_string());
    }

    fn close(
        self,
        path: &str,
        index_in_file: usize,
        end_line: usize,
        theirs_label: String,
    ) -> ConflictHunk {
        ConflictHunk {
            file_path: path.to_string(),
            index_in_file,
            start_line: self.start_line,
            base_divider_line: self.base_divider_line,
            divider_line: self.divider_line,
            end_line,
            ours_label: self.ours_label,
            theirs_label,
            ours_lines: self.ours,
            theirs_lines: self.theirs,
            base_lines: self.base,
            state: HunkState::Unresolved,
        }
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn classify(line: &str) -> Option<Marker> {
    if line.starts_with(START_MARKER) {
        Some(Marker::Start)
    } else if line.starts_with(BASE_MARKER) {
        Some(Marker::Base)
    } else if line == DIVIDER_MARKER {
        Some(Marker::Divider)
    } else if line.starts_with(END_MARKER) {
        Some(Marker::End)
    } else {
        None
    }
}

/// Text after a 7-character marker, e.g. "HEAD" in `<<<<<<< HEAD`
fn marker_label(line: &str) -> String {
    line.get(START_MARKER.len()..)
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Parse the conflict hunks of one file
///
/// `path` is recorded on every hunk. The returned hunks are ordered by
/// `start_line`; a file without markers yields an empty list. A `=======`
/// outside a hunk and a `|||||||` outside the ours section are plain content.
pub fn parse_markers<S: AsRef<str>>(
    path: &str,
    lines: &[S],
) -> Result<Vec<ConflictHunk>, MarkerError> {
    let mut hunks = Vec::new();
    let mut open: Option<OpenHunk> = None;

    for (idx, raw) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = strip_cr(raw.as_ref());

        open = match (classify(line), open.take()) {
            (Some(Marker::Start), None) => Some(OpenHunk::new(line_no, marker_label(line))),
            (Some(Marker::Start), Some(hunk)) => {
                return Err(MarkerError::NestedStart {
                    line: line_no,
                    open_line: hunk.start_line,
                });
            }
            (Some(Marker::End), None) => {
                return Err(MarkerError::UnexpectedEnd { line: line_no });
            }
            (Some(Marker::End), Some(hunk)) if hunk.section == Section::Theirs => {
                let index_in_file = hunks.len() + 1;
                hunks.push(hunk.close(path, index_in_file, line_no, marker_label(line)));
                None
            }
            (Some(Marker::End), Some(hunk)) => {
                return Err(MarkerError::MissingDivider {
                    line: line_no,
                    start_line: hunk.start_line,
                });
            }
            (Some(Marker::Base), Some(mut hunk)) if hunk.section == Section::Ours => {
                hunk.base_divider_line = Some(line_no);
                hunk.section = Section::Base;
                Some(hunk)
            }
            (Some(Marker::Divider), Some(mut hunk)) if hunk.section != Section::Theirs => {
                hunk.divider_line = line_no;
                hunk.section = Section::Theirs;
                Some(hunk)
            }
            (_, Some(mut hunk)) => {
                hunk.push(line);
                Some(hunk)
            }
            (_, None) => None,
        };
    }

    if let Some(hunk) = open {
        return Err(MarkerError::Unterminated {
            start_line: hunk.start_line,
        });
    }

    Ok(hunks)
}

/// Whether any line is a start or end conflict marker
pub fn has_conflict_markers<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().any(|line| {
        matches!(
            classify(strip_cr(line.as_ref())),
            Some(Marker::Start | Marker::End)
        )
    })
}
