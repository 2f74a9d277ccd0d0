//! Conflict hunk data model

/// Resolution state of a conflict hunk
///
/// Hunks in a live index are always `Unresolved`. The resolved states only
/// appear on the hunk value handed back by a resolution, after its markers
/// have been removed from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HunkState {
    #[default]
    Unresolved,
    ResolvedOurs,
    ResolvedTheirs,
    /// Replaced with caller-supplied lines
    ResolvedManual,
}

impl HunkState {
    /// Whether a resolution has been applied
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// One `<<<<<<<` / `=======` / `>>>>>>>` region of a conflicted file
///
/// All line numbers are 1-based and refer to the owning file's line array at
/// the time the hunk was parsed. They are invalidated by any edit to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictHunk {
    /// Path of the owning file
    pub file_path: String,
    /// 1-based ordinal among the hunks of the file
    pub index_in_file: usize,
    /// Line of the `<<<<<<<` marker
    pub start_line: usize,
    /// Line of the diff3 `|||||||` marker, if the hunk has a base section
    pub base_divider_line: Option<usize>,
    /// Line of the `=======` marker
    pub divider_line: usize,
    /// Line of the `>>>>>>>` marker
    pub end_line: usize,
    /// Text after the start marker (e.g. "HEAD")
    pub ours_label: String,
    /// Text after the end marker (e.g. "topic")
    pub theirs_label: String,
    pub ours_lines: Vec<String>,
    pub theirs_lines: Vec<String>,
    /// Merge-base section of a diff3 hunk (display only)
    pub base_lines: Vec<String>,
    pub state: HunkState,
}

impl ConflictHunk {
    /// Number of file lines covered by the hunk, markers included
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Whether the 1-based `line` lies inside the hunk (markers included)
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    /// Whether the hunk carries a diff3 base section
    pub fn has_base(&self) -> bool {
        self.base_divider_line.is_some()
    }

    /// Consume the hunk, marking it with a terminal state
    pub fn into_resolved(mut self, state: HunkState) -> Self {
        self.state = state;
        self
    }
}
