//! Per-file conflict model

use std::ops::Range;

use crate::model::{ConflictHunk, UnmergedKind};

use super::marker::{MarkerError, parse_markers};

/// Terminator that followed a line on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LineEnding {
    /// Last line of a file without a final newline
    Missing,
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "",
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Split `contents` into lines, keeping track of each line's own terminator
fn split_lines(contents: &str) -> impl Iterator<Item = (&str, LineEnding)> {
    contents.split_inclusive('\n').map(|chunk| {
        if let Some(body) = chunk.strip_suffix("\r\n") {
            (body, LineEnding::CrLf)
        } else if let Some(body) = chunk.strip_suffix('\n') {
            (body, LineEnding::Lf)
        } else {
            (chunk, LineEnding::Missing)
        }
    })
}

/// Which lines take the place of a hunk's marker range
#[derive(Debug, Clone, Copy)]
pub(crate) enum Replacement<'a> {
    /// The ours section, copied byte for byte
    Ours,
    /// The theirs section, copied byte for byte
    Theirs,
    /// Caller-supplied lines, terminated like the surrounding file
    Lines(&'a [String]),
}

impl Replacement<'_> {
    pub(crate) fn line_count(&self, hunk: &ConflictHunk) -> usize {
        match self {
            Self::Ours => hunk.ours_lines.len(),
            Self::Theirs => hunk.theirs_lines.len(),
            Self::Lines(lines) => lines.len(),
        }
    }
}

/// A file the backend reports as unmerged, with its parsed hunks
///
/// `hunks` is always derived from `lines` by a full re-parse; it is never
/// patched in place. If parsing fails the file keeps its lines, has no hunks,
/// and records the error in `malformed`. Every line remembers the terminator
/// it had on disk so mixed line endings survive a write.
#[derive(Debug, Clone)]
pub struct ConflictFile {
    path: String,
    kind: UnmergedKind,
    lines: Vec<String>,
    endings: Vec<LineEnding>,
    hunks: Vec<ConflictHunk>,
    malformed: Option<MarkerError>,
    /// Terminator of the first terminated line, used for new lines
    default_ending: LineEnding,
}

impl ConflictFile {
    /// Build the model from raw file contents
    pub fn from_contents(path: impl Into<String>, kind: UnmergedKind, contents: &str) -> Self {
        let mut file = Self {
            path: path.into(),
            kind,
            lines: Vec::new(),
            endings: Vec::new(),
            hunks: Vec::new(),
            malformed: None,
            default_ending: LineEnding::Lf,
        };
        file.set_contents(contents);
        file
    }

    /// Replace the contents and re-parse
    pub(crate) fn set_contents(&mut self, contents: &str) {
        let (lines, endings): (Vec<String>, Vec<LineEnding>) = split_lines(contents)
            .map(|(line, ending)| (line.to_string(), ending))
            .unzip();
        self.default_ending = endings
            .iter()
            .copied()
            .find(|ending| *ending != LineEnding::Missing)
            .unwrap_or_default();
        self.lines = lines;
        self.endings = endings;
        self.reparse();
    }

    fn reparse(&mut self) {
        match parse_markers(&self.path, &self.lines) {
            Ok(hunks) => {
                self.hunks = hunks;
                self.malformed = None;
            }
            Err(err) => {
                self.hunks.clear();
                self.malformed = Some(err);
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> UnmergedKind {
        self.kind
    }

    /// Current content, one entry per line, terminators stripped
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Parsed hunks in file order
    pub fn hunks(&self) -> &[ConflictHunk] {
        &self.hunks
    }

    /// Look up a hunk by its 1-based ordinal
    pub fn hunk(&self, index_in_file: usize) -> Option<&ConflictHunk> {
        index_in_file
            .checked_sub(1)
            .and_then(|idx| self.hunks.get(idx))
    }

    /// Parse error from the last re-parse, if any
    pub fn malformed(&self) -> Option<&MarkerError> {
        self.malformed.as_ref()
    }

    /// Number of unresolved hunks
    pub fn remaining_count(&self) -> usize {
        self.hunks.len()
    }

    /// No hunks left and markers parsed cleanly
    pub fn is_resolved(&self) -> bool {
        self.hunks.is_empty() && self.malformed.is_none()
    }

    /// Serialise the lines, each with the terminator it was read with
    pub fn contents(&self) -> String {
        let mut out = String::new();
        self.push_range(&mut out, 0..self.lines.len());
        out
    }

    /// Whether `contents` is byte-identical to what this model would write
    pub(crate) fn matches_contents(&self, contents: &str) -> bool {
        let ours = self.lines.iter().map(String::as_str);
        split_lines(contents).eq(ours.zip(self.endings.iter().copied()))
    }

    /// Serialised contents with the hunk's marker range replaced
    ///
    /// Lines outside the hunk and a kept side are copied with their own
    /// terminators. Manual lines take the end marker's terminator. When the
    /// end marker was the unterminated last line, so is the new last line.
    pub(crate) fn contents_with_replacement(
        &self,
        hunk: &ConflictHunk,
        replacement: Replacement<'_>,
    ) -> String {
        // 0-based indices of the marker lines
        let start = hunk.start_line - 1;
        let end = hunk.end_line - 1;
        let ours_end = hunk.base_divider_line.unwrap_or(hunk.divider_line) - 1;
        let end_ending = self.endings[end];

        let mut out = String::new();
        self.push_range(&mut out, 0..start);
        match replacement {
            Replacement::Ours => self.push_range(&mut out, start + 1..ours_end),
            Replacement::Theirs => self.push_range(&mut out, hunk.divider_line..end),
            Replacement::Lines(lines) => {
                let ending = match end_ending {
                    LineEnding::Missing => self.default_ending,
                    ending => ending,
                };
                for line in lines {
                    out.push_str(line);
                    out.push_str(ending.as_str());
                }
            }
        }
        self.push_range(&mut out, end + 1..self.lines.len());

        if end_ending == LineEnding::Missing {
            let trimmed = out
                .strip_suffix("\r\n")
                .or_else(|| out.strip_suffix('\n'))
                .map(str::len);
            if let Some(len) = trimmed {
                out.truncate(len);
            }
        }
        out
    }

    fn push_range(&self, out: &mut String, range: Range<usize>) {
        for (line, ending) in self.lines[range.clone()].iter().zip(&self.endings[range]) {
            out.push_str(line);
            out.push_str(ending.as_str());
        }
    }
}
