//! Resolve View - file list plus the selected file's conflict hunks
//!
//! Left pane lists every unmerged file with its remaining conflict count;
//! right pane shows the selected file with the focused conflict highlighted.

mod input;
mod render;

use std::cell::Cell;

use crate::conflict::Strategy;
use crate::model::ConflictHunk;

/// Action returned by ResolveView input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveAction {
    /// No action needed
    None,
    NextHunk,
    PreviousHunk,
    NextFile,
    PreviousFile,
    /// Replace the focused conflict with one side
    Resolve(Strategy),
    /// Open the selected file in the external editor
    EditFile,
    /// Stage the selected file
    StageFile,
    /// Stage every resolved file
    StageAll,
    /// Rebuild the session from the repository
    Reload,
}

/// Role of a single line relative to the conflict hunks of its file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineRole {
    Plain,
    Marker,
    Ours,
    Base,
    Theirs,
}

impl LineRole {
    /// Classify 1-based `line` against `hunk`
    pub(crate) fn of(hunk: &ConflictHunk, line: usize) -> Self {
        if !hunk.contains_line(line) {
            return Self::Plain;
        }
        let ours_end = hunk.base_divider_line.unwrap_or(hunk.divider_line);
        if line == hunk.start_line
            || line == hunk.end_line
            || line == hunk.divider_line
            || Some(line) == hunk.base_divider_line
        {
            Self::Marker
        } else if line < ours_end {
            Self::Ours
        } else if line < hunk.divider_line {
            Self::Base
        } else {
            Self::Theirs
        }
    }
}

/// View state for conflict resolution
#[derive(Debug, Default)]
pub struct ResolveView {
    /// First visible content line, kept between frames so the viewport only
    /// moves when the focused conflict leaves it
    scroll_offset: Cell<usize>,
}

impl ResolveView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll offset that keeps lines `[start, end]` (1-based) visible
    ///
    /// Leaves the previous offset alone when the range already fits, and
    /// prefers showing the start of a range taller than the viewport.
    pub(crate) fn scroll_for(&self, start: usize, end: usize, visible_height: usize) -> usize {
        if visible_height == 0 {
            return 0;
        }
        const CONTEXT: usize = 2;

        let mut offset = self.scroll_offset.get();
        let first = start.saturating_sub(1);
        let last = end.saturating_sub(1);

        if first < offset || end - start + 1 > visible_height {
            offset = first.saturating_sub(CONTEXT);
        } else if last >= offset + visible_height {
            offset = (last + CONTEXT + 1).saturating_sub(visible_height).min(first);
        }

        self.scroll_offset.set(offset);
        offset
    }

    pub(crate) fn reset_scroll(&self) {
        self.scroll_offset.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::parse_markers;

    fn hunk(lines: &[&str]) -> ConflictHunk {
        parse_markers("f", lines).unwrap().remove(0)
    }

    #[test]
    fn test_line_roles_two_way() {
        let h = hunk(&["x", "<<<<<<< HEAD", "o", "=======", "t", ">>>>>>> b"]);
        let roles: Vec<LineRole> = (1..=6).map(|l| LineRole::of(&h, l)).collect();
        assert_eq!(
            roles,
            vec![
                LineRole::Plain,
                LineRole::Marker,
                LineRole::Ours,
                LineRole::Marker,
                LineRole::Theirs,
                LineRole::Marker,
            ]
        );
    }

    #[test]
    fn test_line_roles_diff3() {
        let h = hunk(&[
            "<<<<<<< HEAD",
            "o",
            "||||||| base",
            "b",
            "=======",
            "t",
            ">>>>>>> x",
        ]);
        assert_eq!(LineRole::of(&h, 2), LineRole::Ours);
        assert_eq!(LineRole::of(&h, 3), LineRole::Marker);
        assert_eq!(LineRole::of(&h, 4), LineRole::Base);
        assert_eq!(LineRole::of(&h, 6), LineRole::Theirs);
        assert_eq!(LineRole::of(&h, 8), LineRole::Plain);
    }

    #[test]
    fn test_scroll_keeps_range_visible() {
        let view = ResolveView::new();
        // fits at the top
        assert_eq!(view.scroll_for(3, 7, 10), 0);
        // below the viewport: bottom aligned with context
        assert_eq!(view.scroll_for(20, 24, 10), 16);
        // already visible: unchanged
        assert_eq!(view.scroll_for(18, 22, 10), 16);
        // above the viewport: top aligned with context
        assert_eq!(view.scroll_for(5, 6, 10), 2);
    }

    #[test]
    fn test_scroll_tall_range_shows_start() {
        let view = ResolveView::new();
        assert_eq!(view.scroll_for(40, 80, 10), 37);
        view.reset_scroll();
        assert_eq!(view.scroll_for(1, 3, 0), 0);
    }
}
