//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Selected row in lists
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

/// Colors for the conflict content pane
pub mod conflict {
    use super::*;

    /// `<<<<<<<`, `|||||||`, `=======`, `>>>>>>>` lines
    pub const MARKER: Color = Color::DarkGray;
    /// Our side of a conflict
    pub const OURS: Color = Color::Green;
    /// Merge base (diff3 style)
    pub const BASE: Color = Color::Blue;
    /// Their side of a conflict
    pub const THEIRS: Color = Color::Magenta;
    /// Gutter bar next to the focused conflict
    pub const FOCUS_GUTTER: Color = Color::Yellow;
    /// Line numbers and hints
    pub const LINE_NUMBER: Color = Color::DarkGray;
}

/// Colors for the file list pane
pub mod file_list {
    use super::*;

    /// Two-letter unmerged status code
    pub const KIND: Color = Color::Cyan;
    /// Remaining conflict count
    pub const UNRESOLVED: Color = Color::Red;
    /// No conflicts left
    pub const RESOLVED: Color = Color::Green;
    /// Markers could not be parsed
    pub const MALFORMED: Color = Color::Yellow;
}

/// Notification badge and text colors
pub mod notification {
    use super::*;

    pub const SUCCESS: Color = Color::Green;
    pub const INFO: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
}
