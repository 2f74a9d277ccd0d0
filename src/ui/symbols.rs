//! UI symbols (markers, status glyphs)

/// List and gutter markers
pub mod markers {
    /// Prefix of the selected row in the file list
    pub const SELECTED: &str = "> ";
    /// Gutter bar for lines of the focused conflict (▌)
    pub const FOCUS_GUTTER: char = '▌';
}

/// Per-file status glyphs
pub mod status {
    /// File has no conflicts left (✓)
    pub const RESOLVED: char = '✓';
    /// Conflict markers could not be parsed
    pub const MALFORMED: char = '!';
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_marker_width() {
        assert_eq!(markers::SELECTED.chars().count(), 2);
    }

    #[test]
    fn test_status_glyphs_differ() {
        assert_ne!(status::RESOLVED, status::MALFORMED);
    }
}
