//! Placeholder text for panes with nothing to show

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Centered `title` one row below the top, with an optional dimmed `hint`
/// under it
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::default(), Line::from(title.to_string()).bold().centered()];
    if let Some(text) = hint {
        lines.extend([
            Line::default(),
            Line::from(text.to_string()).dark_gray().centered(),
        ]);
    }
    Paragraph::new(lines)
}
