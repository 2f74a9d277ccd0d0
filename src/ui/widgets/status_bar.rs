//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

fn hint_span(hint: &KeyHint) -> Span<'static> {
    Span::styled(
        format!(" [{}] {} ", hint.key, hint.label),
        Style::default().fg(Color::Black).bg(hint.color),
    )
}

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(hint_span(hint));
    }

    Line::from(spans)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(hint_span(hint));
    }

    Line::from(spans)
}

/// Render a status bar into `area`, with an optional prefix badge
pub fn render_status_bar(frame: &mut Frame, area: Rect, prefix: Option<String>, hints: &[KeyHint]) {
    if area.height == 0 {
        return;
    }
    let line = match prefix {
        Some(text) => build_status_bar_with_prefix(
            vec![Span::styled(
                format!(" {} ", text),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )],
            hints,
        ),
        None => build_status_bar(hints),
    };
    frame.render_widget(Paragraph::new(line), area);
}
