//! Error and notification message components
//!
//! Both render as a label badge followed by the message text.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};
use crate::ui::theme;

/// Separator between a block title and a notification
const TITLE_SEPARATOR: &str = " | ";
const ELLIPSIS: char = '…';

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => theme::notification::SUCCESS,
        NotificationKind::Info => theme::notification::INFO,
        NotificationKind::Warning => theme::notification::WARNING,
    }
}

/// Keep at most `width` characters, marking a cut with an ellipsis
fn fit(message: &str, width: usize) -> Option<String> {
    if message.chars().count() <= width {
        return Some(message.to_string());
    }
    let keep = width.checked_sub(1).filter(|&n| n > 0)?;
    let mut out: String = message.chars().take(keep).collect();
    out.push(ELLIPSIS);
    Some(out)
}

/// Error banner line: red `Error:` badge plus the message in red
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Notification suffix for a block title, ` | Kind: message `
///
/// Truncated to `max_width` columns when given; empty when not even one
/// character of the message would fit.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let label = notification.kind.label();
    let color = kind_color(notification.kind);
    // separator, label and its space, trailing space
    let fixed = TITLE_SEPARATOR.len() + label.len() + 2;

    let message = match max_width {
        Some(max) => match fit(&notification.message, max.saturating_sub(fixed)) {
            Some(text) => text,
            None => return Line::default(),
        },
        None => notification.message.clone(),
    };

    Line::from(vec![
        Span::raw(TITLE_SEPARATOR),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(format!("{} ", message), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_build_error_line() {
        let line = build_error_line("Failed to stage a.txt");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Error: ");
        assert_eq!(line.spans[1].content, " Failed to stage a.txt ");
    }

    #[test]
    fn test_notification_title_fits() {
        let n = Notification::success("Staged a.txt");
        let line = build_notification_title(&n, Some(80));
        assert_eq!(text(&line), " | Success: Staged a.txt ");
    }

    #[test]
    fn test_notification_title_unbounded() {
        let n = Notification::info("Reloaded: 2 file(s), 3 conflict(s)");
        assert_eq!(
            text(&build_notification_title(&n, None)),
            " | Info: Reloaded: 2 file(s), 3 conflict(s) "
        );
    }

    #[test]
    fn test_notification_title_truncates() {
        let n =
            Notification::warning("src/deeply/nested/file.rs still has 3 unresolved conflict(s)");
        let line = build_notification_title(&n, Some(24));
        let rendered = text(&line);
        assert!(rendered.ends_with("… "));
        assert_eq!(rendered.chars().count(), 24);
    }

    #[test]
    fn test_notification_title_too_narrow() {
        let n = Notification::info("Reloaded");
        assert!(build_notification_title(&n, Some(8)).spans.is_empty());
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 3).as_deref(), Some("abc"));
        assert_eq!(fit("abcdef", 4).as_deref(), Some("abc…"));
        assert_eq!(fit("abcdef", 1), None);
    }
}
