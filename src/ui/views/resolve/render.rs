//! Rendering for ResolveView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::conflict::{Backend, ConflictFile, ConflictSession, FileSummary};
use crate::model::{ConflictHunk, Notification};
use crate::ui::{components, symbols, theme};

use super::{LineRole, ResolveView};

impl ResolveView {
    /// Render the resolve view
    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame,
        area: Rect,
        session: &ConflictSession<B>,
        selected: Option<&str>,
        notification: Option<&Notification>,
    ) {
        if session.is_done() {
            let title = Line::from(" Conflicts ").bold().green().centered();
            let block = components::bordered_block_with_notification(
                title,
                notification_line(notification, area.width),
            );
            let paragraph =
                components::empty_state("All conflicts resolved and staged!", Some("Press q to quit"))
                    .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let [files_area, content_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(area);

        self.render_file_list(frame, files_area, &session.summaries(), selected);

        let file = selected.and_then(|path| session.index().file(path));
        let focused = session
            .focused_hunk()
            .filter(|hunk| Some(hunk.file_path.as_str()) == selected);
        self.render_content(frame, content_area, file, focused, notification);
    }

    fn render_file_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        files: &[FileSummary],
        selected: Option<&str>,
    ) {
        let remaining: usize = files.iter().map(|f| f.hunk_count).sum();
        let title = Line::from(format!(" Files ({}) ", files.len()))
            .bold()
            .red()
            .centered();
        let block = components::bordered_block(title)
            .title_bottom(Line::from(format!(" {} conflict(s) left ", remaining)).centered());

        let inner_height = area.height.saturating_sub(2) as usize;
        let selected_index = files
            .iter()
            .position(|f| Some(f.path.as_str()) == selected)
            .unwrap_or(0);
        let offset = (selected_index + 1).saturating_sub(inner_height);

        let lines: Vec<Line> = files
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height)
            .map(|(idx, file)| file_line(file, Some(file.path.as_str()) == selected && idx == selected_index))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_content(
        &self,
        frame: &mut Frame,
        area: Rect,
        file: Option<&ConflictFile>,
        focused: Option<&ConflictHunk>,
        notification: Option<&Notification>,
    ) {
        let Some(file) = file else {
            let block = components::bordered_block_with_notification(
                Line::from(" Conflict ").bold().centered(),
                notification_line(notification, area.width),
            );
            let paragraph = components::empty_state("No file selected", None).block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let title = content_title(file, focused);
        let title_width = title.width() as u16;
        let block = components::bordered_block_with_notification(
            title,
            notification_line(notification, area.width.saturating_sub(title_width)),
        );

        let mut header: Vec<Line> = Vec::new();
        if let Some(err) = file.malformed() {
            header.push(Line::from(Span::styled(
                format!(" {} Malformed conflict markers: {}", symbols::status::MALFORMED, err),
                Style::default().fg(theme::file_list::MALFORMED),
            )));
            header.push(Line::from(Span::styled(
                " Fix the file with 'e', then stage it once the markers are gone.",
                Style::default().fg(theme::conflict::LINE_NUMBER),
            )));
        } else if file.is_resolved() {
            header.push(Line::from(Span::styled(
                format!(" {} No conflicts left. Press 'a' to stage.", symbols::status::RESOLVED),
                Style::default().fg(theme::file_list::RESOLVED),
            )));
        }

        let inner_height = (area.height.saturating_sub(2) as usize).saturating_sub(header.len());
        let offset = match focused {
            Some(hunk) => self.scroll_for(hunk.start_line, hunk.end_line, inner_height),
            None => 0,
        };

        let body = file
            .lines()
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height)
            .map(|(idx, text)| content_line(file, focused, idx + 1, text));

        let lines: Vec<Line> = header.into_iter().chain(body).collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn notification_line(notification: Option<&Notification>, width: u16) -> Option<Line<'static>> {
    let available = width.saturating_sub(4) as usize;
    notification
        .filter(|n| !n.is_expired())
        .map(|n| components::build_notification_title(n, Some(available)))
        .filter(|line| !line.spans.is_empty())
}

fn file_line(file: &FileSummary, is_selected: bool) -> Line<'static> {
    let marker = if is_selected {
        symbols::markers::SELECTED
    } else {
        "  "
    };

    let (status, color) = if file.malformed {
        (symbols::status::MALFORMED.to_string(), theme::file_list::MALFORMED)
    } else if file.hunk_count == 0 {
        (symbols::status::RESOLVED.to_string(), theme::file_list::RESOLVED)
    } else {
        (file.hunk_count.to_string(), theme::file_list::UNRESOLVED)
    };

    let mut line = Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("{} ", file.kind.short_label()),
            Style::default().fg(theme::file_list::KIND),
        ),
        Span::styled(format!("{:>2} ", status), Style::default().fg(color)),
        Span::raw(file.path.clone()),
    ]);

    if is_selected {
        line = line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        );
    }
    line
}

fn content_title(file: &ConflictFile, focused: Option<&ConflictHunk>) -> Line<'static> {
    let text = match focused {
        Some(hunk) => format!(
            " {} [conflict {} of {}] ",
            file.path(),
            hunk.index_in_file,
            file.remaining_count()
        ),
        None => format!(" {} ", file.path()),
    };
    Line::from(text).bold().centered()
}

fn content_line(
    file: &ConflictFile,
    focused: Option<&ConflictHunk>,
    line_no: usize,
    text: &str,
) -> Line<'static> {
    let owner = file.hunks().iter().find(|h| h.contains_line(line_no));
    let role = owner.map_or(LineRole::Plain, |h| LineRole::of(h, line_no));
    let is_focused = owner.is_some() && owner == focused;

    let gutter = if is_focused {
        symbols::markers::FOCUS_GUTTER
    } else {
        ' '
    };

    let mut style = match role {
        LineRole::Plain => Style::default(),
        LineRole::Marker => Style::default().fg(theme::conflict::MARKER),
        LineRole::Ours => Style::default().fg(theme::conflict::OURS),
        LineRole::Base => Style::default().fg(theme::conflict::BASE),
        LineRole::Theirs => Style::default().fg(theme::conflict::THEIRS),
    };
    if is_focused {
        style = style.add_modifier(Modifier::BOLD);
    } else if role != LineRole::Plain {
        style = style.add_modifier(Modifier::DIM);
    }

    Line::from(vec![
        Span::styled(
            gutter.to_string(),
            Style::default().fg(theme::conflict::FOCUS_GUTTER),
        ),
        Span::styled(
            format!("{:>4} ", line_no),
            Style::default().fg(theme::conflict::LINE_NUMBER),
        ),
        Span::styled(text.to_string(), style),
    ])
}
