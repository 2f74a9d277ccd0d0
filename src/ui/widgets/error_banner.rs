//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message on the last content row, just above a status bar
/// of `status_bar_height` rows
pub fn render_error_banner(frame: &mut Frame, error: &str, status_bar_height: u16) {
    let area = frame.area();
    let reserved = status_bar_height + 2;
    if area.height < reserved + 1 || area.width < 5 {
        return;
    }
    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - reserved,
        width: area.width - 4,
        height: 1,
    };

    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), error_area);
}
