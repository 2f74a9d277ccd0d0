//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::{App, View};
use crate::conflict::Backend;
use crate::keys::{self, HintContext};
use crate::model::Notification;
use crate::ui::widgets::{render_error_banner, render_help_panel, render_status_bar};

/// Rows reserved for the key hint bar
const STATUS_BAR_HEIGHT: u16 = 1;

impl<B: Backend> App<B> {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        let [main_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(frame.area());

        match self.current_view {
            View::Resolve => self.render_resolve_view(frame, main_area, notification),
            View::Help => render_help_panel(frame, main_area),
        }

        let hints = keys::current_hints(self.current_view, &self.build_hint_context());
        render_status_bar(frame, status_area, self.status_prefix(), &hints);

        // Errors are always shown prominently, above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }
    }

    fn render_resolve_view(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
    ) {
        self.resolve_view.render(
            frame,
            area,
            &self.session,
            self.selected_path(),
            notification,
        );
    }

    /// Build HintContext from current App state
    fn build_hint_context(&self) -> HintContext {
        HintContext {
            has_focus: self.session.focused().is_some(),
            has_stageable: self
                .session
                .index()
                .files()
                .iter()
                .any(|f| f.is_resolved()),
            has_editor: self.editor.is_some(),
        }
    }

    fn status_prefix(&self) -> Option<String> {
        if self.current_view != View::Resolve || self.session.is_done() {
            return None;
        }
        let remaining = self.session.index().total_hunks();
        Some(format!("{} conflict(s) left", remaining))
    }
}
