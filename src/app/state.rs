//! Application state and view management

use std::time::Duration;

use crate::conflict::{Backend, ConflictSession};
use crate::model::{DEFAULT_NOTIFICATION_TTL, Notification};
use crate::ui::views::ResolveView;

use super::editor::ExternalEditor;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Resolve,
    Help,
}

/// Host settings that do not come from the session itself
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Launcher for manual edits (None disables `e`)
    pub editor: Option<ExternalEditor>,
    /// How long notifications stay visible
    pub notification_ttl: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            editor: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

/// The main application state
pub struct App<B: Backend> {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// The conflict session being worked on
    pub session: ConflictSession<B>,
    /// Resolve view state
    pub resolve_view: ResolveView,
    /// File highlighted in the file list (target of `e` and `a`)
    pub(crate) selected_path: Option<String>,
    pub(crate) editor: Option<ExternalEditor>,
    pub(crate) notification_ttl: Duration,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Terminal must be cleared before the next draw (after an editor ran)
    pub(crate) needs_clear: bool,
}

impl<B: Backend> App<B> {
    /// Construct a new instance of [`App`] around an opened session
    pub fn new(session: ConflictSession<B>, options: AppOptions) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Resolve,
            previous_view: None,
            session,
            resolve_view: ResolveView::new(),
            selected_path: None,
            editor: options.editor,
            notification_ttl: options.notification_ttl,
            error_message: None,
            notification: None,
            needs_clear: false,
        };
        app.sync_selection();
        app
    }

    /// Path highlighted in the file list
    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    /// Move the file selection to the focused conflict's file
    pub(crate) fn follow_focus(&mut self) {
        if let Some(focus) = self.session.focused() {
            self.selected_path = Some(focus.path.clone());
        } else {
            self.sync_selection();
        }
    }

    /// Keep the selection pointing at a tracked file
    ///
    /// Falls back to the focused conflict's file, then the first file.
    pub(crate) fn sync_selection(&mut self) {
        let index = self.session.index();
        let still_tracked = self
            .selected_path
            .as_deref()
            .is_some_and(|p| index.file(p).is_some());
        if still_tracked {
            return;
        }
        self.selected_path = self
            .session
            .focused()
            .map(|f| f.path.clone())
            .or_else(|| index.files().first().map(|f| f.path().to_string()));
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or_default();
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Whether the terminal should be cleared before drawing; resets the flag
    pub fn take_needs_clear(&mut self) -> bool {
        std::mem::take(&mut self.needs_clear)
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
