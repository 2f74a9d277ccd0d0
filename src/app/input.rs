//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::conflict::Backend;
use crate::keys;
use crate::ui::views::ResolveAction;

impl<B: Backend> App<B> {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT | keys::ESC => {
                self.handle_quit();
                true
            }
            keys::HELP => {
                if self.current_view == View::Help {
                    self.go_back();
                } else {
                    self.go_to_view(View::Help);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Resolve {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Resolve => {
                let action = self.resolve_view.handle_key(key);
                self.handle_resolve_action(action);
            }
            View::Help => {
                // Help view only uses global keys
            }
        }
    }

    fn handle_resolve_action(&mut self, action: ResolveAction) {
        match action {
            ResolveAction::None => {}
            ResolveAction::NextHunk => self.next_hunk(),
            ResolveAction::PreviousHunk => self.previous_hunk(),
            ResolveAction::NextFile => self.select_file(1),
            ResolveAction::PreviousFile => self.select_file(-1),
            ResolveAction::Resolve(strategy) => self.resolve_focused(strategy),
            ResolveAction::EditFile => self.edit_selected(),
            ResolveAction::StageFile => self.stage_selected(),
            ResolveAction::StageAll => self.stage_all(),
            ResolveAction::Reload => self.reload(),
        }
    }
}
