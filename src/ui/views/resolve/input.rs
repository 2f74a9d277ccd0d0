//! Input handling for ResolveView

use crossterm::event::KeyEvent;

use crate::conflict::Strategy;
use crate::keys;

use super::{ResolveAction, ResolveView};

impl ResolveView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ResolveAction {
        if keys::is_refresh_key(&key) {
            self.reset_scroll();
            return ResolveAction::Reload;
        }

        match key.code {
            k if keys::is_next_hunk(k) => ResolveAction::NextHunk,
            k if keys::is_prev_hunk(k) => ResolveAction::PreviousHunk,
            keys::NEXT_FILE => {
                self.reset_scroll();
                ResolveAction::NextFile
            }
            keys::PREV_FILE => {
                self.reset_scroll();
                ResolveAction::PreviousFile
            }
            keys::RESOLVE_OURS => ResolveAction::Resolve(Strategy::Ours),
            keys::RESOLVE_THEIRS => ResolveAction::Resolve(Strategy::Theirs),
            keys::EDIT_FILE => ResolveAction::EditFile,
            keys::STAGE_FILE => ResolveAction::StageFile,
            keys::STAGE_ALL => ResolveAction::StageAll,
            _ => ResolveAction::None,
        }
    }
}
