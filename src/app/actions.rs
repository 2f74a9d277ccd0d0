//! Session operations triggered from the UI

use tracing::{info, warn};

use crate::conflict::{Backend, ConflictError, Strategy};
use crate::model::Notification;

use super::state::App;

/// Suspend TUI mode (raw mode off, leave alternate screen).
///
/// Returns a scope guard that restores TUI mode on drop.
/// Use this before launching the external editor.
fn suspend_tui() -> impl Drop {
    use crossterm::execute;
    use crossterm::terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    };
    use std::io::stdout;

    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, Clear(ClearType::All));

    scopeguard::guard((), |_| {
        let _ = enable_raw_mode();
        let _ = execute!(stdout(), EnterAlternateScreen);
    })
}

impl<B: Backend> App<B> {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg).with_ttl(self.notification_ttl));
    }

    /// Set an info notification (cyan)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg).with_ttl(self.notification_ttl));
    }

    /// Set a warning notification (yellow)
    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg).with_ttl(self.notification_ttl));
    }

    /// Set an error message (displayed in error area)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub(crate) fn next_hunk(&mut self) {
        let result = self.session.next().map(|_| ());
        self.after_navigation(result);
    }

    pub(crate) fn previous_hunk(&mut self) {
        let result = self.session.previous().map(|_| ());
        self.after_navigation(result);
    }

    fn after_navigation(&mut self, result: Result<(), ConflictError>) {
        match result {
            Ok(()) => self.follow_focus(),
            Err(ConflictError::NoConflicts) => self.notify_info("No conflicts left"),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Move the file selection by `delta`, wrapping; focuses the file's
    /// first conflict if it has one
    pub(crate) fn select_file(&mut self, delta: isize) {
        let paths: Vec<String> = self
            .session
            .index()
            .files()
            .iter()
            .map(|f| f.path().to_string())
            .collect();
        if paths.is_empty() {
            return;
        }

        let current = self
            .selected_path
            .as_deref()
            .and_then(|p| paths.iter().position(|candidate| candidate == p))
            .unwrap_or(0);
        let len = paths.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        let path = paths[next].clone();

        if self.session.index().remaining_count(&path) > 0 {
            // cannot fail: the file has at least one hunk
            let _ = self.session.focus(&path, 1);
        }
        self.selected_path = Some(path);
    }

    // ── Resolution ───────────────────────────────────────────────────

    pub(crate) fn resolve_focused(&mut self, strategy: Strategy) {
        let Some(path) = self.session.focused().map(|f| f.path.clone()) else {
            self.notify_info("No conflict selected");
            return;
        };

        match self.session.resolve_focused(strategy) {
            Ok(resolution) if resolution.remaining == 0 => {
                // keep the finished file selected so `a` stages it
                self.selected_path = Some(path.clone());
                self.notify_success(format!(
                    "{} has no conflicts left, press 'a' to stage",
                    path
                ));
            }
            Ok(resolution) => {
                self.follow_focus();
                self.notify_success(format!(
                    "Kept {} in {} ({} left)",
                    strategy, path, resolution.remaining
                ));
            }
            Err(e) if e.is_stale() => {
                self.follow_focus();
                self.notify_warning(e.to_string());
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Open the selected file in the external editor, then re-read it
    pub(crate) fn edit_selected(&mut self) {
        let Some(path) = self.selected_path.clone() else {
            self.notify_info("No file selected");
            return;
        };
        let Some(editor) = self.editor.as_ref() else {
            self.notify_warning("No editor available");
            return;
        };

        let status = {
            let _guard = suspend_tui();
            editor.open(&path)
        };
        self.needs_clear = true;

        match status {
            Ok(status) if !status.success() => {
                warn!(path = %path, %status, "editor exited unsuccessfully");
                self.notify_warning(format!("Editor exited with {}", status));
            }
            Ok(_) => {}
            Err(e) => {
                self.set_error(format!("Failed to launch editor: {}", e));
                return;
            }
        }

        match self.session.refresh_path(&path) {
            Ok(remaining) => {
                let malformed = self
                    .session
                    .index()
                    .file(&path)
                    .and_then(|f| f.malformed())
                    .map(|err| err.to_string());
                if let Some(err) = malformed {
                    self.notify_warning(format!("{}: {}", path, err));
                } else if remaining == 0 {
                    self.notify_success(format!(
                        "{} has no conflicts left, press 'a' to stage",
                        path
                    ));
                } else {
                    self.notify_info(format!("{} conflict(s) left in {}", remaining, path));
                }
                if remaining > 0 {
                    self.follow_focus();
                }
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    // ── Staging ──────────────────────────────────────────────────────

    pub(crate) fn stage_selected(&mut self) {
        let Some(path) = self.selected_path.clone() else {
            self.notify_info("No file selected");
            return;
        };

        match self.session.stage(&path) {
            Ok(()) => {
                self.sync_selection();
                if self.session.is_done() {
                    self.notify_success("All conflicts resolved and staged");
                } else {
                    self.notify_success(format!("Staged {}", path));
                }
            }
            Err(e @ (ConflictError::NotFullyResolved { .. } | ConflictError::Malformed { .. })) => {
                self.notify_warning(e.to_string());
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub(crate) fn stage_all(&mut self) {
        let report = self.session.stage_all();
        self.sync_selection();

        if report.is_empty() {
            self.notify_info("Nothing to stage");
            return;
        }

        let staged = report.staged_count();
        let skipped = report.skipped_count();
        if let Some((path, outcome)) = report
            .iter()
            .find(|(_, o)| matches!(o, crate::conflict::StageOutcome::Failed { .. }))
        {
            self.set_error(format!("{}: {}", path, outcome));
        }

        if skipped > 0 {
            self.notify_warning(format!(
                "Staged {} file(s), {} still need resolving",
                staged, skipped
            ));
        } else if self.session.is_done() {
            self.notify_success("All conflicts resolved and staged");
        } else {
            self.notify_success(format!("Staged {} file(s)", staged));
        }
    }

    // ── Reload ───────────────────────────────────────────────────────

    pub(crate) fn reload(&mut self) {
        match self.session.reload() {
            Ok(()) => {
                self.sync_selection();
                let index = self.session.index();
                let msg = format!(
                    "Reloaded: {} file(s), {} conflict(s)",
                    index.files().len(),
                    index.total_hunks()
                );
                info!("{}", msg);
                self.notify_info(msg);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }
}
