//! Keybinding definitions for Knot
//!
//! All keybindings are defined here so views and help text stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (reload)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (or leave help)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Next conflict
pub const NEXT_HUNK: KeyCode = KeyCode::Char('n');

/// Previous conflict
pub const PREV_HUNK: KeyCode = KeyCode::Char('N');

/// Move down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Move up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Select next file in the file list
pub const NEXT_FILE: KeyCode = KeyCode::Tab;

/// Select previous file in the file list
pub const PREV_FILE: KeyCode = KeyCode::BackTab;

/// Check if key moves to the next conflict (n, j or ↓)
pub fn is_next_hunk(code: KeyCode) -> bool {
    matches!(code, NEXT_HUNK | MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key moves to the previous conflict (N, k or ↑)
pub fn is_prev_hunk(code: KeyCode) -> bool {
    matches!(code, PREV_HUNK | MOVE_UP | MOVE_UP_ARROW)
}

// =============================================================================
// Resolve View keys
// =============================================================================

/// Keep our side of the focused conflict
pub const RESOLVE_OURS: KeyCode = KeyCode::Char('o');

/// Keep their side of the focused conflict
pub const RESOLVE_THEIRS: KeyCode = KeyCode::Char('t');

/// Edit the selected file in an external editor
pub const EDIT_FILE: KeyCode = KeyCode::Char('e');

/// Stage the selected file
pub const STAGE_FILE: KeyCode = KeyCode::Char('a');

/// Stage every resolved file
pub const STAGE_ALL: KeyCode = KeyCode::Char('A');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q/Esc",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Reload conflicts",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "n/j/↓",
        description: "Next conflict",
    },
    KeyBindEntry {
        key: "N/k/↑",
        description: "Previous conflict",
    },
    KeyBindEntry {
        key: "Tab/S-Tab",
        description: "Next/previous file",
    },
];

/// Resolve view key bindings for help display
pub const RESOLVE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "o",
        description: "Keep ours",
    },
    KeyBindEntry {
        key: "t",
        description: "Keep theirs",
    },
    KeyBindEntry {
        key: "e",
        description: "Edit file in editor",
    },
    KeyBindEntry {
        key: "a",
        description: "Stage selected file",
    },
    KeyBindEntry {
        key: "A",
        description: "Stage all resolved files",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy, Debug)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_NAV: KeyHint = KeyHint {
    key: "n/N",
    label: "Next/Prev",
    color: Color::Cyan,
};
pub const HINT_OURS: KeyHint = KeyHint {
    key: "o",
    label: "Ours",
    color: Color::Green,
};
pub const HINT_THEIRS: KeyHint = KeyHint {
    key: "t",
    label: "Theirs",
    color: Color::Magenta,
};
pub const HINT_EDIT: KeyHint = KeyHint {
    key: "e",
    label: "Edit",
    color: Color::Yellow,
};
pub const HINT_STAGE: KeyHint = KeyHint {
    key: "a",
    label: "Stage",
    color: Color::Green,
};
pub const HINT_STAGE_ALL: KeyHint = KeyHint {
    key: "A",
    label: "Stage all",
    color: Color::Green,
};
pub const HINT_RELOAD: KeyHint = KeyHint {
    key: "^L",
    label: "Reload",
    color: Color::Blue,
};
pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};

/// Context for dynamic hint selection
#[derive(Default)]
pub struct HintContext {
    /// A conflict is focused
    pub has_focus: bool,
    /// At least one tracked file has no conflicts left
    pub has_stageable: bool,
    /// An external editor can be launched
    pub has_editor: bool,
}

/// Get the hints for the current view
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    match view {
        View::Resolve => resolve_hints(ctx),
        View::Help => vec![HINT_BACK],
    }
}

fn resolve_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut hints = Vec::new();
    if ctx.has_focus {
        hints.extend([HINT_NAV, HINT_OURS, HINT_THEIRS]);
    }
    if ctx.has_editor {
        hints.push(HINT_EDIT);
    }
    if ctx.has_stageable {
        hints.extend([HINT_STAGE, HINT_STAGE_ALL]);
    }
    hints.extend([HINT_RELOAD, HINT_HELP, HINT_QUIT]);
    hints
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(hints: &[KeyHint]) -> Vec<&'static str> {
        hints.iter().map(|h| h.key).collect()
    }

    #[test]
    fn resolve_with_focus_includes_strategies() {
        let ctx = HintContext {
            has_focus: true,
            ..HintContext::default()
        };
        let hints = current_hints(View::Resolve, &ctx);
        assert!(hints.iter().any(|h| h.key == "o"), "Ours hint missing");
        assert!(hints.iter().any(|h| h.key == "t"), "Theirs hint missing");
        assert!(
            !hints.iter().any(|h| h.key == "a"),
            "Stage hint should not appear"
        );
    }

    #[test]
    fn resolve_without_focus_hides_strategies() {
        let ctx = HintContext {
            has_stageable: true,
            ..HintContext::default()
        };
        let hints = current_hints(View::Resolve, &ctx);
        assert_eq!(keys_of(&hints), vec!["a", "A", "^L", "?", "q"]);
    }

    #[test]
    fn resolve_editor_hint_follows_context() {
        let with = current_hints(
            View::Resolve,
            &HintContext {
                has_editor: true,
                ..HintContext::default()
            },
        );
        assert!(with.iter().any(|h| h.key == "e"));

        let without = current_hints(View::Resolve, &HintContext::default());
        assert!(!without.iter().any(|h| h.key == "e"));
    }

    #[test]
    fn help_view_only_offers_back() {
        let hints = current_hints(View::Help, &HintContext::default());
        assert_eq!(keys_of(&hints), vec!["q"]);
        assert_eq!(hints[0].label, "Back");
    }

    #[test]
    fn next_and_prev_aliases() {
        for code in [KeyCode::Char('n'), KeyCode::Char('j'), KeyCode::Down] {
            assert!(is_next_hunk(code));
            assert!(!is_prev_hunk(code));
        }
        for code in [KeyCode::Char('N'), KeyCode::Char('k'), KeyCode::Up] {
            assert!(is_prev_hunk(code));
        }
    }

    #[test]
    fn refresh_key_requires_control() {
        let plain = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(!is_refresh_key(&plain));
        assert!(is_refresh_key(&ctrl));
    }
}
