//! Screen tests for the help panel

use ratatui::{Terminal, backend::TestBackend};

use knot::ui::widgets::render_help_panel;

fn screen(width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

#[test]
fn test_help_panel_full() {
    let rows = screen(80, 30);

    assert!(rows[0].contains("Knot - Help"));
    for needle in ["Global:", "Navigation:", "Resolve:", "Keep ours", "Keep theirs"] {
        assert!(
            rows.iter().any(|r| r.contains(needle)),
            "help panel is missing {needle:?}"
        );
    }
}

#[test]
fn test_help_panel_narrow_does_not_panic() {
    let rows = screen(20, 5);
    assert_eq!(rows.len(), 5);
}
