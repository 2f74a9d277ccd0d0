//! Screen tests for the resolve view
//!
//! Drives the whole App with key events and inspects the rendered buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use knot::app::{App, AppOptions};
use knot::conflict::ConflictSession;

use crate::common::MemoryBackend;

const CONFLICT: &str = "line0\n<<<<<<< HEAD\nmain shared\n=======\ntopic shared\n>>>>>>> topic\nline1\n";

fn app(backend: MemoryBackend) -> App<MemoryBackend> {
    App::new(ConflictSession::open(backend).unwrap(), AppOptions::default())
}

fn press(app: &mut App<MemoryBackend>, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(app: &App<MemoryBackend>, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_initial_screen_lists_files_and_hunk() {
    let backend = MemoryBackend::new()
        .with_conflict("src/config.rs", CONFLICT)
        .with_conflict("README.md", CONFLICT);
    let rows = screen(&app(backend), 100, 16);

    assert!(contains(&rows, "Files (2)"));
    assert!(contains(&rows, "src/config.rs"));
    assert!(contains(&rows, "README.md"));
    assert!(contains(&rows, "[conflict 1 of 1]"));
    assert!(contains(&rows, "<<<<<<< HEAD"));
    assert!(contains(&rows, "topic shared"));
    assert!(contains(&rows, "2 conflict(s) left"));
}

#[test]
fn test_resolving_updates_screen() {
    let mut app = app(MemoryBackend::new().with_conflict("a.txt", CONFLICT));
    press(&mut app, KeyCode::Char('o'));

    let rows = screen(&app, 100, 16);
    assert!(!contains(&rows, "<<<<<<< HEAD"));
    assert!(contains(&rows, "main shared"));
    assert!(!contains(&rows, "topic shared"));
    assert!(contains(&rows, "No conflicts left. Press 'a' to stage."));
}

#[test]
fn test_staging_last_file_shows_empty_state() {
    let mut app = app(MemoryBackend::new().with_conflict("a.txt", CONFLICT));
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Char('a'));

    assert!(app.session.is_done());
    let rows = screen(&app, 80, 12);
    assert!(contains(&rows, "All conflicts resolved and staged!"));
    assert_eq!(app.session.backend().staged(), vec!["a.txt"]);
}

#[test]
fn test_malformed_file_is_flagged() {
    let backend = MemoryBackend::new().with_conflict("bad.txt", "<<<<<<< HEAD\nleft open\n");
    let rows = screen(&app(backend), 140, 12);

    assert!(contains(&rows, "Malformed conflict markers"));
    assert!(contains(&rows, "never closed"));
}

#[test]
fn test_notification_in_title() {
    let backend = MemoryBackend::new()
        .with_conflict("a.txt", CONFLICT)
        .with_conflict("b.txt", CONFLICT);
    let mut app = app(backend);
    press(&mut app, KeyCode::Char('o'));

    let rows = screen(&app, 120, 14);
    assert!(contains(&rows, "press 'a' to stage"));
}
