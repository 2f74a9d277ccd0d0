//! Knot - merge conflict resolver for Git
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use knot::app::{App, AppOptions, ExternalEditor};
use knot::cli::Cli;
use knot::config::Config;
use knot::conflict::{Backend, ConflictSession};
use knot::git::{GitBackend, GitExecutor};
use knot::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;
    let _log_guard = logging::init(cli.log_level.as_deref(), &config.log)
        .wrap_err("Failed to open log file")?;

    // Everything that can fail before the UI starts is reported on a normal terminal
    let executor = match cli.path {
        Some(path) => GitExecutor::with_repo_path(path),
        None => GitExecutor::new(),
    }
    .with_program(config.git.program.clone());
    executor.check_version()?;

    let backend = GitBackend::open(executor)?;
    info!(root = %backend.root().display(), "opening conflict session");

    let editor = ExternalEditor::for_backend(&backend, config.editor.command.clone());
    let session = ConflictSession::open(backend)?;
    let app = App::new(
        session,
        AppOptions {
            editor: Some(editor),
            notification_ttl: config.notification_ttl(),
        },
    );

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run<B: Backend>(mut terminal: DefaultTerminal, mut app: App<B>) -> color_eyre::Result<()> {
    while app.running {
        if app.take_needs_clear() {
            terminal.clear()?;
        }
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so notifications expire without a key press.
fn handle_events<B: Backend>(app: &mut App<B>) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
