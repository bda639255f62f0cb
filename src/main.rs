//! Terminal Life-war runner (default binary).
//!
//! Runs the full-screen raw-mode UI by default, or the line-oriented loop
//! with `--plain`. Board size comes from `--size`.

use std::fs::File;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_lifewar::cli::Cli;
use tui_lifewar::core::{GameSession, GameSnapshot};
use tui_lifewar::input::{handle_key_event, should_quit, Cursor};
use tui_lifewar::plain;
use tui_lifewar::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use tui_lifewar::types::GameAction;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;
    info!(size = cli.size, plain = cli.plain, "starting");

    let mut session = GameSession::new(cli.size);

    if cli.plain {
        let stdin = io::stdin();
        plain::run(&mut session, stdin.lock(), io::stdout().lock())?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `--log-file` if given. Otherwise only the plain mode logs, to
/// stderr; the full-screen UI owns the terminal.
fn init_tracing(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init();
    } else if cli.plain {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::centered(session.size());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut message: Option<String> = None;

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let status = StatusView {
            cursor: snap.playable().then(|| (cursor.row(), cursor.col())),
            message: message.as_deref(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Turn-based: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match action {
                    GameAction::Restart => {
                        session.restart();
                        cursor = Cursor::centered(session.size());
                        message = None;
                    }
                    // Finished games only accept restart and quit.
                    _ if session.is_over() => {}
                    GameAction::Place => {
                        let (row, col) = cursor.coords();
                        message = session.apply_move(row, col).err().map(|e| e.to_string());
                    }
                    movement => {
                        cursor.apply(movement);
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
