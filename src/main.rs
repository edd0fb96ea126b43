//! Terminal match-3 runner (default binary).
//!
//! crossterm for input, the framebuffer renderer from `tui_match3::term` for
//! output. Configuration comes from `MATCH3_*` environment variables; logs go to
//! the file named by `MATCH3_LOG_FILE` (the terminal itself is the screen).

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_match3::core::{GameConfig, GameSnapshot};
use tui_match3::frontend::Session;
use tui_match3::input::{handle_key_event, should_quit};
use tui_match3::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use tui_match3::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env().context("invalid MATCH3_* configuration")?;
    let mut session = Session::from_config(config)?;
    info!(
        seed = session.game.seed(),
        columns = session.game.board().columns(),
        rows = session.game.board().rows(),
        "session started"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        score = session.game.score(),
        best = session.game.best_score(),
        moves = session.game.moves(),
        "session ended"
    );
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("MATCH3_LOG_FILE") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        session.expire_status();

        // Render.
        session.game.snapshot_into(&mut snap);
        let overlay = Overlay {
            cursor: Some(session.selector.cursor()),
            selected: session.selector.selected(),
            hint: session.visible_hint(),
            status: session.status_text(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input, waking up at least once per tick so status lines expire.
        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
