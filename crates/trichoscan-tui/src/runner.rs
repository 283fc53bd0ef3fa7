//! Main TUI runner - entry point and event loop

use std::io::stdout;
use std::path::PathBuf;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use trichoscan_app::config::Settings;
use trichoscan_app::{Engine, Message};
use trichoscan_core::prelude::*;

use crate::{event, render, terminal};

/// Run the terminal UI until the user quits.
///
/// `initial_image` is opened as if it had been typed into the prompt.
pub async fn run(settings: Settings, initial_image: Option<PathBuf>) -> Result<()> {
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    let mut engine = Engine::new(settings);

    let mut term = ratatui::init();
    if let Err(e) = crossterm::execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    if let Some(path) = initial_image {
        engine.process_message(Message::OpenImageFile { path });
    }

    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();

    let _ = crossterm::execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

/// Main event loop: drain task messages, draw, then block on terminal input
/// for at most one tick.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    tick_rate: std::time::Duration,
) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        for message in event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
