//! Terminal flappy runner (default binary).
//!
//! Fixed-timestep frame driver: drain input, advance the state machine once,
//! draw, then sleep out the rest of the frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, error, info};

use tui_flappy::core::{Flow, Game};
use tui_flappy::input::{drain_events, CrosstermEvents, FrameInput};
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::types::Screen;
use tui_flappy::{logging, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    info!(seed = config.seed, fps = config.fps, "starting");

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "frame loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = Game::new(config.world_config(), config.seed);
    let view = GameView::default();
    let mut source = CrosstermEvents;
    let mut events = FrameInput::new();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = config.frame_duration();

    loop {
        let started = Instant::now();

        events.clear();
        let report = drain_events(&mut source, &mut events)?;
        if report.resized {
            term.invalidate();
        }

        let before = game.screen();
        if game.tick(&events) == Flow::Quit {
            info!(frame = game.frame(), screen = before.as_str(), "quit");
            return Ok(());
        }
        let after = game.screen();
        if after != before {
            debug!(from = before.as_str(), to = after.as_str(), "screen change");
            if after == Screen::GameOver {
                info!(score = game.world().score.whole(), "game over");
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            if rest > Duration::ZERO {
                std::thread::sleep(rest);
            }
        }
    }
}
