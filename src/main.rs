//! Terminal falling-blocks runner.
//!
//! Input, the gravity timer and rendering are three separate call sites in
//! one loop: poll for a key until the next tick is due, apply it, tick if the
//! interval elapsed, draw.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Builder, Env, Target};

use falling_blocks::core::GameEngine;
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::GameConfig;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let (config, warnings) = GameConfig::from_env();
    init_logging(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting: seed={} tick_ms={} exit_delay_ms={}",
        seed,
        config.tick_ms,
        config.exit_delay_ms
    );

    let mut engine = GameEngine::new(seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    let outcome = result?;
    restored?;

    log::info!("{:?} with score {}", outcome, engine.score());
    match outcome {
        Outcome::GameOver => println!("Game over! Final score: {}", engine.score()),
        Outcome::Quit => println!("Final score: {}", engine.score()),
    }
    Ok(())
}

/// Install the file logger when `BLOCKS_LOG_PATH` is set. Writing log lines
/// to stdout would corrupt the alternate screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("open log file {}", path))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut GameEngine,
    config: &GameConfig,
) -> Result<Outcome> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(&engine.render_state(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if engine.is_game_over() {
            wait_for_dismiss(config.exit_delay())?;
            return Ok(Outcome::GameOver);
        }

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(Outcome::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}

/// Keep the final frame up until a key press or `delay` elapses.
fn wait_for_dismiss(delay: Duration) -> Result<()> {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
