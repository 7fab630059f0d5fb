//! Terminal runner (default binary).
//!
//! Reads configuration from the environment and the command line, starts the
//! engine actor, then runs a frame loop: render the latest snapshot, poll
//! crossterm for keys until the next frame, feed the frame timestamp.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::actor::{EngineRuntime, EventLog};
use blockfall::core::{
    EngineConfig, EntropyRandom, GameSnapshot, GameState, RandomSource, SimpleRng,
};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

type DynRandom = Box<dyn RandomSource + Send>;

/// Falling-block puzzle in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u32>,

    /// Board width in cells [env: BLOCKFALL_WIDTH, default 10]
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells [env: BLOCKFALL_HEIGHT, default 20]
    #[arg(long)]
    height: Option<usize>,

    /// Automatic drop interval in milliseconds [env: BLOCKFALL_DROP_MS, default 1000]
    #[arg(long)]
    drop_ms: Option<u64>,

    /// Append JSON-lines game events to this file [env: BLOCKFALL_LOG_PATH]
    #[arg(long)]
    log_path: Option<PathBuf>,
}

impl Args {
    /// Environment first, command line on top.
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::from_env();
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(drop_ms) = self.drop_ms {
            config.drop_interval_ms = drop_ms;
        }
        config
    }

    fn rng(&self) -> DynRandom {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(EntropyRandom::new()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config();
    let log_path = args.log_path.clone().or_else(EventLog::path_from_env);

    let state = GameState::new(config, args.rng())?;
    let engine = EngineRuntime::start(state, log_path.as_deref())?;
    if let Some(path) = &log_path {
        println!("[blockfall] logging events to {}", path.display());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &engine);

    // Always try to restore terminal state.
    let _ = term.exit();

    let state = engine.shutdown()?;
    println!(
        "[blockfall] final score {} ({} lines, {} pieces)",
        state.score(),
        state.lines(),
        state.pieces_spawned()
    );
    result
}

fn run(term: &mut TerminalRenderer, engine: &EngineRuntime<DynRandom>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let started = Instant::now();
    let mut last_frame = started;

    loop {
        let snap: GameSnapshot = engine.snapshot()?;
        let (w, h) = TerminalRenderer::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.send(action)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            engine.frame(started.elapsed().as_millis() as u64)?;
        }
    }
}
