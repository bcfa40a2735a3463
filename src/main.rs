//! Terminal runner (default binary).
//!
//! Owns the one game session and drives it at a fixed frame period: poll input
//! until the next frame is due, apply actions, tick the fall timer, render.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::{debug, info};

use tui_blockfall::config::Settings;
use tui_blockfall::core::{ColorSource, FixedColor, GameState, SimpleRng};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::BlockColor;

#[derive(Debug, Parser)]
#[command(name = "tui-blockfall", version, about)]
struct Args {
    /// Seed for piece colours (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Settings file (JSON); defaults to ~/.config/tui-blockfall/settings.json when present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Give every piece this colour instead of a random one
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    fixed_color: Option<BlockColor>,
}

fn parse_color(s: &str) -> Result<BlockColor, String> {
    BlockColor::from_str(s).ok_or_else(|| {
        let names: Vec<_> = BlockColor::PALETTE.iter().map(|c| c.as_str()).collect();
        format!("unknown colour {:?}, expected one of {}", s, names.join(", "))
    })
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    // Logging to the terminal would corrupt the game screen, so it is file-only.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logger: {}", e))
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    let settings = Settings::discover(args.config.as_deref())?;

    let colors: Box<dyn ColorSource> = match args.fixed_color {
        Some(color) => Box::new(FixedColor(color)),
        None => {
            let seed = args.seed.unwrap_or_else(time_seed);
            info!("colour seed {}", seed);
            Box::new(SimpleRng::new(seed))
        }
    };
    let game = GameState::with_rules(settings.rules.to_rules(), colors);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<R: ColorSource>(
    term: &mut TerminalRenderer,
    mut game: GameState<R>,
    settings: &Settings,
) -> Result<()> {
    let view = GameView::new(settings.display.cell_width, settings.display.cell_height);
    let frame_ms = settings.display.frame_ms;
    let frame = Duration::from_millis(frame_ms as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    info!(
        "session started: fall interval {}ms, frame {}ms",
        game.fall_interval_ms(),
        frame_ms
    );

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(
                            "quit: score={} level={} lines={}",
                            game.score(),
                            game.level(),
                            game.lines()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!("action {}", action.as_str());
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            game.tick(frame_ms);
        }

        if let Some(ev) = game.take_last_event() {
            if ev.lines_cleared > 0 {
                info!(
                    "cleared {} line(s) for {} points, score={} lines={}",
                    ev.lines_cleared,
                    ev.points,
                    game.score(),
                    game.lines()
                );
            }
        }
    }
}
