use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use grid_snake::config::{Settings, THEME_CLASSIC};
use grid_snake::error::{ConfigError, EngineError};
use grid_snake::game::{GameEngine, GameStatus};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between frames; the engine steps every few frames.
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Settings file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path.
    #[arg(long = "log-file", default_value = "grid-snake.log")]
    log_file: PathBuf,

    /// Log verbosity.
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("terminal error")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> Result<(), RunError> {
    let cli = Cli::parse();

    WriteLogger::init(cli.log_level, Config::default(), File::create(&cli.log_file)?)?;

    let settings = resolve_settings(&cli)?;
    info!("starting with {settings:?}");

    let engine = match settings.seed {
        Some(seed) => GameEngine::with_seed(settings.width, settings.height, seed)?,
        None => GameEngine::new(settings.width, settings.height)?,
    };

    run(engine, Duration::from_millis(settings.frame_interval_ms))?;
    info!("exiting");
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };

    if let Some(width) = cli.width {
        settings.width = width;
    }
    if let Some(height) = cli.height {
        settings.height = height;
    }
    if let Some(frame_ms) = cli.frame_ms {
        settings.frame_interval_ms = frame_ms;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    settings.validate()?;
    Ok(settings)
}

fn run(mut engine: GameEngine, frame_interval: Duration) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_status = engine.status();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &engine, &THEME_CLASSIC))?;

        match input.poll_input()? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) if engine.status() != GameStatus::Playing => {
                engine.play_new();
            }
            Some(GameInput::Direction(direction)) => engine.update_direction(direction),
            Some(GameInput::Confirm) | None => {}
        }

        let status = engine.tick();
        if status != last_status {
            info!(
                "status {last_status:?} -> {status:?} (score {}, speed {})",
                engine.score(),
                engine.speed()
            );
            last_status = status;
        }

        thread::sleep(frame_interval);
    }

    Ok(())
}
