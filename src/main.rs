use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::Settings;
use grid_snake::game::GameController;
use grid_snake::grid::Grid;
use grid_snake::input::{Command, InputHandler};
use grid_snake::renderer::TerminalRenderer;
use grid_snake::scheduler::DeadlineScheduler;
use grid_snake::terminal_runtime::TerminalSession;
use tracing_subscriber::EnvFilter;

/// Upper bound on how long the loop waits for input between tick checks.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file with `canvas_size`, `tile_size` and `seed`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Virtual canvas edge length; overrides the config file.
    #[arg(long)]
    canvas_size: Option<u16>,

    /// Tile edge length; overrides the config file.
    #[arg(long)]
    tile_size: Option<u16>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_logging(path) {
            eprintln!("Failed to open log file {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let grid = match settings.grid() {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    match run(grid, settings.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_settings(cli: &Cli) -> Result<Settings, grid_snake::config::ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(canvas_size) = cli.canvas_size {
        settings.canvas_size = canvas_size;
    }
    if let Some(tile_size) = cli.tile_size {
        settings.tile_size = tile_size;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    Ok(settings)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run(grid: Grid, seed: Option<u64>) -> io::Result<()> {
    let renderer = TerminalRenderer::new(TerminalSession::enter()?);
    let scheduler = DeadlineScheduler::new();
    let mut controller = match seed {
        Some(seed) => GameController::new_with_seed(grid, seed, scheduler, renderer),
        None => GameController::new(grid, scheduler, renderer),
    };
    let mut input = InputHandler::new();

    tracing::info!(tile_count = grid.tile_count(), "session started");

    loop {
        if controller.scheduler_mut().take_due(Instant::now()) {
            controller.on_timer();
        }

        let wait = controller
            .scheduler()
            .time_until_due(Instant::now())
            .map_or(INPUT_POLL_INTERVAL, |until| until.min(INPUT_POLL_INTERVAL));

        match input.poll_command(wait)? {
            Some(Command::Quit) => break,
            Some(command) => controller.handle_command(command),
            None => {}
        }
    }

    tracing::info!(score = controller.score(), "session ended");
    Ok(())
}
