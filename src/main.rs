use std::io::stdout;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

mod engine;
mod error;
mod tui;
mod tui48;

use engine::board::Board;
use tui::crossterm::{Crossterm, CrosstermEvents};
use tui48::Tui48;

/// Slide and merge tiles until one of them reaches 2048.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the tile spawner to replay the same game.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives the log; the terminal belongs to the game while it runs.
    #[arg(long, default_value = "./slide48.log")]
    log_file: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logging(path: &Path, level: log::LevelFilter) -> error::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, cli.verbose.log_level_filter())
        .with_context(|| format!("writing log to {}", cli.log_file.display()))?;

    let board = match cli.seed {
        Some(seed) => {
            log::info!("seeding spawner with {}", seed);
            Board::new(StdRng::seed_from_u64(seed))
        }
        None => Board::new(thread_rng()),
    };

    let renderer = Crossterm::new(stdout().lock())?;
    let event_source = CrosstermEvents::default();
    let tui48 = Tui48::new(board, renderer, event_source)?;
    tui48.run()?;

    Ok(())
}
