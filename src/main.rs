//! Line-oriented scoreboard shell.
use anyhow::{Context, Result};
use clap::Parser;
use scoreboard::{ScoreboardBuilder, ScoreboardConfig};
use std::io;

/// Keep score from the terminal, one command per line.
#[derive(Debug, Parser)]
#[command(name = "scoreboard", version, about)]
struct Args {
    /// Print the board as JSON after every command
    #[arg(long)]
    json: bool,

    /// Number of undo snapshots to keep (overrides SCOREBOARD_HISTORY_CAPACITY)
    #[arg(long)]
    history_capacity: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ScoreboardConfig::from_env();

    let mut builder = ScoreboardBuilder::from_config(&config);
    if let Some(capacity) = args.history_capacity {
        builder = builder.history_capacity(capacity);
    }
    let mut board = builder.build().context("invalid scoreboard settings")?;

    scoreboard::shell::run(io::stdin().lock(), &mut io::stdout().lock(), &mut board, args.json)
}
