//! Arena CLI
//!
//! Pit difficulty tiers against each other, or play one of them.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::{MatchConfig, MatchRunner};
use chess_core::Color;
use clap::{Parser, Subcommand};
use opponent::OpponentConfig;
use tiered_engine::Tier;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arena", about = "Tiered chess opponent arena")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two tiers
    Match {
        tier1: Tier,
        tier2: Tier,
        #[arg(long, short, default_value_t = 10)]
        games: u32,
        /// Plies per game before it is scored a draw
        #[arg(long, default_value_t = 200)]
        max_moves: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the JSON report here
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Play against the engine in the terminal
    Play {
        #[arg(long)]
        tier: Option<Tier>,
        /// Side the engine plays
        #[arg(long)]
        side: Option<Color>,
        /// TOML opponent config; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn run_match(tier1: Tier, tier2: Tier, config: MatchConfig, save: Option<PathBuf>) -> Result<()> {
    println!("=== Match: {} vs {} ===", tier1, tier2);
    println!("Games: {}, Max plies: {}", config.num_games, config.max_moves);
    println!();

    let report = MatchRunner::new(config).run_match(tier1, tier2);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        tier1, report.result.wins, report.result.losses, report.result.draws
    );
    println!("Score: {:.1}%", report.result.score() * 100.0);

    if let Some(path) = save {
        report
            .save(&path)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn run_play(
    tier: Option<Tier>,
    side: Option<Color>,
    config: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut opponent = match config {
        Some(path) => OpponentConfig::load(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => OpponentConfig::default(),
    };
    if let Some(tier) = tier {
        opponent.tier = tier;
    }
    if let Some(side) = side {
        opponent.side = side;
    }
    if seed.is_some() {
        opponent.seed = seed;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    arena::play::run(&opponent, stdin.lock(), &mut stdout)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Match {
            tier1,
            tier2,
            games,
            max_moves,
            seed,
            save,
        } => {
            let config = MatchConfig {
                num_games: games,
                max_moves,
                seed,
                verbose: true,
                ..Default::default()
            };
            run_match(tier1, tier2, config, save)
        }
        Command::Play {
            tier,
            side,
            config,
            seed,
        } => run_play(tier, side, config, seed),
    }
}
