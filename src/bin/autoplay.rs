//! Headless driver: plays random legal moves and prints a summary.
//!
//! Useful for soak-testing the cascade engine and for reproducing a session from
//! its seed. Logs go to stderr (`RUST_LOG` overrides `--log-level`).

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tui_match3::core::{legal_moves, Game, GameConfig, RandomSource, SimpleRng};
use tui_match3::frontend::{clock_seed, describe};

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play a match-3 session with random legal moves", long_about = None)]
struct Args {
    /// Number of swaps to play
    #[arg(long, default_value = "200")]
    moves: u32,

    /// Board seed (defaults to MATCH3_SEED, then the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Print the final board
    #[arg(long)]
    show_board: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Default)]
struct Summary {
    swaps: u32,
    points: u64,
    removed: u64,
    longest_chain: usize,
    reshuffles: u32,
    dead_ends: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("tui_match3_core={0},autoplay={0}", args.log_level))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::from_env()?;
    let seed = args.seed.or(config.seed).unwrap_or_else(clock_seed);
    config.seed = Some(seed);

    let mut game = Game::new(config)?;
    // Move choice draws from its own stream so the board sequence depends only on `seed`.
    let mut picker = SimpleRng::new(seed.rotate_left(16) ^ 0x5bd1_e995);
    let mut summary = Summary::default();
    info!(seed, moves = args.moves, "autoplay started");

    for turn in 0..args.moves {
        if game.is_degenerate() {
            warn!(turn, "no legal moves left, restarting");
            summary.dead_ends += 1;
            game.restart();
            continue;
        }

        let moves = legal_moves(game.board());
        if moves.is_empty() {
            let result = game.force_reshuffle()?;
            summary.reshuffles += result.reshuffles;
            continue;
        }
        let swap = moves[picker.next_range(moves.len() as u32) as usize];

        let result = game.request_swap(swap.a, swap.b)?;
        if !result.accepted {
            bail!("legal move {} <-> {} was rejected", swap.a, swap.b);
        }
        debug!(turn, "{}", describe(&result));

        summary.swaps += 1;
        summary.points += u64::from(result.score_delta);
        summary.removed += result.removed_count as u64;
        summary.longest_chain = summary.longest_chain.max(result.chain());
        summary.reshuffles += result.reshuffles;
    }

    println!("seed           {seed}");
    println!("swaps          {}", summary.swaps);
    println!("points         {}", summary.points);
    println!("pieces cleared {}", summary.removed);
    println!("longest chain  {}", summary.longest_chain);
    println!("reshuffles     {}", summary.reshuffles);
    println!("dead ends      {}", summary.dead_ends);
    println!("best score     {}", game.best_score());

    if args.show_board {
        println!();
        for row in game.board().to_letters().iter().rev() {
            println!("{row}");
        }
    }
    Ok(())
}
