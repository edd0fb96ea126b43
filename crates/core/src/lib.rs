//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole tile-matching engine: the grid, match
//! detection, gravity and refill, cascade resolution, reshuffling and scoring.
//! It has no dependencies on terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: every random draw goes through an injected [`RandomSource`]
//! - **Testable**: boards can be built literally with [`Board::from_letters`]
//! - **Portable**: renderers only need [`Game::snapshot`] or [`Game::for_each_cell`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of piece identities
//! - [`matcher`]: horizontal/vertical run detection
//! - [`gravity`]: per-column collapse and refill
//! - [`shuffle`]: multiset-preserving reshuffle
//! - [`engine`]: swap validation, cascade loop, playability checks
//! - [`scoring`]: flat per-piece scoring
//! - [`config`]: validated configuration, environment overrides
//! - [`rng`]: seedable random source
//!
//! # Rules
//!
//! - A swap must exchange two 4-connected neighbours and must create a run of
//!   three or more identical pieces; otherwise it is reverted.
//! - Matched cells are removed, columns compact downward (row 0 is the floor)
//!   and the gaps at the top are refilled. This repeats until no run remains.
//! - Each removed piece scores `match_score_value` (default 10).
//! - When no legal move remains the board is reshuffled, up to
//!   `max_reshuffle_attempts` times, before it is reported as degenerate.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{Game, GameConfig};
//! use tui_match3_core::matcher::find_matches;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(42)).unwrap();
//! let swap = game.find_legal_move().unwrap();
//! let result = game.request_swap(swap.a, swap.b).unwrap();
//!
//! assert!(result.accepted);
//! assert!(find_matches(game.board()).is_empty());
//! assert_eq!(game.score(), result.score_delta);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod gravity;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod shuffle;
pub mod snapshot;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{
    find_legal_move, has_legal_move, legal_moves, CascadeResult, CascadeStep, Game, Phase,
};
pub use error::{ConfigError, DegenerateBoard, InvalidMove};
pub use gravity::{collapse_column, refill_column, settle, Fall, Refill, Settle};
pub use matcher::{find_match_groups, find_matches, find_runs, Axis, MatchGroup, Run};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{calculate_pass_score, ScoreKeeper};
pub use shuffle::reshuffle;
pub use snapshot::GameSnapshot;
