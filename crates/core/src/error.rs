//! Error types for the engine

use thiserror::Error;

use crate::types::Cell;

/// Rejected configuration. Fatal at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions { columns: u8, rows: u8 },

    #[error("at least {min} distinct piece types are required, got {got}")]
    TooFewPieceTypes { got: usize, min: usize },

    #[error("piece type {0} is listed more than once")]
    DuplicatePieceType(u8),

    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// Why a swap request was refused. The board is never mutated when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),

    #[error("cells {0} and {1} are not neighbours")]
    NotAdjacent(Cell, Cell),

    #[error("cell {0} is empty")]
    EmptyCell(Cell),

    #[error("a cascade is still resolving")]
    ResolutionInProgress,
}

/// No legal move survived the bounded reshuffle attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no legal move after {attempts} reshuffle attempts")]
pub struct DegenerateBoard {
    pub attempts: u32,
}
