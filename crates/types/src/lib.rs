//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless drivers).
//!
//! # Coordinates
//!
//! A [`Cell`] addresses one grid slot as `(column, row)`:
//!
//! - **column**: `0..columns`, left to right
//! - **row**: `0..rows`, bottom to top (row 0 is the floor; gravity pulls toward it)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 8 | Grid width |
//! | `DEFAULT_ROWS` | 8 | Grid height |
//! | `DEFAULT_PIECE_TYPES` | 6 | Number of distinct piece kinds |
//! | `DEFAULT_MATCH_SCORE` | 10 | Points per removed piece |
//! | `MAX_RESHUFFLE_ATTEMPTS` | 10 | Reshuffles before a board is declared degenerate |
//! | `TICK_MS` | 16 | Terminal loop tick (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Cell, Direction, SwapRequest};
//!
//! let a = Cell::new(2, 0);
//! let b = a.step(Direction::Right, 8, 8).unwrap();
//! assert_eq!(b, Cell::new(3, 0));
//! assert!(a.is_neighbor(b));
//!
//! let swap = SwapRequest::new(a, b);
//! assert!(swap.is_adjacent());
//! ```

use std::fmt;

/// Default grid width.
pub const DEFAULT_COLUMNS: u8 = 8;

/// Default grid height.
pub const DEFAULT_ROWS: u8 = 8;

/// Default number of distinct piece kinds.
pub const DEFAULT_PIECE_TYPES: u8 = 6;

/// Minimum run length that counts as a match.
pub const MIN_RUN_LENGTH: usize = 3;

/// With fewer kinds than this, a board can never be built without matches
/// and matching degenerates.
pub const MIN_PIECE_TYPES: usize = 3;

/// Flat points awarded per removed piece.
pub const DEFAULT_MATCH_SCORE: u32 = 10;

/// Reshuffles attempted before a board without legal moves is reported as degenerate.
pub const MAX_RESHUFFLE_ATTEMPTS: u32 = 10;

/// Fixed timestep interval of the terminal loop in milliseconds.
pub const TICK_MS: u32 = 16;

/// How long a status message stays on screen in the terminal front-end.
pub const STATUS_MESSAGE_MS: u32 = 2_000;

/// Opaque identifier for a piece kind.
///
/// Two pieces match when their `PieceType`s are equal. The numeric value has no
/// meaning beyond identity; renderers map it to a glyph/color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceType(pub u8);

impl PieceType {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    /// The first `count` kinds, `PieceType(0)..PieceType(count)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::PieceType;
    ///
    /// let kinds = PieceType::palette(3);
    /// assert_eq!(kinds, vec![PieceType(0), PieceType(1), PieceType(2)]);
    /// ```
    pub fn palette(count: u8) -> Vec<PieceType> {
        (0..count).map(PieceType).collect()
    }

    /// Single-letter label (`A`, `B`, ...), used by text renderers and test fixtures.
    pub fn letter(self) -> char {
        (b'A' + self.0 % 26) as char
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Contents of one grid slot.
///
/// - `None`: empty (only observable mid-cascade)
/// - `Some(PieceType)`: occupied
pub type Slot = Option<PieceType>;

/// Grid coordinate `(column, row)`, 0-indexed, row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub column: u8,
    pub row: u8,
}

impl Cell {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Cell) -> u16 {
        let dc = (self.column as i16 - other.column as i16).unsigned_abs();
        let dr = (self.row as i16 - other.row as i16).unsigned_abs();
        dc + dr
    }

    /// True when `other` is a 4-connected neighbour (Manhattan distance exactly 1).
    pub fn is_neighbor(self, other: Cell) -> bool {
        self.distance(other) == 1
    }

    /// Neighbour in `dir`, or `None` when it would leave a `columns`×`rows` grid.
    pub fn step(self, dir: Direction, columns: u8, rows: u8) -> Option<Cell> {
        let (dc, dr) = dir.delta();
        let column = self.column as i16 + dc as i16;
        let row = self.row as i16 + dr as i16;
        if column < 0 || row < 0 || column >= columns as i16 || row >= rows as i16 {
            return None;
        }
        Some(Cell::new(column as u8, row as u8))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The four grid directions. `Up` means toward higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(column delta, row delta)`
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A request to exchange two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    pub a: Cell,
    pub b: Cell,
}

impl SwapRequest {
    pub const fn new(a: Cell, b: Cell) -> Self {
        Self { a, b }
    }

    pub fn is_adjacent(&self) -> bool {
        self.a.is_neighbor(self.b)
    }
}

/// Player intents produced by input adapters.
///
/// These are translated into engine calls by the front-end; the engine itself
/// only ever sees [`SwapRequest`]s and explicit reshuffle/score requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell
    Move(Direction),
    /// Select the cell under the cursor, or drop the selection if it is already there
    Select,
    /// Drop the current selection
    Cancel,
    /// Highlight a legal move
    Hint,
    /// Reshuffle the board on demand
    Reshuffle,
    /// Zero the score
    ResetScore,
    /// Build a fresh board
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "up",
            GameAction::Move(Direction::Down) => "down",
            GameAction::Move(Direction::Left) => "left",
            GameAction::Move(Direction::Right) => "right",
            GameAction::Select => "select",
            GameAction::Cancel => "cancel",
            GameAction::Hint => "hint",
            GameAction::Reshuffle => "reshuffle",
            GameAction::ResetScore => "resetScore",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_requires_manhattan_distance_one() {
        let c = Cell::new(3, 3);
        assert!(c.is_neighbor(Cell::new(3, 4)));
        assert!(c.is_neighbor(Cell::new(2, 3)));
        assert!(!c.is_neighbor(c));
        assert!(!c.is_neighbor(Cell::new(4, 4)));
        assert!(!c.is_neighbor(Cell::new(5, 3)));
    }

    #[test]
    fn step_stays_inside_grid() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(Direction::Left, 4, 4), None);
        assert_eq!(corner.step(Direction::Down, 4, 4), None);
        assert_eq!(corner.step(Direction::Up, 4, 4), Some(Cell::new(0, 1)));

        let top = Cell::new(3, 3);
        assert_eq!(top.step(Direction::Right, 4, 4), None);
        assert_eq!(top.step(Direction::Up, 4, 4), None);
    }

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_MATCH_SCORE, 10);
        assert_eq!(MAX_RESHUFFLE_ATTEMPTS, 10);
        assert_eq!(MIN_RUN_LENGTH, 3);
        assert_eq!(MIN_PIECE_TYPES, 3);
    }
}
