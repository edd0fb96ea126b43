//! Gravity and refill.
//!
//! Columns are independent. Collapse is a stable compaction toward row 0:
//! occupied slots keep their relative order and every gap ends up at the top of
//! the column, where refill draws fresh pieces.

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::{Cell, PieceType};

/// One piece moving down during collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall {
    pub from: Cell,
    pub to: Cell,
}

/// One freshly drawn piece placed into an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refill {
    pub cell: Cell,
    pub piece: PieceType,
}

/// Combined outcome of collapsing and refilling every column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settle {
    pub falls: Vec<Fall>,
    pub refills: Vec<Refill>,
}

/// Compact one column downward. Returns the moves in bottom-to-top order.
pub fn collapse_column(board: &mut Board, column: u8) -> Vec<Fall> {
    let mut falls = Vec::new();
    let mut write = 0u8;

    for read in 0..board.rows() {
        let from = Cell::new(column, read);
        let Some(piece) = board.get(from) else {
            continue;
        };
        if read != write {
            let to = Cell::new(column, write);
            board.set(to, Some(piece));
            board.set(from, None);
            falls.push(Fall { from, to });
        }
        write += 1;
    }

    falls
}

/// Fill every empty slot of one column with a uniformly drawn piece.
///
/// Expects the column to be collapsed already, so the empties are the top slots.
pub fn refill_column(
    board: &mut Board,
    column: u8,
    kinds: &[PieceType],
    rng: &mut impl RandomSource,
) -> Vec<Refill> {
    let mut refills = Vec::new();
    for row in 0..board.rows() {
        let cell = Cell::new(column, row);
        if board.get(cell).is_none() {
            let piece = rng.pick_piece(kinds);
            board.set(cell, Some(piece));
            refills.push(Refill { cell, piece });
        }
    }
    refills
}

/// Collapse then refill every column, left to right.
pub fn settle(board: &mut Board, kinds: &[PieceType], rng: &mut impl RandomSource) -> Settle {
    let mut out = Settle::default();
    for column in 0..board.columns() {
        out.falls.extend(collapse_column(board, column));
        out.refills.extend(refill_column(board, column, kinds, rng));
    }
    out
}
