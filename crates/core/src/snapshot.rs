use crate::types::{Cell, Slot, SwapRequest};

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub columns: u8,
    pub rows: u8,
    /// Row-major slots, row 0 (bottom) first
    pub board: Vec<Slot>,
    pub score: u32,
    pub best_score: u32,
    pub moves: u32,
    pub seed: u32,
    pub hint: Option<SwapRequest>,
    pub degenerate: bool,
    pub resolving: bool,
}

impl GameSnapshot {
    /// Slot at `cell`, or `None` when the cell is empty or outside the snapshot.
    pub fn slot(&self, cell: Cell) -> Slot {
        if cell.column >= self.columns || cell.row >= self.rows {
            return None;
        }
        self.board[cell.row as usize * self.columns as usize + cell.column as usize]
    }

    pub fn has_legal_move(&self) -> bool {
        self.hint.is_some()
    }
}
