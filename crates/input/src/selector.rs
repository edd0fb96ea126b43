//! Cursor and selection: turns grid-level intents into swap requests.
//!
//! The player moves a cursor, selects a piece, then presses a direction to swap
//! it with that neighbour (the keyboard equivalent of dragging a piece onto the
//! next cell). Pressing select again, or cancel, drops the selection.

use crate::types::{Cell, Direction, GameAction, SwapRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    columns: u8,
    rows: u8,
    cursor: Cell,
    selected: Option<Cell>,
}

impl Selector {
    /// Cursor starts at the bottom-left cell.
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cursor: Cell::new(0, 0),
            selected: None,
        }
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Adopt new grid dimensions (e.g. after a restart), clamping the cursor.
    pub fn resize(&mut self, columns: u8, rows: u8) {
        self.columns = columns;
        self.rows = rows;
        self.cursor = Cell::new(
            self.cursor.column.min(columns.saturating_sub(1)),
            self.cursor.row.min(rows.saturating_sub(1)),
        );
        self.selected = None;
    }

    /// Apply one action. Returns a swap when a selected piece is pushed toward a neighbour.
    ///
    /// Actions that do not concern the cursor are ignored.
    pub fn apply(&mut self, action: GameAction) -> Option<SwapRequest> {
        match action {
            GameAction::Move(dir) => self.step(dir),
            GameAction::Select => {
                if self.selected == Some(self.cursor) {
                    self.selected = None;
                } else {
                    self.selected = Some(self.cursor);
                }
                None
            }
            GameAction::Cancel => {
                self.selected = None;
                None
            }
            _ => None,
        }
    }

    fn step(&mut self, dir: Direction) -> Option<SwapRequest> {
        let next = self.cursor.step(dir, self.columns, self.rows)?;
        let swap = self.selected.take().map(|from| SwapRequest::new(from, next));
        self.cursor = next;
        swap
    }
}
