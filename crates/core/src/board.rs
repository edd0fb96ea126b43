//! Board module - owns the grid of piece identities
//!
//! The board is a `columns x rows` grid where each slot can be empty or hold a
//! piece type. Uses a flat vector (row-major, `row * columns + column`) for cache
//! locality; dimensions are fixed for the board's lifetime.
//!
//! Coordinates: `(column, row)` with row 0 at the bottom.
//!
//! Out-of-range cells are a caller contract breach: every accessor panics on
//! them instead of clamping.

use crate::types::{Cell, PieceType, Slot};

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u8,
    rows: u8,
    /// Flat slots, row-major order (row * columns + column)
    slots: Vec<Slot>,
}

impl Board {
    /// Create an empty board. Both dimensions must be non-zero.
    pub fn new(columns: u8, rows: u8) -> Self {
        assert!(columns > 0 && rows > 0, "board dimensions must be positive");
        Self {
            columns,
            rows,
            slots: vec![None; columns as usize * rows as usize],
        }
    }

    /// Build a board from rows given bottom row first.
    ///
    /// All rows must have the same non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_core::Board;
    /// use tui_match3_core::types::{Cell, PieceType};
    ///
    /// let a = Some(PieceType(0));
    /// let b = Some(PieceType(1));
    /// let board = Board::from_rows(&[vec![a, b], vec![b, a]]);
    /// assert_eq!(board.get(Cell::new(1, 0)), b);
    /// assert_eq!(board.get(Cell::new(1, 1)), a);
    /// ```
    pub fn from_rows(rows: &[Vec<Slot>]) -> Self {
        assert!(!rows.is_empty(), "board needs at least one row");
        let columns = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == columns),
            "all rows must have the same length"
        );
        assert!(columns > 0 && columns <= u8::MAX as usize);
        assert!(rows.len() <= u8::MAX as usize);

        Self {
            columns: columns as u8,
            rows: rows.len() as u8,
            slots: rows.iter().flatten().copied().collect(),
        }
    }

    /// Build a fully occupied board from letters (`'A'` = `PieceType(0)`), bottom row
    /// first. `'.'` marks an empty slot.
    pub fn from_letters(rows: &[&str]) -> Self {
        let rows: Vec<Vec<Slot>> = rows
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '.' => None,
                        c => Some(PieceType(c.to_ascii_uppercase() as u8 - b'A')),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {} outside {}x{} board",
            cell,
            self.columns,
            self.rows
        );
        cell.row as usize * self.columns as usize + cell.column as usize
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// True when the cell lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.column < self.columns && cell.row < self.rows
    }

    pub fn get(&self, cell: Cell) -> Slot {
        self.slots[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, slot: Slot) {
        let idx = self.index(cell);
        self.slots[idx] = slot;
    }

    /// Exchange the contents of two cells. No adjacency check.
    pub fn swap(&mut self, a: Cell, b: Cell) {
        let ia = self.index(a);
        let ib = self.index(b);
        self.slots.swap(ia, ib);
    }

    /// True iff no slot is empty.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of pieces of each kind, indexed by `PieceType::id`.
    pub fn piece_counts(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for piece in self.slots.iter().flatten() {
            let id = piece.id() as usize;
            if counts.len() <= id {
                counts.resize(id + 1, 0);
            }
            counts[id] += 1;
        }
        counts
    }

    /// All cells in scan order (row 0 first, left to right).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Cell::new(column, row)))
    }

    /// Visit every cell with its contents in scan order.
    pub fn for_each_cell(&self, mut f: impl FnMut(Cell, Slot)) {
        for (idx, slot) in self.slots.iter().enumerate() {
            let column = (idx % self.columns as usize) as u8;
            let row = (idx / self.columns as usize) as u8;
            f(Cell::new(column, row), *slot);
        }
    }

    /// Raw slots in row-major order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Rows as letter strings, bottom row first. Handy in assertions and logs.
    pub fn to_letters(&self) -> Vec<String> {
        self.slots
            .chunks(self.columns as usize)
            .map(|row| {
                row.iter()
                    .map(|s| s.map(|p| p.letter()).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}
