//! Match detection - horizontal and vertical runs of 3+ identical pieces
//!
//! A run is a maximal contiguous sequence of equal, non-empty slots along one
//! row or column. Runs of length >= [`MIN_RUN_LENGTH`] qualify. The match set of
//! a pass is the union of all qualifying runs' cells, so a cell that sits in both
//! a horizontal and a vertical run is counted once.
//!
//! Everything here is deterministic and O(columns * rows).

use std::collections::{BTreeMap, BTreeSet};

use crate::board::Board;
use crate::types::{Cell, PieceType, MIN_RUN_LENGTH};

/// Orientation of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal qualifying run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub piece: PieceType,
    pub axis: Axis,
    /// Leftmost (horizontal) or lowest (vertical) cell.
    pub start: Cell,
    pub len: u8,
}

impl Run {
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let start = self.start;
        let axis = self.axis;
        (0..self.len).map(move |i| match axis {
            Axis::Horizontal => Cell::new(start.column + i, start.row),
            Axis::Vertical => Cell::new(start.column, start.row + i),
        })
    }
}

/// Runs that share at least one cell, merged (e.g. L and T shapes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub piece: PieceType,
    pub cells: BTreeSet<Cell>,
    pub runs: Vec<Run>,
}

/// All qualifying runs, rows first (bottom to top), then columns (left to right).
pub fn find_runs(board: &Board) -> Vec<Run> {
    let mut runs = Vec::new();

    for row in 0..board.rows() {
        scan_line(board, board.columns(), |i| Cell::new(i, row), Axis::Horizontal, &mut runs);
    }
    for column in 0..board.columns() {
        scan_line(board, board.rows(), |i| Cell::new(column, i), Axis::Vertical, &mut runs);
    }

    runs
}

fn scan_line(
    board: &Board,
    len: u8,
    at: impl Fn(u8) -> Cell,
    axis: Axis,
    out: &mut Vec<Run>,
) {
    let mut i = 0u8;
    while i < len {
        let Some(piece) = board.get(at(i)) else {
            i += 1;
            continue;
        };

        let start = i;
        i += 1;
        while i < len && board.get(at(i)) == Some(piece) {
            i += 1;
        }

        let run_len = i - start;
        if run_len as usize >= MIN_RUN_LENGTH {
            out.push(Run {
                piece,
                axis,
                start: at(start),
                len: run_len,
            });
        }
    }
}

/// Union of every cell in a qualifying run.
pub fn find_matches(board: &Board) -> BTreeSet<Cell> {
    find_runs(board).iter().flat_map(Run::cells).collect()
}

/// Qualifying runs merged into connected groups by shared cells.
pub fn find_match_groups(board: &Board) -> Vec<MatchGroup> {
    let runs = find_runs(board);

    // Union-find over run indices.
    let mut parent: Vec<usize> = (0..runs.len()).collect();
    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let mut owner: BTreeMap<Cell, usize> = BTreeMap::new();
    for (idx, run) in runs.iter().enumerate() {
        for cell in run.cells() {
            if let Some(&other) = owner.get(&cell) {
                let (ra, rb) = (root(&mut parent, idx), root(&mut parent, other));
                if ra != rb {
                    parent[ra.max(rb)] = ra.min(rb);
                }
            } else {
                owner.insert(cell, idx);
            }
        }
    }

    let mut groups: BTreeMap<usize, MatchGroup> = BTreeMap::new();
    for (idx, run) in runs.iter().enumerate() {
        let r = root(&mut parent, idx);
        let group = groups.entry(r).or_insert_with(|| MatchGroup {
            piece: run.piece,
            cells: BTreeSet::new(),
            runs: Vec::new(),
        });
        group.cells.extend(run.cells());
        group.runs.push(*run);
    }

    groups.into_values().collect()
}

/// True if any qualifying run exists. Allocation-free; stops at the first hit.
pub fn has_any_match(board: &Board) -> bool {
    let need = MIN_RUN_LENGTH as u8;
    let (columns, rows) = (board.columns(), board.rows());

    for row in 0..rows {
        for column in 0..columns.saturating_sub(need - 1) {
            if same_run(board, Cell::new(column, row), |k| Cell::new(column + k, row)) {
                return true;
            }
        }
    }
    for column in 0..columns {
        for row in 0..rows.saturating_sub(need - 1) {
            if same_run(board, Cell::new(column, row), |k| Cell::new(column, row + k)) {
                return true;
            }
        }
    }
    false
}

#[inline]
fn same_run(board: &Board, first: Cell, at: impl Fn(u8) -> Cell) -> bool {
    let Some(piece) = board.get(first) else {
        return false;
    };
    (1..MIN_RUN_LENGTH as u8).all(|k| board.get(at(k)) == Some(piece))
}
