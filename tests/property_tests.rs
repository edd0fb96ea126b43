//! Property-based tests for the match-3 rules.
//!
//! **Property 1**: generated boards are full, stable and (unless flagged) playable
//! **Property 2**: a resolved swap leaves a full, match-free board and scores 10 per piece
//! **Property 3**: a swap that creates no match restores the board exactly
//! **Property 4**: reshuffle preserves the piece multiset and the holes
//! **Property 5**: collapse is a stable compaction toward row 0
//! **Property 6**: the match set equals the cells on a line of 3+ equal pieces

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use tui_match3::core::engine::fill_without_matches;
use tui_match3::core::matcher::has_any_match;
use tui_match3::core::{
    collapse_column, find_matches, legal_moves, reshuffle, Board, Game, GameConfig, SimpleRng,
};
use tui_match3::types::{Cell, Direction, PieceType, Slot};

/// (columns, rows, kinds, seed)
fn game_params() -> impl Strategy<Value = (u8, u8, u8, u32)> {
    (3u8..=8, 3u8..=8, 3u8..=6, any::<u32>())
}

/// Arbitrary board, holes allowed, matches allowed.
fn arbitrary_board() -> impl Strategy<Value = Board> {
    (1usize..=7, 1usize..=7).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(
            prop::collection::vec(prop::option::weighted(0.8, 0u8..4), columns),
            rows,
        )
        .prop_map(|rows| {
            let rows: Vec<Vec<Slot>> = rows
                .into_iter()
                .map(|r| r.into_iter().map(|s| s.map(PieceType)).collect())
                .collect();
            Board::from_rows(&rows)
        })
    })
}

fn new_game(columns: u8, rows: u8, kinds: u8, seed: u32) -> Game {
    Game::new(GameConfig::new(columns, rows, PieceType::palette(kinds)).with_seed(seed)).unwrap()
}

/// Length of the line of equal pieces through `cell` along `forward`/`back`.
fn line_len(board: &Board, cell: Cell, forward: Direction, back: Direction) -> usize {
    let Some(piece) = board.get(cell) else {
        return 0;
    };
    let (columns, rows) = (board.columns(), board.rows());
    let mut len = 1;
    for dir in [forward, back] {
        let mut cur = cell;
        while let Some(next) = cur.step(dir, columns, rows) {
            if board.get(next) != Some(piece) {
                break;
            }
            len += 1;
            cur = next;
        }
    }
    len
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generated_board_is_stable((columns, rows, kinds, seed) in game_params()) {
        let game = new_game(columns, rows, kinds, seed);
        prop_assert!(game.board().is_full());
        prop_assert!(find_matches(game.board()).is_empty());

        if !game.is_degenerate() {
            let hint = game.hint().unwrap();
            let mut probe = game.board().clone();
            probe.swap(hint.a, hint.b);
            prop_assert!(has_any_match(&probe));
        }
    }

    #[test]
    fn prop_resolved_swap_settles_board(
        (columns, rows, kinds, seed) in game_params(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = new_game(columns, rows, kinds, seed);
        let moves = legal_moves(game.board());
        prop_assume!(!moves.is_empty());
        let swap = moves[pick.index(moves.len())];

        let result = game.request_swap(swap.a, swap.b).unwrap();
        prop_assert!(result.accepted);
        prop_assert!(result.chain() >= 1);
        prop_assert!(game.board().is_full());
        prop_assert!(find_matches(game.board()).is_empty());

        prop_assert_eq!(result.score_delta as usize, result.removed_count * 10);
        prop_assert_eq!(game.score(), result.score_delta);
        for step in &result.steps {
            prop_assert!(step.removed.len() >= 3);
            prop_assert_eq!(step.refills.len(), step.removed.len());
            prop_assert_eq!(step.score as usize, step.removed.len() * 10);
        }
        if !result.degenerate {
            prop_assert!(game.has_legal_move());
        }
    }

    #[test]
    fn prop_non_matching_swap_restores_board(
        (columns, rows, kinds, seed) in game_params(),
        pick in any::<prop::sample::Index>(),
        up in any::<bool>(),
    ) {
        let mut game = new_game(columns, rows, kinds, seed);
        let board = game.board().clone();
        let cells: Vec<Cell> = board.cells().collect();
        let a = cells[pick.index(cells.len())];
        let dir = if up { Direction::Up } else { Direction::Right };
        let Some(b) = a.step(dir, columns, rows) else {
            return Ok(());
        };

        let mut probe = board.clone();
        probe.swap(a, b);
        prop_assume!(!has_any_match(&probe));

        let result = game.request_swap(a, b).unwrap();
        prop_assert!(!result.accepted);
        prop_assert_eq!(game.board(), &board);
        prop_assert_eq!(game.score(), 0);
    }

    #[test]
    fn prop_reshuffle_preserves_multiset(board in arbitrary_board(), seed in any::<u32>()) {
        let mut shuffled = board.clone();
        let moved = reshuffle(&mut shuffled, &mut SimpleRng::new(seed));

        prop_assert_eq!(moved, board.occupied_count());
        prop_assert_eq!(shuffled.piece_counts(), board.piece_counts());
        for cell in board.cells() {
            prop_assert_eq!(shuffled.get(cell).is_some(), board.get(cell).is_some());
        }
    }

    #[test]
    fn prop_collapse_is_stable_compaction(board in arbitrary_board()) {
        let mut collapsed = board.clone();
        for column in 0..board.columns() {
            let before: Vec<PieceType> = (0..board.rows())
                .filter_map(|row| board.get(Cell::new(column, row)))
                .collect();

            let falls = collapse_column(&mut collapsed, column);
            prop_assert!(falls.iter().all(|f| f.to.row < f.from.row));

            let after: Vec<Slot> = (0..board.rows())
                .map(|row| collapsed.get(Cell::new(column, row)))
                .collect();
            let expected: Vec<Slot> = before
                .iter()
                .copied()
                .map(Some)
                .chain(std::iter::repeat(None))
                .take(board.rows() as usize)
                .collect();
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn prop_match_set_equals_long_lines(board in arbitrary_board()) {
        let matches = find_matches(&board);
        for cell in board.cells() {
            let h = line_len(&board, cell, Direction::Right, Direction::Left);
            let v = line_len(&board, cell, Direction::Up, Direction::Down);
            let on_line = h >= 3 || v >= 3;
            prop_assert_eq!(matches.contains(&cell), on_line, "cell {}", cell);
        }
        prop_assert_eq!(has_any_match(&board), !matches.is_empty());
    }

    #[test]
    fn prop_fill_never_matches(
        (columns, rows, kinds, seed) in game_params(),
    ) {
        let mut board = Board::new(columns, rows);
        fill_without_matches(&mut board, &PieceType::palette(kinds), &mut SimpleRng::new(seed));
        prop_assert!(board.is_full());
        prop_assert!(!has_any_match(&board));
    }
}
