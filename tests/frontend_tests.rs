//! Front-end glue tests - selector to engine wiring and status messages

use tui_match3::core::{Board, CascadeResult, Game, GameConfig, SimpleRng};
use tui_match3::frontend::{describe, Session, StatusLine};
use tui_match3::types::{Cell, Direction, GameAction, PieceType, SwapRequest};

fn session_on(rows: &[&str]) -> Session {
    let board = Board::from_letters(rows);
    let config = GameConfig::new(board.columns(), board.rows(), PieceType::palette(4));
    Session::new(Game::with_board(config, board, SimpleRng::new(21), 21).unwrap())
}

#[test]
fn test_select_and_push_plays_a_swap() {
    let mut session = session_on(&["AABA", "CDCD", "DCDC"]);
    session.apply(GameAction::Move(Direction::Right));
    session.apply(GameAction::Move(Direction::Right));
    session.apply(GameAction::Select);
    assert_eq!(session.game.moves(), 0);

    session.apply(GameAction::Move(Direction::Right));
    assert_eq!(session.game.moves(), 1);
    assert!(session.game.score() >= 30);
    assert!(session.status_text().unwrap().starts_with('+'));
    assert_eq!(session.selector.selected(), None);
    assert_eq!(session.selector.cursor(), Cell::new(3, 0));
}

#[test]
fn test_reverted_swap_reports_no_match() {
    let mut session = session_on(&["ABAA", "CDCD", "DCDC"]);
    let before = session.game.board().clone();
    session.apply(GameAction::Move(Direction::Right));
    session.apply(GameAction::Select);
    session.apply(GameAction::Move(Direction::Right));

    assert_eq!(session.game.board(), &before);
    assert_eq!(session.status_text(), Some("No match - swap reverted"));
}

#[test]
fn test_cursor_moves_do_not_touch_status() {
    let mut session = session_on(&["AABA", "CDCD", "DCDC"]);
    session.apply(GameAction::Move(Direction::Up));
    session.apply(GameAction::Select);
    session.apply(GameAction::Cancel);
    assert!(session.status.is_none());
    assert_eq!(session.game.moves(), 0);
}

#[test]
fn test_hint_is_shown_until_next_swap() {
    let mut session = session_on(&["AABA", "CDCD", "DCDC"]);
    assert_eq!(session.visible_hint(), None);

    session.apply(GameAction::Hint);
    let hint = session.visible_hint().unwrap();
    assert_eq!(Some(hint), session.game.find_legal_move());

    session.apply(GameAction::Select);
    session.apply(GameAction::Move(Direction::Right));
    assert_eq!(session.visible_hint(), None);
}

#[test]
fn test_reset_score_and_restart() {
    let mut session = session_on(&["AABA", "CDCD", "DCDC"]);
    session
        .game
        .request_swap(Cell::new(2, 0), Cell::new(3, 0))
        .unwrap();
    let best = session.game.best_score();

    session.apply(GameAction::ResetScore);
    assert_eq!(session.game.score(), 0);
    assert_eq!(session.game.best_score(), best);
    assert_eq!(session.status_text(), Some("Score reset"));

    session.apply(GameAction::Restart);
    assert_eq!(session.game.moves(), 0);
    assert!(session.game.board().is_full());
    assert!(session.status_text().unwrap().starts_with("New board"));
}

#[test]
fn test_describe_summaries() {
    let reverted = CascadeResult {
        swap: Some(SwapRequest::new(Cell::new(0, 0), Cell::new(1, 0))),
        ..CascadeResult::default()
    };
    assert_eq!(describe(&reverted), "No match - swap reverted");

    let shuffled = CascadeResult {
        reshuffles: 1,
        ..CascadeResult::default()
    };
    assert_eq!(describe(&shuffled), "Board reshuffled");

    let stuck = CascadeResult {
        reshuffles: 10,
        degenerate: true,
        ..CascadeResult::default()
    };
    assert_eq!(describe(&stuck), "Board reshuffled - no moves left");
}

#[test]
fn test_describe_reports_chain() {
    let mut session = session_on(&["ACC", "ADB", "BAD", "CBA", "DAB"]);
    let result = session
        .game
        .request_swap(Cell::new(0, 2), Cell::new(1, 2))
        .unwrap();
    let text = describe(&result);
    assert!(text.starts_with(&format!("+{}", result.score_delta)));
    assert!(text.contains("chain x"));
}

#[test]
fn test_fresh_status_is_not_expired() {
    let status = StatusLine::new("hello");
    assert_eq!(status.text(), "hello");
    assert!(!status.expired());
}
