//! Keyboard to swap request, end to end through the selector

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_match3::input::{handle_key_event, should_quit, Selector};
use tui_match3::types::{Cell, SwapRequest};

fn press(selector: &mut Selector, keys: &[KeyCode]) -> Vec<SwapRequest> {
    keys.iter()
        .filter_map(|&code| handle_key_event(KeyEvent::from(code)))
        .filter_map(|action| selector.apply(action))
        .collect()
}

#[test]
fn test_vim_keys_select_and_swap_up() {
    let mut selector = Selector::new(8, 8);
    let swaps = press(
        &mut selector,
        &[
            KeyCode::Char('l'),
            KeyCode::Char('l'),
            KeyCode::Char(' '),
            KeyCode::Char('k'),
        ],
    );
    assert_eq!(swaps, vec![SwapRequest::new(Cell::new(2, 0), Cell::new(2, 1))]);
}

#[test]
fn test_escape_cancels_pending_selection() {
    let mut selector = Selector::new(8, 8);
    let swaps = press(
        &mut selector,
        &[KeyCode::Enter, KeyCode::Esc, KeyCode::Right],
    );
    assert!(swaps.is_empty());
    assert_eq!(selector.cursor(), Cell::new(1, 0));
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut selector = Selector::new(4, 4);
    let swaps = press(&mut selector, &[KeyCode::Char('z'), KeyCode::Tab, KeyCode::F(5)]);
    assert!(swaps.is_empty());
    assert_eq!(selector.cursor(), Cell::new(0, 0));
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}
