//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides the
//! cursor/selection state that turns those actions into swap requests.

pub mod map;
pub mod selector;

pub use tui_match3_types as types;

pub use map::{handle_key_event, should_quit};
pub use selector::Selector;
