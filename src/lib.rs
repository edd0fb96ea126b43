//! TUI Match-3 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_match3::{core,input,term,types}` so the
//! binaries, integration tests and benches share one import path. The only code
//! living here is [`frontend`], the glue both binaries drive the engine through.

pub use tui_match3_core as core;
pub use tui_match3_input as input;
pub use tui_match3_term as term;
pub use tui_match3_types as types;

pub mod frontend;
