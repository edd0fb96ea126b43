//! Glue between player intents and the engine, shared by the binaries.
//!
//! The terminal loop feeds every [`GameAction`] through [`Session::apply`], which
//! routes cursor actions to the [`Selector`] and engine actions to the [`Game`],
//! and turns the outcome into a one-line status message.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::core::{CascadeResult, Game, GameConfig};
use crate::input::Selector;
use crate::types::{GameAction, SwapRequest, STATUS_MESSAGE_MS};

/// Seed derived from the wall clock, for sessions that did not pin one.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Short human-readable summary of a resolution.
pub fn describe(result: &CascadeResult) -> String {
    let mut text = if result.swap.is_some() && !result.accepted {
        "No match - swap reverted".to_string()
    } else if result.matched() {
        let mut s = format!("+{} ({} pieces", result.score_delta, result.removed_count);
        if result.chain() > 1 {
            s.push_str(&format!(", chain x{}", result.chain()));
        }
        s.push(')');
        s
    } else {
        "Board reshuffled".to_string()
    };

    if result.degenerate {
        text.push_str(" - no moves left");
    } else if result.swap.is_some() && result.reshuffled() {
        text.push_str(" - reshuffled");
    }
    text
}

/// Message that disappears after a while.
#[derive(Debug, Clone)]
pub struct StatusLine {
    text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl StatusLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
            ttl: Duration::from_millis(STATUS_MESSAGE_MS as u64),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}

/// One interactive session: the game plus front-end state.
pub struct Session {
    pub game: Game,
    pub selector: Selector,
    pub show_hint: bool,
    pub status: Option<StatusLine>,
}

impl Session {
    pub fn new(game: Game) -> Self {
        let board = game.board();
        let selector = Selector::new(board.columns(), board.rows());
        Self {
            game,
            selector,
            show_hint: false,
            status: None,
        }
    }

    /// Build a session from configuration, picking a clock seed when none is set.
    pub fn from_config(mut config: GameConfig) -> Result<Self, crate::core::ConfigError> {
        config.seed = Some(config.seed.unwrap_or_else(clock_seed));
        Ok(Self::new(Game::new(config)?))
    }

    /// Hint currently worth drawing.
    pub fn visible_hint(&self) -> Option<SwapRequest> {
        if self.show_hint {
            self.game.hint()
        } else {
            None
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(StatusLine::text)
    }

    /// Drop the status line once it has been shown long enough.
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(StatusLine::expired) {
            self.status = None;
        }
    }

    pub fn apply(&mut self, action: GameAction) {
        debug!(action = action.as_str(), "action");
        let message = match action {
            GameAction::Hint => {
                self.show_hint = true;
                self.game
                    .hint()
                    .is_none()
                    .then(|| "No legal move".to_string())
            }
            GameAction::Reshuffle => Some(match self.game.force_reshuffle() {
                Ok(result) => describe(&result),
                Err(err) => err.to_string(),
            }),
            GameAction::ResetScore => {
                self.game.reset_score();
                Some("Score reset".to_string())
            }
            GameAction::Restart => {
                self.game.restart_with_seed(clock_seed());
                let board = self.game.board();
                self.selector.resize(board.columns(), board.rows());
                Some(format!("New board (seed {})", self.game.seed()))
            }
            GameAction::Move(_) | GameAction::Select | GameAction::Cancel => {
                let Some(swap) = self.selector.apply(action) else {
                    return;
                };
                self.show_hint = false;
                Some(match self.game.request_swap(swap.a, swap.b) {
                    Ok(result) => describe(&result),
                    Err(err) => err.to_string(),
                })
            }
        };

        if let Some(text) = message {
            self.status = Some(StatusLine::new(text));
        }
    }
}
