//! Scoring module - flat per-piece scoring
//!
//! Every removed piece is worth `match_score_value` points, regardless of run
//! length, chain depth or whether a reshuffle caused the match.

/// Points for one cascade pass.
pub fn calculate_pass_score(removed: usize, match_score_value: u32) -> u32 {
    u32::try_from(removed)
        .unwrap_or(u32::MAX)
        .saturating_mul(match_score_value)
}

/// Running score for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreKeeper {
    total: u32,
    /// Highest total seen since creation; survives `reset`.
    best: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points for a pass and return the awarded amount.
    pub fn award(&mut self, removed: usize, match_score_value: u32) -> u32 {
        let points = calculate_pass_score(removed, match_score_value);
        self.total = self.total.saturating_add(points);
        self.best = self.best.max(self.total);
        points
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}
