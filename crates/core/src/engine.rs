//! Cascade engine - swap validation, resolution and playability
//!
//! [`Game`] owns one board, its random source, the running score and the phase
//! guard. A resolution cycle (swap -> cascade -> stable) runs to completion
//! inside a single `&mut self` call:
//!
//! ```text
//! Idle -> SwapPending -> Reverted -> Idle
//!                     \-> Resolving -> Idle
//! ```
//!
//! After every resolution the engine checks that a legal move exists and
//! reshuffles (up to `max_reshuffle_attempts` times) when none does. Matches
//! created by a reshuffle cascade and score exactly like player matches.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
//! assert!(game.has_legal_move());
//!
//! let swap = game.hint().unwrap();
//! let result = game.request_swap(swap.a, swap.b).unwrap();
//! assert!(result.accepted);
//! assert!(game.score() >= 30);
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, DegenerateBoard, InvalidMove};
use crate::gravity::{settle, Fall, Refill};
use crate::matcher::{find_match_groups, has_any_match, MatchGroup};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::ScoreKeeper;
use crate::shuffle::reshuffle;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, PieceType, Slot, SwapRequest, MIN_RUN_LENGTH};

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u32 = 1;

/// Passes after which a cascade is reported as suspiciously long.
const LONG_CASCADE_PASSES: u32 = 256;

/// Resolution phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for a request
    Idle,
    /// Tentative swap applied, not yet evaluated
    SwapPending,
    /// Matches are being removed and refilled
    Resolving,
}

/// One pass of the cascade loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// 1-based pass number within the resolution
    pub pass: u32,
    pub groups: Vec<MatchGroup>,
    /// Deduplicated cells removed in this pass, ordered column by column
    pub removed: Vec<Cell>,
    pub falls: Vec<Fall>,
    pub refills: Vec<Refill>,
    pub score: u32,
}

/// Accumulated outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeResult {
    /// The swap that triggered this result (`None` for reshuffles)
    pub swap: Option<SwapRequest>,
    /// The swap produced a match and was committed
    pub accepted: bool,
    pub steps: Vec<CascadeStep>,
    pub removed_count: usize,
    pub score_delta: u32,
    /// Reshuffles performed (requested or automatic)
    pub reshuffles: u32,
    /// No legal move remains after the bounded reshuffle attempts
    pub degenerate: bool,
}

impl CascadeResult {
    fn for_swap(swap: SwapRequest) -> Self {
        Self {
            swap: Some(swap),
            ..Self::default()
        }
    }

    /// Any pass removed pieces.
    pub fn matched(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn reshuffled(&self) -> bool {
        self.reshuffles > 0
    }

    /// Number of passes that removed pieces.
    pub fn chain(&self) -> usize {
        self.steps.len()
    }

    /// Every removed cell, pass by pass. A cell can appear once per pass.
    pub fn removed(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().flat_map(|s| s.removed.iter().copied())
    }

    /// Every refilled cell with its new piece, pass by pass.
    pub fn refilled(&self) -> impl Iterator<Item = Refill> + '_ {
        self.steps.iter().flat_map(|s| s.refills.iter().copied())
    }

    /// Escalate the degenerate signal into an error.
    pub fn check_degenerate(&self) -> Result<(), DegenerateBoard> {
        if self.degenerate {
            Err(DegenerateBoard {
                attempts: self.reshuffles,
            })
        } else {
            Ok(())
        }
    }
}

/// One game session: board, randomness, score and phase guard.
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SimpleRng> {
    config: GameConfig,
    board: Board,
    rng: R,
    score: ScoreKeeper,
    phase: Phase,
    seed: u32,
    moves: u32,
    degenerate: bool,
    /// Legal move found by the last playability check
    hint: Option<SwapRequest>,
}

impl Game<SimpleRng> {
    /// Create a game with the default LCG seeded from the config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self::with_rng(config, SimpleRng::new(seed), seed)
    }

    /// Start over with a new seed. Score and move counters are zeroed.
    pub fn restart_with_seed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.seed = seed;
        self.restart();
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game drawing from an injected random source.
    ///
    /// `seed` is informational (shown in snapshots); `rng` is used as-is.
    pub fn with_rng(config: GameConfig, rng: R, seed: u32) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected game configuration");
            return Err(err);
        }

        let mut game = Self {
            board: Board::new(config.columns, config.rows),
            config,
            rng,
            score: ScoreKeeper::new(),
            phase: Phase::Idle,
            seed,
            moves: 0,
            degenerate: false,
            hint: None,
        };
        game.generate_board();
        Ok(game)
    }

    /// Start from a prepared board instead of a generated one.
    ///
    /// The board dimensions override the configured ones. The board is taken as-is:
    /// existing matches stay until the next resolution. Used for replays,
    /// puzzles and tests.
    pub fn with_board(
        mut config: GameConfig,
        board: Board,
        rng: R,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        config.columns = board.columns();
        config.rows = board.rows();
        config.validate()?;

        let hint = find_legal_move(&board);
        Ok(Self {
            config,
            board,
            rng,
            score: ScoreKeeper::new(),
            phase: Phase::Idle,
            seed,
            moves: 0,
            degenerate: hint.is_none(),
            hint,
        })
    }

    /// Build a fresh board from the current random source.
    ///
    /// Clears the phase guard, so this also recovers an engine whose resolution
    /// was interrupted by a panic.
    pub fn restart(&mut self) {
        self.score.reset();
        self.moves = 0;
        self.phase = Phase::Idle;
        self.generate_board();
    }

    /// Swap two neighbouring cells and resolve the resulting cascade.
    ///
    /// Rejected requests leave the board untouched. A swap that creates no match is
    /// reverted exactly and reported with `accepted == false`.
    pub fn request_swap(&mut self, a: Cell, b: Cell) -> Result<CascadeResult, InvalidMove> {
        if self.phase != Phase::Idle {
            return Err(InvalidMove::ResolutionInProgress);
        }
        for cell in [a, b] {
            if !self.board.contains(cell) {
                return Err(InvalidMove::OutOfBounds(cell));
            }
        }
        if !a.is_neighbor(b) {
            return Err(InvalidMove::NotAdjacent(a, b));
        }
        for cell in [a, b] {
            if self.board.get(cell).is_none() {
                return Err(InvalidMove::EmptyCell(cell));
            }
        }

        let swap = SwapRequest::new(a, b);
        let mut result = CascadeResult::for_swap(swap);

        self.phase = Phase::SwapPending;
        self.board.swap(a, b);

        if !has_any_match(&self.board) {
            self.board.swap(a, b);
            self.phase = Phase::Idle;
            debug!(%a, %b, "swap produced no match, reverted");
            return Ok(result);
        }

        self.phase = Phase::Resolving;
        result.accepted = true;
        self.moves += 1;
        self.resolve(&mut result);
        self.ensure_playable(&mut result);
        self.phase = Phase::Idle;

        debug!(
            %a,
            %b,
            chain = result.chain(),
            removed = result.removed_count,
            score = result.score_delta,
            "swap resolved"
        );
        Ok(result)
    }

    /// Reshuffle on demand, then resolve and re-check playability.
    pub fn force_reshuffle(&mut self) -> Result<CascadeResult, InvalidMove> {
        if self.phase != Phase::Idle {
            return Err(InvalidMove::ResolutionInProgress);
        }

        self.phase = Phase::Resolving;
        let mut result = CascadeResult::default();

        reshuffle(&mut self.board, &mut self.rng);
        result.reshuffles += 1;
        info!("board reshuffled on request");

        self.resolve(&mut result);
        self.ensure_playable(&mut result);
        self.phase = Phase::Idle;
        Ok(result)
    }

    /// Remove matches, settle and repeat until a pass finds nothing.
    fn resolve(&mut self, result: &mut CascadeResult) {
        let mut pass = 0u32;
        loop {
            let groups = find_match_groups(&self.board);
            if groups.is_empty() {
                break;
            }
            pass += 1;
            if pass == LONG_CASCADE_PASSES {
                warn!(pass, "cascade is unusually long");
            }

            let removed: Vec<Cell> = groups
                .iter()
                .flat_map(|g| g.cells.iter().copied())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            for &cell in &removed {
                self.board.set(cell, None);
            }

            let score = self
                .score
                .award(removed.len(), self.config.match_score_value);
            let settled = settle(&mut self.board, &self.config.piece_types, &mut self.rng);
            debug_assert_eq!(settled.refills.len(), removed.len());

            debug!(pass, removed = removed.len(), score, "cascade pass");

            result.removed_count += removed.len();
            result.score_delta = result.score_delta.saturating_add(score);
            result.steps.push(CascadeStep {
                pass,
                groups,
                removed,
                falls: settled.falls,
                refills: settled.refills,
                score,
            });
        }
    }

    /// Reshuffle until a legal move exists or the attempt budget runs out.
    fn ensure_playable(&mut self, result: &mut CascadeResult) {
        self.hint = find_legal_move(&self.board);

        let mut attempts = 0;
        while self.hint.is_none() && attempts < self.config.max_reshuffle_attempts {
            attempts += 1;
            reshuffle(&mut self.board, &mut self.rng);
            info!(attempt = attempts, "no legal move, board reshuffled");
            self.resolve(result);
            self.hint = find_legal_move(&self.board);
        }

        result.reshuffles += attempts;
        self.degenerate = self.hint.is_none();
        result.degenerate = self.degenerate;
        if self.degenerate {
            warn!(attempts, "no legal move survives reshuffling");
        }
    }

    /// Fill the board with no pre-existing matches, retrying when the layout has no
    /// legal move.
    fn generate_board(&mut self) {
        let max_attempts = self.config.max_reshuffle_attempts.max(1);
        for attempt in 1..=max_attempts {
            fill_without_matches(&mut self.board, &self.config.piece_types, &mut self.rng);
            self.hint = find_legal_move(&self.board);
            if self.hint.is_some() {
                break;
            }
            debug!(attempt, "generated board has no legal move");
        }

        self.degenerate = self.hint.is_none();
        if self.degenerate {
            warn!(
                columns = self.config.columns,
                rows = self.config.rows,
                "could not generate a board with a legal move"
            );
        }
        info!(
            columns = self.config.columns,
            rows = self.config.rows,
            kinds = self.config.piece_types.len(),
            seed = self.seed,
            "board created"
        );
    }

    /// Pure probe: is there any swap that would create a match?
    pub fn has_legal_move(&self) -> bool {
        find_legal_move(&self.board).is_some()
    }

    /// First legal move in scan order, if any.
    pub fn find_legal_move(&self) -> Option<SwapRequest> {
        find_legal_move(&self.board)
    }

    /// Legal move recorded by the last resolution (cheap; no scan).
    pub fn hint(&self) -> Option<SwapRequest> {
        self.hint
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn best_score(&self) -> u32 {
        self.score.best()
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
        info!("score reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Accepted swaps since the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Read-only traversal for renderers.
    pub fn for_each_cell(&self, f: impl FnMut(Cell, Slot)) {
        self.board.for_each_cell(f);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.board.columns();
        out.rows = self.board.rows();
        out.board.clear();
        out.board.extend_from_slice(self.board.slots());
        out.score = self.score.total();
        out.best_score = self.score.best();
        out.moves = self.moves;
        out.seed = self.seed;
        out.hint = self.hint;
        out.degenerate = self.degenerate;
        out.resolving = self.phase != Phase::Idle;
    }
}

/// First swap (in scan order, right then up) that would create a match.
///
/// Works on a scratch copy, so the board itself is never touched.
pub fn find_legal_move(board: &Board) -> Option<SwapRequest> {
    let mut scratch = board.clone();
    for cell in board.cells() {
        if let Some(swap) = probe_cell(&mut scratch, cell) {
            return Some(swap);
        }
    }
    None
}

/// Every legal move, each neighbour pair reported once.
pub fn legal_moves(board: &Board) -> Vec<SwapRequest> {
    let mut scratch = board.clone();
    let mut out = Vec::new();
    for cell in board.cells() {
        for dir in [Direction::Right, Direction::Up] {
            if let Some(swap) = probe_pair(&mut scratch, cell, dir) {
                out.push(swap);
            }
        }
    }
    out
}

pub fn has_legal_move(board: &Board) -> bool {
    find_legal_move(board).is_some()
}

fn probe_cell(scratch: &mut Board, cell: Cell) -> Option<SwapRequest> {
    [Direction::Right, Direction::Up]
        .into_iter()
        .find_map(|dir| probe_pair(scratch, cell, dir))
}

/// Tentatively swap, check, swap back.
fn probe_pair(scratch: &mut Board, cell: Cell, dir: Direction) -> Option<SwapRequest> {
    let other = cell.step(dir, scratch.columns(), scratch.rows())?;
    if scratch.get(cell).is_none() || scratch.get(other).is_none() {
        return None;
    }
    if scratch.get(cell) == scratch.get(other) {
        return None;
    }

    scratch.swap(cell, other);
    let hit = has_any_match(scratch);
    scratch.swap(cell, other);

    hit.then_some(SwapRequest::new(cell, other))
}

/// Fill every slot so that no run of [`MIN_RUN_LENGTH`] exists.
///
/// Cells are filled in scan order; a kind is excluded when the two cells to the
/// left or the two cells below already hold it. With at least three kinds there
/// is always a candidate left.
pub fn fill_without_matches(board: &mut Board, kinds: &[PieceType], rng: &mut impl RandomSource) {
    board.clear();
    let reach = (MIN_RUN_LENGTH - 1) as u8;
    let cells: Vec<Cell> = board.cells().collect();

    let mut allowed = Vec::with_capacity(kinds.len());
    for cell in cells {
        let left = same_behind(board, cell, Direction::Left, reach);
        let below = same_behind(board, cell, Direction::Down, reach);

        allowed.clear();
        allowed.extend(
            kinds
                .iter()
                .copied()
                .filter(|k| Some(*k) != left && Some(*k) != below),
        );
        board.set(cell, Some(rng.pick_piece(&allowed)));
    }
}

/// The piece shared by the `reach` cells behind `cell` in `dir`, if they all agree.
fn same_behind(board: &Board, cell: Cell, dir: Direction, reach: u8) -> Option<PieceType> {
    let (columns, rows) = (board.columns(), board.rows());
    let mut cur = cell.step(dir, columns, rows)?;
    let piece = board.get(cur)?;
    for _ in 1..reach {
        cur = cur.step(dir, columns, rows)?;
        if board.get(cur) != Some(piece) {
            return None;
        }
    }
    Some(piece)
}
