//! Game session - owns the state a single player's game needs
//!
//! Ties together the grid, score, spawn RNG, tile identities, settle gate and
//! the latched terminal flags. The engine functions it calls are pure; the
//! session is the only place state is kept between moves.

use log::debug;

use crate::config::SessionConfig;
use crate::grid::Grid;
use crate::moves::apply_move;
use crate::rng::SimpleRng;
use crate::settle::SettleGate;
use crate::snapshot::GameSnapshot;
use crate::spawn::{initial_grid, spawn_tile};
use crate::terminal::terminal_status;
use crate::tiles::{reconcile, TileIdAllocator, TileRecord, Tiles};
use crate::types::{Direction, GameOutcome, TerminalStatus};

/// Why a move request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The previous move is still inside its settle window
    Busy,
    /// No moves remain; only a reset is accepted
    GameOver,
}

/// What a successful move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub score_delta: u32,
    /// Running score after this move
    pub score: u32,
    /// Latched terminal flags after this move
    pub status: TerminalStatus,
    /// This move ended the game; report `score` to the score lists
    pub finished: bool,
}

/// Result of [`GameSession::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(RejectReason),
    /// The direction changes nothing; no tile was spawned
    Blocked,
    Moved(MoveReport),
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    tiles: Tiles,
    score: u32,
    rng: SimpleRng,
    ids: TileIdAllocator,
    gate: SettleGate,
    won: bool,
    lost: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Successful moves in the current episode.
    move_count: u32,
    last_direction: Option<Direction>,
}

impl GameSession {
    /// Start a game with the given configuration
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let mut ids = TileIdAllocator::new();
        let grid = initial_grid(&mut rng);
        let tiles = reconcile(&grid, &[], &mut ids);

        Self {
            grid,
            tiles,
            score: 0,
            rng,
            ids,
            gate: SettleGate::new(config.settle_delay_ms),
            won: false,
            lost: false,
            episode_id: 0,
            move_count: 0,
            last_direction: None,
        }
    }

    /// Start a game with the given seed and default settle delay
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SessionConfig::with_seed(seed))
    }

    /// Start a game from an explicit grid (puzzles, replays, tests)
    pub fn from_grid(grid: Grid, config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.ids.reset();
        session.grid = grid;
        session.tiles = reconcile(&grid, &[], &mut session.ids);
        let status = terminal_status(&grid);
        session.won = status.won;
        session.lost = status.lost;
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[TileRecord] {
        &self.tiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.lost
    }

    pub fn status(&self) -> TerminalStatus {
        TerminalStatus {
            won: self.won,
            lost: self.lost,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from(self.status())
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.gate.delay_ms()
    }

    /// Whether a move at `now_ms` would be rejected as busy
    pub fn is_busy(&self, now_ms: u64) -> bool {
        self.gate.is_settling(now_ms)
    }

    /// Clear the busy flag once the settle delay has elapsed
    pub fn settle(&mut self, now_ms: u64) -> bool {
        let cleared = self.gate.settle(now_ms);
        if cleared {
            self.last_direction = None;
        }
        cleared
    }

    /// Apply a direction: move, spawn, detect, reconcile, then arm the settle gate
    pub fn try_move(&mut self, direction: Direction, now_ms: u64) -> MoveOutcome {
        if self.lost {
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if self.gate.is_settling(now_ms) {
            debug!("move {} rejected: settling", direction.as_str());
            return MoveOutcome::Rejected(RejectReason::Busy);
        }

        let result = apply_move(&self.grid, direction);
        if !result.moved {
            return MoveOutcome::Blocked;
        }

        let grid = spawn_tile(&result.grid, &mut self.rng);
        let status = terminal_status(&grid);

        self.tiles = reconcile(&grid, &self.tiles, &mut self.ids);
        self.grid = grid;
        self.score = self.score.saturating_add(result.score_delta);
        self.move_count = self.move_count.wrapping_add(1);
        self.last_direction = Some(direction);

        if status.won && !self.won {
            debug!("episode {} reached the win value at score {}", self.episode_id, self.score);
        }
        self.won |= status.won;

        let finished = status.lost && !self.lost;
        if finished {
            debug!("episode {} over, final score {}", self.episode_id, self.score);
        }
        self.lost |= status.lost;

        self.gate.arm(now_ms);

        MoveOutcome::Moved(MoveReport {
            direction,
            score_delta: result.score_delta,
            score: self.score,
            status: self.status(),
            finished,
        })
    }

    /// Begin a brand-new game, continuing the same RNG stream
    pub fn reset(&mut self) {
        let seed = self.rng.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        let delay = self.gate.delay_ms();
        *self = Self::new(SessionConfig {
            seed,
            settle_delay_ms: delay,
        });
        self.episode_id = next_episode;
        debug!("episode {} started", self.episode_id);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u32_grid(&mut out.board);
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().copied());
        out.score = self.score;
        out.won = self.won;
        out.game_over = self.lost;
        out.episode_id = self.episode_id;
        out.move_count = self.move_count;
        out.last_direction = self.last_direction;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stuck_after_left() -> Grid {
        // Sliding left merges the two 2s; the spawn then fills the only gap.
        Grid::from_rows([
            [2, 2, 8, 16],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
            [32, 64, 128, 256],
        ])
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::with_seed(12345);

        assert_eq!(session.score(), 0);
        assert_eq!(session.episode_id(), 0);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.tiles().len(), 2);
        assert!(session.tiles().iter().all(|t| t.is_new));
        assert_eq!(session.outcome(), GameOutcome::Ongoing);
        assert!(!session.is_busy(0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameSession::with_seed(77);
        let b = GameSession::with_seed(77);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_move_spawns_and_arms_gate() {
        let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid, SessionConfig::with_seed(3));

        let outcome = session.try_move(Direction::Left, 1_000);
        let MoveOutcome::Moved(report) = outcome else {
            panic!("expected a move, got {:?}", outcome);
        };
        assert_eq!(report.score_delta, 4);
        assert_eq!(report.score, 4);
        assert!(!report.finished);
        assert_eq!(session.grid().get(0, 0), Some(Some(4)));
        assert_eq!(session.grid().tiles().count(), 2);
        assert_eq!(session.last_direction(), Some(Direction::Left));

        assert_eq!(
            session.try_move(Direction::Right, 1_100),
            MoveOutcome::Rejected(RejectReason::Busy)
        );
        assert!(session.settle(1_300));
        assert_eq!(session.last_direction(), None);
        assert!(session.try_move(Direction::Right, 1_300).moved());
    }

    #[test]
    fn test_blocked_move_does_not_arm_gate() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid, SessionConfig::default());

        assert_eq!(session.try_move(Direction::Left, 0), MoveOutcome::Blocked);
        assert_eq!(session.try_move(Direction::Up, 1), MoveOutcome::Blocked);
        assert!(!session.is_busy(2));
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_loss_latches_and_reports_finish_once() {
        let mut session = GameSession::from_grid(stuck_after_left(), SessionConfig::with_seed(9));

        let outcome = session.try_move(Direction::Left, 0);
        let MoveOutcome::Moved(report) = outcome else {
            panic!("expected a move, got {:?}", outcome);
        };
        // Row 0 becomes [4, 8, 16, spawn]; no spawn value (2 or 4) can pair with
        // its neighbours (16 to the left, 64 below).
        assert!(report.finished);
        assert!(report.status.lost);
        assert_eq!(session.outcome(), GameOutcome::Lost);

        assert_eq!(
            session.try_move(Direction::Right, 10_000),
            MoveOutcome::Rejected(RejectReason::GameOver)
        );
    }

    #[test]
    fn test_win_latches_and_play_continues() {
        let grid = Grid::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid, SessionConfig::with_seed(4));

        let outcome = session.try_move(Direction::Left, 0);
        assert!(outcome.moved());
        assert!(session.won());
        assert_eq!(session.outcome(), GameOutcome::Won);
        assert_eq!(session.score(), 2048);

        assert!(session.try_move(Direction::Right, 1_000).moved());
        assert!(session.won());
    }

    #[test]
    fn test_reset_starts_new_episode() {
        let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid, SessionConfig::with_seed(8));
        session.try_move(Direction::Left, 0);
        assert!(session.score() > 0);

        session.reset();
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.tiles().len(), 2);
        assert_eq!(session.tiles()[0].id.get(), 0);
        assert!(!session.is_busy(0));
        assert_eq!(session.outcome(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let session = GameSession::with_seed(21);
        let snap = session.snapshot();
        assert_eq!(snap.board, session.grid().to_rows());
        assert_eq!(snap.tiles.as_slice(), session.tiles());
        assert_eq!(snap.score, 0);
        assert!(snap.playable());
    }
}
