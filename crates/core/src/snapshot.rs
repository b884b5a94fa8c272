use crate::tiles::Tiles;
use crate::types::{Direction, GameOutcome, TerminalStatus, GRID_SIZE};

/// Owned copy of a session's visible state, for the rendering side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    /// Row values, `0` meaning empty
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub tiles: Tiles,
    pub score: u32,
    pub won: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub move_count: u32,
    pub last_direction: Option<Direction>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn status(&self) -> TerminalStatus {
        TerminalStatus {
            won: self.won,
            lost: self.game_over,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from(self.status())
    }

    /// Largest tile on the board, 0 when empty
    pub fn highest_tile(&self) -> u32 {
        self.board.iter().flatten().copied().max().unwrap_or(0)
    }
}
