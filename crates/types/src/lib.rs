//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, input mapping, score lists, rendering).
//!
//! # Grid Dimensions
//!
//! - **Size**: 4x4 cells, fixed for the lifetime of a game
//! - **Coordinates**: `(row, col)`, 0-indexed, row increasing downward
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `SPAWN_LOW_VALUE` | 2 | Common spawned tile |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawned tile |
//! | `SPAWN_HIGH_ODDS` | 10 | One in ten spawns is a 4 |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh grid |
//! | `SETTLE_DELAY_MS` | 300 | Window after a move during which moves are rejected |
//! | `MIN_SWIPE_DISTANCE` | 50 | Minimum swipe travel before it counts as a move |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, GRID_SIZE, WIN_VALUE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(Direction::from_str("h"), Some(Direction::Left));
//! assert_eq!(dir.as_str(), "UP");
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_VALUE, 2048);
//! ```

/// Grid width and height in cells (4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid (16)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_VALUE: u32 = 2048;

/// Value of the common spawned tile (90% of spawns)
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile (10% of spawns)
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// One spawn in `SPAWN_HIGH_ODDS` is a [`SPAWN_HIGH_VALUE`] tile
pub const SPAWN_HIGH_ODDS: u32 = 10;

/// Number of tiles placed on a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Settle window after a successful move (300ms)
pub const SETTLE_DELAY_MS: u64 = 300;

/// Minimum swipe travel (in screen units) on either axis
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;


/// The four slide directions
///
/// A closed enumeration: there are no diagonal or combined moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order (up, down, left, right)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts the full names plus the `wasd` and `hjkl` single-letter aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("k"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "w" | "k" => Some(Direction::Up),
            "down" | "s" | "j" => Some(Direction::Down),
            "left" | "a" | "h" => Some(Direction::Left),
            "right" | "d" | "l" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Upper-case name (`UP`, `DOWN`, `LEFT`, `RIGHT`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile with a positive power-of-two value
pub type Cell = Option<u32>;

/// A grid coordinate, row increasing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index
    #[inline]
    pub const fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

/// Terminal conditions of a grid, reported side by side.
///
/// A grid can hold the win value and have no moves left at the same time;
/// both flags are surfaced and the caller decides which one to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalStatus {
    pub won: bool,
    pub lost: bool,
}

impl TerminalStatus {
    pub fn is_terminal(&self) -> bool {
        self.won || self.lost
    }
}

/// Single-value view of a [`TerminalStatus`]
///
/// - **Ongoing**: neither flag set
/// - **Won**: the win value was reached and moves remain
/// - **Lost**: no moves remain (takes precedence, since only loss ends play)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl From<TerminalStatus> for GameOutcome {
    fn from(status: TerminalStatus) -> Self {
        if status.lost {
            GameOutcome::Lost
        } else if status.won {
            GameOutcome::Won
        } else {
            GameOutcome::Ongoing
        }
    }
}
