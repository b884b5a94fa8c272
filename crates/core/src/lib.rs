//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the 4x4 sliding-tile merge puzzle and the
//! session state that drives them. It has **zero dependencies** on UI,
//! input devices, storage or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a function over explicit input
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Moves, spawns and tile reconciliation do not allocate
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid of optional tile values, transpose/flip transforms
//! - [`line`]: slide-and-merge of a single line toward index 0
//! - [`moves`]: direction handling via re-orientation, aggregate score and moved flag
//! - [`rng`]: seeded LCG used for spawns
//! - [`spawn`]: random 2/4 tile placement into an empty cell
//! - [`terminal`]: win and loss detection, reported side by side
//! - [`tiles`]: positional tile identities for animation continuity
//! - [`settle`]: busy gate that rejects moves during the settle window
//! - [`session`]: per-game state tying the above together
//! - [`snapshot`]: owned copy of the session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: tiles compact toward the chosen edge without reordering
//! - **Merge**: equal neighbours combine once per move, nearest the edge first
//! - **Score**: each merge adds the value it produced
//! - **Spawn**: after a move that changed the grid, a 2 (90%) or 4 (10%) appears
//! - **Win**: a 2048 tile exists; play may continue
//! - **Loss**: the grid is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use twenty48_core::{GameSession, MoveOutcome, RejectReason};
//! use twenty48_types::Direction;
//!
//! let mut session = GameSession::with_seed(12345);
//!
//! // Space moves out by the settle delay so none is rejected as busy.
//! let mut now_ms = 0;
//! for dir in [Direction::Left, Direction::Up, Direction::Right] {
//!     let outcome = session.try_move(dir, now_ms);
//!     assert_ne!(outcome, MoveOutcome::Rejected(RejectReason::Busy));
//!     now_ms += session.settle_delay_ms();
//! }
//!
//! assert!(session.tiles().len() >= 2);
//! assert!(!session.game_over());
//! ```

pub mod config;
pub mod grid;
pub mod line;
pub mod moves;
pub mod rng;
pub mod session;
pub mod settle;
pub mod snapshot;
pub mod spawn;
pub mod terminal;
pub mod tiles;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use grid::{Grid, Line};
pub use line::{reduce_line, LineReduction};
pub use moves::{apply_move, legal_moves, orient, unorient, MoveResult};
pub use rng::SimpleRng;
pub use session::{GameSession, MoveOutcome, MoveReport, RejectReason};
pub use settle::SettleGate;
pub use snapshot::GameSnapshot;
pub use spawn::{initial_grid, spawn_tile, spawn_tile_with_position};
pub use terminal::{can_move, is_game_over, is_won, terminal_status};
pub use tiles::{reconcile, TileId, TileIdAllocator, TileRecord, Tiles};
