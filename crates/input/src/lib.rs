//! Input mapping module (engine-facing).
//!
//! This module is intentionally independent of any UI framework's event loop.
//! It resolves raw input into [`crate::types::Direction`] values: `crossterm`
//! key events through [`map`], and touch/pointer swipes through [`swipe`]
//! (start and end points with a minimum-distance threshold). The engine only
//! ever sees the resolved direction.

pub mod map;
pub mod swipe;

pub use twenty48_types as types;

pub use map::{direction_for_key, is_restart, should_quit};
pub use swipe::{classify_swipe, SwipeTracker};
