//! Score lists module - finished-game scores for history and leaderboard views
//!
//! The rules engine never reads these lists; it only reports the final score of
//! a finished game. Lists are stored as JSON arrays under a string key in any
//! [`Storage`] backend, and every storage failure degrades locally:
//!
//! - **Quota exceeded**: prune to a smaller cap and retry once
//! - **Malformed data**: treat as an empty list and log a warning
//! - **Storage unavailable**: keep an in-memory list for the rest of the session
//!
//! None of these is fatal to gameplay.
//!
//! # Example
//!
//! ```
//! use twenty48_history::{ListPolicy, MemoryStorage, RecordOutcome, ScoreList};
//!
//! let mut history = ScoreList::open(MemoryStorage::new(), ListPolicy::history());
//! assert_eq!(history.record(1024, 1_700_000_000_000), RecordOutcome::Saved);
//! assert_eq!(history.record(0, 1_700_000_000_500), RecordOutcome::Skipped);
//! assert_eq!(history.entries()[0].score, 1024);
//! ```

pub mod entry;
pub mod list;
pub mod storage;

pub use entry::ScoreEntry;
pub use list::{ListOrder, ListPolicy, RecordOutcome, ScoreList};
pub use storage::{MemoryStorage, Storage, StorageError};

/// Storage key of the recent-games list
pub const HISTORY_KEY: &str = "scoreHistory";

/// Most recent games kept in the history
pub const HISTORY_MAX_ENTRIES: usize = 100;

/// Storage key of the top-scores list
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Best games kept on the leaderboard
pub const LEADERBOARD_MAX_ENTRIES: usize = 10;
