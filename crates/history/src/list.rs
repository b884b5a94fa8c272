//! Score list - a capped, ordered list of finished games over a [`Storage`]

use std::cmp::Reverse;

use log::warn;

use crate::entry::ScoreEntry;
use crate::storage::{Storage, StorageError};
use crate::{HISTORY_KEY, HISTORY_MAX_ENTRIES, LEADERBOARD_KEY, LEADERBOARD_MAX_ENTRIES};

/// How a list is ordered (and therefore which entries survive the cap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Newest first
    Recent,
    /// Highest score first, newest first among equal scores
    TopScore,
}

/// Where a list lives and how large it may grow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPolicy {
    pub key: String,
    pub order: ListOrder,
    pub max_entries: usize,
    /// Cap used for the single retry after a quota failure (half the cap, at least one)
    pub pruned_entries: usize,
}

impl ListPolicy {
    pub fn new(key: impl Into<String>, order: ListOrder, max_entries: usize) -> Self {
        Self {
            key: key.into(),
            order,
            max_entries,
            pruned_entries: (max_entries / 2).max(1),
        }
    }

    /// Last 100 games, newest first
    pub fn history() -> Self {
        Self::new(HISTORY_KEY, ListOrder::Recent, HISTORY_MAX_ENTRIES)
    }

    /// Top 10 games by score
    pub fn leaderboard() -> Self {
        Self::new(LEADERBOARD_KEY, ListOrder::TopScore, LEADERBOARD_MAX_ENTRIES)
    }

    /// [`ListPolicy::history`] with `TWENTY48_HISTORY_MAX` applied (invalid or zero values are ignored)
    pub fn history_from_env() -> Self {
        let max_entries = std::env::var("TWENTY48_HISTORY_MAX")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(HISTORY_MAX_ENTRIES);
        Self::new(HISTORY_KEY, ListOrder::Recent, max_entries)
    }
}

/// What [`ScoreList::record`] did with a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Zero scores are not recorded
    Skipped,
    Saved,
    /// Saved after pruning to `pruned_entries` on a quota failure
    Pruned,
    /// Kept in memory only; storage refused the write
    MemoryOnly,
}

/// A capped score list backed by a [`Storage`]
#[derive(Debug)]
pub struct ScoreList<S> {
    storage: S,
    policy: ListPolicy,
    entries: Vec<ScoreEntry>,
    /// Storage failed as unavailable; stop touching it for this session.
    memory_only: bool,
    next_seq: u64,
}

impl<S: Storage> ScoreList<S> {
    /// Create a list without reading storage yet
    pub fn new(storage: S, policy: ListPolicy) -> Self {
        Self {
            storage,
            policy,
            entries: Vec::new(),
            memory_only: false,
            next_seq: 0,
        }
    }

    /// Create a list and load it
    pub fn open(storage: S, policy: ListPolicy) -> Self {
        let mut list = Self::new(storage, policy);
        list.load();
        list
    }

    pub fn policy(&self) -> &ListPolicy {
        &self.policy
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// First entry in list order (the best score for a leaderboard)
    pub fn first(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Re-read the list from storage
    pub fn load(&mut self) -> &[ScoreEntry] {
        if self.memory_only {
            return &self.entries;
        }
        let mut loaded = self.read_stored().unwrap_or_default();
        self.sort_and_cap(&mut loaded);
        self.entries = loaded;
        &self.entries
    }

    /// Record a finished game's score at `now_ms`
    pub fn record(&mut self, score: u32, now_ms: u64) -> RecordOutcome {
        self.record_entry(score, now_ms, None)
    }

    /// Record a finished game's score with a player name
    pub fn record_named(&mut self, score: u32, now_ms: u64, player_name: &str) -> RecordOutcome {
        self.record_entry(score, now_ms, Some(player_name))
    }

    fn record_entry(&mut self, score: u32, now_ms: u64, player_name: Option<&str>) -> RecordOutcome {
        if score == 0 {
            return RecordOutcome::Skipped;
        }

        let mut entry = ScoreEntry::new(format!("{}-{}", now_ms, self.next_seq), score, now_ms);
        self.next_seq += 1;
        if let Some(name) = player_name {
            entry = entry.with_player_name(name);
        }

        // Start from what storage holds now, in case another writer touched it.
        let mut list = if self.memory_only {
            self.entries.clone()
        } else {
            self.read_stored().unwrap_or_else(|| self.entries.clone())
        };
        // Newest goes first so stable sorting keeps it ahead of equal keys.
        list.insert(0, entry);
        self.sort_and_cap(&mut list);

        if self.memory_only {
            self.entries = list;
            return RecordOutcome::MemoryOnly;
        }

        let outcome = match self.write(&list) {
            Ok(()) => RecordOutcome::Saved,
            Err(StorageError::QuotaExceeded { needed, quota }) => {
                warn!(
                    "{}: storage quota exceeded ({} > {} bytes), pruning to {} entries",
                    self.policy.key, needed, quota, self.policy.pruned_entries
                );
                list.truncate(self.policy.pruned_entries);
                match self.write(&list) {
                    Ok(()) => RecordOutcome::Pruned,
                    Err(e) => {
                        warn!("{}: failed to save pruned list: {}", self.policy.key, e);
                        RecordOutcome::MemoryOnly
                    }
                }
            }
            Err(StorageError::Unavailable(reason)) => {
                warn!(
                    "{}: storage unavailable ({}), keeping scores in memory",
                    self.policy.key, reason
                );
                self.memory_only = true;
                RecordOutcome::MemoryOnly
            }
            Err(e) => {
                warn!("{}: failed to save score: {}", self.policy.key, e);
                RecordOutcome::MemoryOnly
            }
        };

        self.entries = list;
        outcome
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.memory_only {
            return;
        }
        if let Err(e) = self.storage.remove(&self.policy.key) {
            warn!("{}: failed to clear stored list: {}", self.policy.key, e);
        }
    }

    /// Read the stored list; `None` if storage is unavailable.
    fn read_stored(&mut self) -> Option<Vec<ScoreEntry>> {
        match self.storage.get(&self.policy.key) {
            Ok(None) => Some(Vec::new()),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ScoreEntry>>(&raw) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    warn!("{}: stored list is malformed, starting empty: {}", self.policy.key, e);
                    Some(Vec::new())
                }
            },
            Err(e) => {
                warn!(
                    "{}: failed to load stored list, keeping scores in memory: {}",
                    self.policy.key, e
                );
                self.memory_only = true;
                None
            }
        }
    }

    fn write(&mut self, list: &[ScoreEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(list)?;
        self.storage.set(&self.policy.key, raw)
    }

    fn sort_and_cap(&self, list: &mut Vec<ScoreEntry>) {
        match self.policy.order {
            ListOrder::Recent => list.sort_by_key(|e| Reverse(e.timestamp_ms)),
            ListOrder::TopScore => list.sort_by_key(|e| (Reverse(e.score), Reverse(e.timestamp_ms))),
        }
        list.truncate(self.policy.max_entries);
    }
}
