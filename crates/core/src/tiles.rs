//! Tile identity tracker - stable ids for animation continuity
//!
//! Identities are matched by position only: a tile keeps its id while the same
//! cell holds the same value from one turn to the next. Any value change at a
//! cell gets a fresh id. When the new value is exactly double the old one the
//! record is flagged as merged, which is enough for a renderer to pick between
//! "pop in", "pulse" and "static". This is not a merge history: the engine does
//! not know which two tiles combined.

use std::fmt;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Position, CELL_COUNT};

/// Opaque per-session tile identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// Monotonic id source owned by a session
///
/// Reset only when a new game begins.
#[derive(Debug, Clone, Default)]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Hand out the next id
    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn allocated(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// A renderable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRecord {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
    /// Fresh identity this turn (spawned, merged, or otherwise changed)
    pub is_new: bool,
    /// The cell previously held exactly half this value
    pub is_merged: bool,
}

/// Tiles of one grid, row-major
pub type Tiles = ArrayVec<TileRecord, CELL_COUNT>;

/// Derive this turn's tile list from `grid` and last turn's `previous` list
pub fn reconcile(grid: &Grid, previous: &[TileRecord], ids: &mut TileIdAllocator) -> Tiles {
    let mut by_cell: [Option<&TileRecord>; CELL_COUNT] = [None; CELL_COUNT];
    for tile in previous {
        if let Some(slot) = by_cell.get_mut(tile.position.index()) {
            *slot = Some(tile);
        }
    }

    grid.tiles()
        .map(|(position, value)| {
            let prior = by_cell[position.index()];
            match prior {
                Some(prev) if prev.value == value => TileRecord {
                    id: prev.id,
                    value,
                    position,
                    is_new: false,
                    is_merged: false,
                },
                _ => TileRecord {
                    id: ids.allocate(),
                    value,
                    position,
                    is_new: true,
                    is_merged: prior.is_some_and(|prev| prev.value.checked_mul(2) == Some(value)),
                },
            }
        })
        .collect()
}
