//! Spawn generator - place a new tile after a successful move
//!
//! Picks uniformly among empty cells; the tile is a 2 nine times in ten and a 4
//! otherwise. A full grid is returned unchanged.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{
    Position, INITIAL_TILES, SPAWN_HIGH_ODDS, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};

/// Pick a spawn value: 2 with probability 0.9, 4 with probability 0.1
pub fn random_tile_value(rng: &mut SimpleRng) -> u32 {
    if rng.one_in(SPAWN_HIGH_ODDS) {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Spawn one tile and report where it landed
///
/// Returns the unchanged grid and `None` when no cell is empty.
pub fn spawn_tile_with_position(grid: &Grid, rng: &mut SimpleRng) -> (Grid, Option<(Position, u32)>) {
    let empty = grid.empty_positions();
    if empty.is_empty() {
        return (*grid, None);
    }

    let pos = empty[rng.next_range(empty.len() as u32) as usize];
    let value = random_tile_value(rng);
    (grid.with_cell(pos, Some(value)), Some((pos, value)))
}

/// Spawn one tile into a random empty cell
pub fn spawn_tile(grid: &Grid, rng: &mut SimpleRng) -> Grid {
    spawn_tile_with_position(grid, rng).0
}

/// A fresh game grid: empty apart from the starting tiles
pub fn initial_grid(rng: &mut SimpleRng) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..INITIAL_TILES {
        grid = spawn_tile(&grid, rng);
    }
    grid
}
