//! Property tests for the move engine and terminal detector

use proptest::prelude::*;
use twenty48_core::{apply_move, can_move, orient, unorient, Grid};
use twenty48_core::types::{Direction, GRID_SIZE};

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform16(0u32..=11).prop_map(|exps| {
        let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (i, exp) in exps.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = if *exp == 0 { 0 } else { 1 << exp };
        }
        Grid::from_rows(rows)
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn has_adjacent_pair(grid: &Grid) -> bool {
    let rows = grid.to_rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let v = rows[r][c];
            if v == 0 {
                continue;
            }
            if c + 1 < GRID_SIZE && rows[r][c + 1] == v {
                return true;
            }
            if r + 1 < GRID_SIZE && rows[r + 1][c] == v {
                return true;
            }
        }
    }
    false
}

proptest! {
    #[test]
    fn unchanged_result_stays_unchanged(grid in arb_grid(), dir in arb_direction()) {
        let first = apply_move(&grid, dir);
        if !first.moved {
            prop_assert_eq!(first.grid, grid);
            prop_assert_eq!(first.score_delta, 0);
        }
        // A slide without merges leaves nothing further to do in that direction.
        if first.score_delta == 0 {
            let second = apply_move(&first.grid, dir);
            prop_assert!(!second.moved);
            prop_assert_eq!(second.grid, first.grid);
        }
    }

    #[test]
    fn merges_conserve_sum(grid in arb_grid(), dir in arb_direction()) {
        let result = apply_move(&grid, dir);
        prop_assert_eq!(result.grid.sum(), grid.sum());

        let merges = grid.tiles().count() - result.grid.tiles().count();
        prop_assert_eq!(merges == 0, result.score_delta == 0);
        // Every merge produces at least a 4.
        prop_assert!(u64::from(result.score_delta) >= 4 * merges as u64);
        prop_assert!(u64::from(result.score_delta) <= grid.sum());
    }

    #[test]
    fn orientation_round_trips(grid in arb_grid(), dir in arb_direction()) {
        prop_assert_eq!(unorient(&orient(&grid, dir), dir), grid);
    }

    #[test]
    fn can_move_iff_gap_or_pair(grid in arb_grid()) {
        let expected = !grid.is_full() || has_adjacent_pair(&grid);
        prop_assert_eq!(can_move(&grid), expected);
    }

    #[test]
    fn can_move_agrees_with_apply_move(grid in arb_grid()) {
        prop_assume!(grid.tiles().count() > 0);
        let any_moved = Direction::ALL.iter().any(|&dir| apply_move(&grid, dir).moved);
        prop_assert_eq!(can_move(&grid), any_moved);
    }
}
