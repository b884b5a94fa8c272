//! Move engine - apply a direction to a whole grid
//!
//! Each direction is re-oriented so the move becomes "slide left", every row goes
//! through [`reduce_line`], and the inverse transform restores board coordinates.
//!
//! | Direction | Into "left" | Back to board |
//! |-----------|-------------|---------------|
//! | Left | identity | identity |
//! | Right | flip | flip |
//! | Up | transpose | transpose |
//! | Down | transpose, then flip | flip, then transpose |
//!
//! The Down pair is the only one where order matters; the round-trip tests below
//! pin it on a grid with sixteen distinct values.

use arrayvec::ArrayVec;

use crate::grid::{Grid, Line};
use crate::line::reduce_line;
use crate::types::{Direction, GRID_SIZE};

/// Outcome of applying one direction to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The grid after sliding and merging (no spawn)
    pub grid: Grid,
    /// Sum of the merged tile values
    pub score_delta: u32,
    /// Whether any tile changed position or merged
    pub moved: bool,
}

/// Re-orient `grid` so that `direction` becomes a slide toward column 0
pub fn orient(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => *grid,
        Direction::Right => grid.flip_horizontal(),
        Direction::Up => grid.transpose(),
        Direction::Down => grid.transpose().flip_horizontal(),
    }
}

/// Exact inverse of [`orient`]
pub fn unorient(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => *grid,
        Direction::Right => grid.flip_horizontal(),
        Direction::Up => grid.transpose(),
        Direction::Down => grid.flip_horizontal().transpose(),
    }
}

/// Slide and merge every line of `grid` in `direction`
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let oriented = orient(grid, direction);

    let mut lines: [Line; GRID_SIZE] = oriented.lines();
    let mut score_delta = 0u32;
    let mut moved = false;

    for line in lines.iter_mut() {
        let reduction = reduce_line(*line);
        score_delta = score_delta.saturating_add(reduction.score);
        if reduction.changed_from(line) {
            moved = true;
        }
        *line = reduction.line;
    }

    if !moved {
        return MoveResult {
            grid: *grid,
            score_delta: 0,
            moved: false,
        };
    }

    MoveResult {
        grid: unorient(&Grid::from_lines(lines), direction),
        score_delta,
        moved,
    }
}

/// Directions that would change `grid`, in [`Direction::ALL`] order
pub fn legal_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| apply_move(grid, dir).moved)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_grid() -> Grid {
        Grid::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [8192, 16384, 32768, 65536],
        ])
    }

    #[test]
    fn test_orientation_roundtrip_all_directions() {
        let grid = distinct_grid();
        for dir in Direction::ALL {
            assert_eq!(unorient(&orient(&grid, dir), dir), grid, "{:?}", dir);
        }
    }

    #[test]
    fn test_orient_down_reads_columns_bottom_up() {
        let grid = distinct_grid();
        let oriented = orient(&grid, Direction::Down);
        // Row 0 of the oriented grid is column 0 read from the bottom.
        assert_eq!(
            oriented.row(0),
            Some([Some(8192), Some(512), Some(32), Some(2)])
        );
    }

    #[test]
    fn test_move_left_row() {
        let grid = Grid::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let result = apply_move(&grid, Direction::Left);
        assert_eq!(result.grid.row(0), Some([Some(4), Some(4), None, None]));
        assert_eq!(result.score_delta, 8);
        assert!(result.moved);
    }

    #[test]
    fn test_move_right_row() {
        let grid = Grid::from_rows([[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]);
        let result = apply_move(&grid, Direction::Right);
        assert_eq!(result.grid.row(0), Some([None, None, Some(4), Some(4)]));
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_move_up_and_down_columns() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]);

        let up = apply_move(&grid, Direction::Up);
        assert_eq!(
            up.grid.to_rows(),
            [[4, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]
        );
        assert_eq!(up.score_delta, 4);

        let down = apply_move(&grid, Direction::Down);
        assert_eq!(
            down.grid.to_rows(),
            [[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]]
        );
        assert_eq!(down.score_delta, 4);
    }

    #[test]
    fn test_no_move_returns_input() {
        let grid = Grid::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let result = apply_move(&grid, Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.score_delta, 0);
        assert_eq!(result.grid, grid);
    }

    #[test]
    fn test_legal_moves() {
        let grid = Grid::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let legal = legal_moves(&grid);
        assert_eq!(
            legal.as_slice(),
            &[Direction::Down, Direction::Right]
        );
        assert!(legal_moves(&distinct_grid()).is_empty());
    }

    #[test]
    fn test_largest_tiles_do_not_overflow() {
        let big = 1u32 << 30;
        let grid = Grid::from_rows([[big; 4], [0; 4], [0; 4], [0; 4]]);

        let result = apply_move(&grid, Direction::Left);
        assert!(result.moved);
        assert_eq!(result.grid.to_rows()[0], [big * 2, big * 2, 0, 0]);
        assert_eq!(result.score_delta, u32::MAX);

        // The doubled pair cannot merge again; it only slides.
        let again = apply_move(&result.grid, Direction::Left);
        assert!(!again.moved);
        let right = apply_move(&again.grid, Direction::Right);
        assert!(right.moved);
        assert_eq!(right.grid.to_rows()[0], [0, 0, big * 2, big * 2]);
        assert_eq!(right.score_delta, 0);
    }
}
