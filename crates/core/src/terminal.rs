//! Terminal detector - win and loss conditions
//!
//! Win and loss are evaluated independently. A grid may hold the win value and
//! have no moves left at the same time; [`terminal_status`] reports both.

use crate::grid::Grid;
use crate::types::{TerminalStatus, GRID_SIZE, WIN_VALUE};

/// True iff any cell holds the win value
pub fn is_won(grid: &Grid) -> bool {
    grid.cells().iter().any(|&cell| cell == Some(WIN_VALUE))
}

/// True iff some cell is empty or two orthogonal neighbours are equal
pub fn can_move(grid: &Grid) -> bool {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let Some(current) = grid.get(row, col).flatten() else {
                return true;
            };

            if col + 1 < GRID_SIZE && grid.get(row, col + 1).flatten() == Some(current) {
                return true;
            }
            if row + 1 < GRID_SIZE && grid.get(row + 1, col).flatten() == Some(current) {
                return true;
            }
        }
    }
    false
}

/// Logical negation of [`can_move`]
pub fn is_game_over(grid: &Grid) -> bool {
    !can_move(grid)
}

/// Both terminal flags of `grid`
pub fn terminal_status(grid: &Grid) -> TerminalStatus {
    TerminalStatus {
        won: is_won(grid),
        lost: is_game_over(grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_can_move() {
        assert!(can_move(&Grid::new()));
        assert!(!is_won(&Grid::new()));
    }

    #[test]
    fn test_full_distinct_grid_is_stuck() {
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!can_move(&grid));
        assert!(is_game_over(&grid));
    }

    #[test]
    fn test_horizontal_pair_allows_move() {
        let grid = Grid::from_rows([[2, 2, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_vertical_pair_in_last_column_allows_move() {
        let grid = Grid::from_rows([[2, 4, 2, 8], [4, 2, 4, 8], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_single_empty_cell_allows_move() {
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_win_and_loss_together() {
        let grid = Grid::from_rows([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let status = terminal_status(&grid);
        assert!(status.won);
        assert!(status.lost);
    }

    #[test]
    fn test_win_with_moves_left() {
        let grid = Grid::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(
            terminal_status(&grid),
            TerminalStatus {
                won: true,
                lost: false
            }
        );
    }
}
