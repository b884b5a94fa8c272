//! Grid module - the 4x4 game grid
//!
//! The grid is a 4x4 matrix where each cell is empty or holds a power-of-two tile.
//! Uses a flat array so the whole grid is a small `Copy` value: every transition
//! builds a new grid and callers' copies are never touched.
//! Coordinates: (row, col), both 0..3, row 0 at the top.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, Position, CELL_COUNT, GRID_SIZE};

/// One row (or re-oriented column) of cells
pub type Line = [Cell; GRID_SIZE];

/// Empty positions in row-major order
pub type EmptyPositions = ArrayVec<Position, CELL_COUNT>;

/// The game grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from row values, `0` meaning empty
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = if value == 0 { None } else { Some(value) };
            }
        }
        grid
    }

    /// Build a grid from its lines (rows in order)
    pub fn from_lines(lines: [Line; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, line) in lines.iter().enumerate() {
            grid.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(line);
        }
        grid
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get width/height of the grid
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Get the tile value at `pos`, if any
    pub fn value_at(&self, pos: Position) -> Option<u32> {
        self.get(pos.row, pos.col).flatten()
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Copy of this grid with one cell replaced
    pub fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos.row, pos.col, cell);
        self
    }

    /// Check if position is empty (within bounds and no tile)
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Get a row as a line
    /// Returns None if out of bounds
    pub fn row(&self, row: usize) -> Option<Line> {
        if row >= GRID_SIZE {
            return None;
        }
        let mut line = [None; GRID_SIZE];
        line.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        Some(line)
    }

    /// All rows, top to bottom
    pub fn lines(&self) -> [Line; GRID_SIZE] {
        let mut lines = [[None; GRID_SIZE]; GRID_SIZE];
        for (row, line) in lines.iter_mut().enumerate() {
            line.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        lines
    }

    /// Export as row values, `0` meaning empty
    pub fn to_rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.write_u32_grid(&mut out);
        out
    }

    /// Write row values into `out` without allocating, `0` meaning empty
    pub fn write_u32_grid(&self, out: &mut [[u32; GRID_SIZE]; GRID_SIZE]) {
        for (idx, cell) in self.cells.iter().enumerate() {
            out[idx / GRID_SIZE][idx % GRID_SIZE] = cell.unwrap_or(0);
        }
    }

    /// Positions of all empty cells, row-major
    pub fn empty_positions(&self) -> EmptyPositions {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Position::new(idx / GRID_SIZE, idx % GRID_SIZE))
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile value, or None on an empty grid
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Mirror across the main diagonal: (r, c) -> (c, r)
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col * GRID_SIZE + row] = self.cells[row * GRID_SIZE + col];
            }
        }
        out
    }

    /// Reverse every row: (r, c) -> (r, N-1-c)
    pub fn flip_horizontal(&self) -> Self {
        let mut out = *self;
        for row in out.cells.chunks_exact_mut(GRID_SIZE) {
            row.reverse();
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over occupied cells as (position, value), row-major
    pub fn tiles(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|value| (Position::new(idx / GRID_SIZE, idx % GRID_SIZE), value))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.lines().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(value) => write!(f, "{:>5}", value)?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
        }
        Ok(())
    }
}
