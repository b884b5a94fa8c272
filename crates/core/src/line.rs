//! Line reducer - slide and merge a single line toward index 0
//!
//! Every direction is reduced to this one operation by the move engine, so the
//! merge rules live here and nowhere else:
//!
//! 1. Compact: drop empty cells, keep the order of occupied ones.
//! 2. Merge: scan pairwise from index 0; equal neighbours become one tile of
//!    double value and the second is consumed. A produced tile never merges
//!    again in the same pass (`[4, 4, 8]` gives `[8, 8]`, not `[16]`). A pair
//!    whose double does not fit in a `u32` stays unmerged.
//! 3. Pad with empty cells back to the grid size.

use arrayvec::ArrayVec;

use crate::grid::Line;
use crate::types::GRID_SIZE;

/// Result of reducing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReduction {
    /// The compacted and merged line, padded with empty cells
    pub line: Line,
    /// Sum of the values produced by merges
    pub score: u32,
    /// Whether any pair merged
    pub merged: bool,
}

impl LineReduction {
    /// Whether the reduced line differs from `input` position by position
    pub fn changed_from(&self, input: &Line) -> bool {
        self.merged || self.line != *input
    }
}

/// Slide and merge `line` toward index 0
pub fn reduce_line(line: Line) -> LineReduction {
    let occupied: ArrayVec<u32, GRID_SIZE> = line.iter().flatten().copied().collect();

    let mut out: Line = [None; GRID_SIZE];
    let mut write = 0usize;
    let mut score = 0u32;
    let mut merged = false;

    let mut read = 0usize;
    while read < occupied.len() {
        let value = occupied[read];
        let partner = occupied.get(read + 1).copied();
        if let Some(doubled) = value.checked_mul(2).filter(|_| partner == Some(value)) {
            out[write] = Some(doubled);
            score = score.saturating_add(doubled);
            merged = true;
            // Skip the consumed partner.
            read += 2;
        } else {
            out[write] = Some(value);
            read += 1;
        }
        write += 1;
    }

    LineReduction {
        line: out,
        score,
        merged,
    }
}
