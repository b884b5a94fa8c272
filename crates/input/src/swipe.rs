//! Swipe classification for touch and pointer input.
//!
//! A swipe is resolved from its start and end points. If neither axis travelled
//! at least the threshold it is ignored. Otherwise the dominant axis wins and its
//! sign picks the direction; a tie goes to the vertical axis. Screen y grows
//! downward, so a positive `dy` is [`Direction::Down`].

use crate::types::{Direction, MIN_SWIPE_DISTANCE};

/// Resolve a swipe delta into a direction
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs() < min_distance && dy.abs() < min_distance {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Holds the start point between touch-start and touch-end
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_distance: f32,
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture; `None` if it never began or travelled too little.
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        classify_swipe(x - sx, y - sy, self.min_distance)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(MIN_SWIPE_DISTANCE)
    }
}
