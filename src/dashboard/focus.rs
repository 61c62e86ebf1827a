//! Keyboard focus over the shortcut grid. Moves wrap around.

use super::actions::GRID_COLUMNS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFocus {
    index: usize,
    len: usize,
}

impl GridFocus {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply(&mut self, movement: FocusMove) {
        if self.len == 0 {
            return;
        }
        let step = match movement {
            FocusMove::Next => 1,
            FocusMove::Previous => -1,
            FocusMove::Down => GRID_COLUMNS as i64,
            FocusMove::Up => -(GRID_COLUMNS as i64),
        };
        let len = i64::try_from(self.len).unwrap_or(1);
        let current = i64::try_from(self.index).unwrap_or(0);
        self.index = usize::try_from((current + step).rem_euclid(len)).unwrap_or(0);
    }

    /// Focus `index` directly; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
