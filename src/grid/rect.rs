//! Axis-aligned cell rectangles.

use serde::{Deserialize, Serialize};

/// A rectangle of cells. `row` and `column` are the 1-based top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub row: u32,
    pub column: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(row: u32, column: u32, width: u32, height: u32) -> Self {
        Self {
            row,
            column,
            width,
            height,
        }
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Last row covered (inclusive). Saturates at `u32::MAX`.
    pub fn bottom(&self) -> u32 {
        self.row.saturating_add(self.height).saturating_sub(1)
    }

    /// Last column covered (inclusive). Saturates at `u32::MAX`.
    pub fn right(&self) -> u32 {
        self.column.saturating_add(self.width).saturating_sub(1)
    }

    /// Whether the rectangle lies inside a `columns x rows` grid.
    pub fn fits_within(&self, columns: u32, rows: u32) -> bool {
        let end = |start: u32, len: u32| u64::from(start) + u64::from(len) - 1;
        self.row >= 1
            && self.column >= 1
            && self.width >= 1
            && self.height >= 1
            && end(self.row, self.height) <= u64::from(rows)
            && end(self.column, self.width) <= u64::from(columns)
    }

    /// Whether two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.row <= other.bottom()
            && other.row <= self.bottom()
            && self.column <= other.right()
            && other.column <= self.right()
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.row..self.row + self.height)
            .flat_map(move |r| (self.column..self.column + self.width).map(move |c| (r, c)))
    }
}
