//! Mutable occupancy state for one blueprint generation.

use super::config::GridConfig;
use super::rect::Rect;

/// Tracks which cells are taken and by which component.
///
/// One instance is created per generation and handed by `&mut` to the
/// placement and filler passes in turn; it is never shared between runs.
///
/// # Examples
///
/// ```
/// use u_blueprint::grid::{OccupancyGrid, Rect};
///
/// let mut grid = OccupancyGrid::new(4, 3);
/// assert!(grid.can_place(1, 1, 2, 2));
/// grid.place(Rect::new(1, 1, 2, 2), "a");
/// assert!(!grid.can_place(2, 2, 2, 2));
/// assert_eq!(grid.occupied_count(), 4);
/// assert_eq!(grid.first_fit(2, 2), Some(Rect::new(1, 3, 2, 2)));
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    columns: u32,
    rows: u32,
    /// Row-major; each entry indexes into `owners`.
    cells: Vec<Option<usize>>,
    owners: Vec<String>,
    occupied: usize,
}

impl OccupancyGrid {
    /// Creates an empty grid.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
            owners: Vec::new(),
            occupied: 0,
        }
    }

    /// Creates an empty grid sized by `config`.
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.columns, config.rows)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn free_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    fn index(&self, row: u32, column: u32) -> usize {
        (row as usize - 1) * self.columns as usize + (column as usize - 1)
    }

    fn in_bounds(&self, row: u32, column: u32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column)
    }

    /// Whether the cell is inside the grid and unoccupied.
    pub fn is_free(&self, row: u32, column: u32) -> bool {
        self.in_bounds(row, column) && self.cells[self.index(row, column)].is_none()
    }

    /// Id of the component covering the cell, if any.
    pub fn owner(&self, row: u32, column: u32) -> Option<&str> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.cells[self.index(row, column)].map(|slot| self.owners[slot].as_str())
    }

    /// True iff the rectangle lies inside the grid and every covered cell
    /// is free.
    pub fn can_place(&self, row: u32, column: u32, width: u32, height: u32) -> bool {
        self.can_place_rect(&Rect::new(row, column, width, height))
    }

    pub fn can_place_rect(&self, rect: &Rect) -> bool {
        rect.fits_within(self.columns, self.rows)
            && rect
                .cells()
                .all(|(r, c)| self.cells[self.index(r, c)].is_none())
    }

    /// Marks every cell of `rect` as owned by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `can_place_rect(&rect)` is false. Callers must check first;
    /// placing over occupied or out-of-bounds cells is a logic error.
    pub fn place(&mut self, rect: Rect, id: &str) {
        assert!(
            self.can_place_rect(&rect),
            "occupancy invariant violated: cannot place `{id}` at {rect:?}"
        );
        let slot = self.owners.len();
        self.owners.push(id.to_string());
        for (r, c) in rect.cells() {
            let idx = self.index(r, c);
            self.cells[idx] = Some(slot);
        }
        self.occupied += rect.area();
    }

    /// Frees every cell of `rect`, which must be wholly owned by `id`.
    ///
    /// # Panics
    ///
    /// Panics if any covered cell is free or owned by another component.
    pub fn release(&mut self, rect: Rect, id: &str) {
        assert!(
            rect.fits_within(self.columns, self.rows)
                && rect.cells().all(|(r, c)| self.owner(r, c) == Some(id)),
            "occupancy invariant violated: `{id}` does not own {rect:?}"
        );
        for (r, c) in rect.cells() {
            let idx = self.index(r, c);
            self.cells[idx] = None;
        }
        self.occupied -= rect.area();
    }

    /// First position, scanning rows top to bottom and columns left to
    /// right, where a `width x height` rectangle can be placed.
    pub fn first_fit(&self, width: u32, height: u32) -> Option<Rect> {
        if width == 0 || height == 0 || width > self.columns || height > self.rows {
            return None;
        }
        for row in 1..=self.rows - height + 1 {
            for column in 1..=self.columns - width + 1 {
                let rect = Rect::new(row, column, width, height);
                if self.can_place_rect(&rect) {
                    return Some(rect);
                }
            }
        }
        None
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let columns = self.columns as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| ((idx / columns) as u32 + 1, (idx % columns) as u32 + 1))
    }
}
