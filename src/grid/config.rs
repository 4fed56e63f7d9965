//! Grid dimensions.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Largest grid, in cells, that [`GridConfig::validate`] accepts.
pub const MAX_CELLS: usize = 1 << 20;

/// Canvas dimensions for one blueprint generation.
///
/// # Examples
///
/// ```
/// use u_blueprint::grid::GridConfig;
///
/// let config = GridConfig::new(12, 16).with_cell_size(40.0);
/// assert_eq!(config.total_cells(), 192);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of columns (grid width in cells).
    pub columns: u32,

    /// Number of rows (grid height in cells).
    pub rows: u32,

    /// Cell edge length in pixels. A rendering hint; placement ignores it.
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 12,
            rows: 16,
            cell_size: 48.0,
        }
    }
}

impl GridConfig {
    /// Creates a grid with the default cell size.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridError> {
        let cells = u64::from(self.columns) * u64::from(self.rows);
        if cells == 0 || cells > MAX_CELLS as u64 {
            return Err(GridError::InvalidGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}
