//! Fixed-size cell grid and occupancy tracking.
//!
//! Coordinates are 1-based throughout: `(row, column)` names the top-left
//! cell of a rectangle, matching the blueprint wire format.

mod config;
mod occupancy;
mod rect;

pub use config::{GridConfig, MAX_CELLS};
pub use occupancy::OccupancyGrid;
pub use rect::Rect;
