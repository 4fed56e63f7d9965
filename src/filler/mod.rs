//! Filler pass: optional placeholder slots, then one decorative bit per
//! leftover cell.
//!
//! Runs once, after placement, on the same [`OccupancyGrid`](crate::grid::OccupancyGrid).
//! Slots that find no room are skipped and bits are 1x1, so the pass
//! cannot fail; on a full grid it does nothing.

mod config;
mod runner;

pub use config::{BitPattern, FillerConfig, GapSlot};
pub use runner::FillerPass;
