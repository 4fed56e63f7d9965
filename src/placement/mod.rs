//! Priority-ordered first-fit placement.
//!
//! Items are seated in ascending `global_priority` order (stable, so ties
//! keep input order). Branding items take the configured anchors; every
//! other item walks its footprint candidates from largest to smallest and
//! takes the first row-major position that fits. Items that fit nowhere are
//! dropped and reported, never fatal.
//!
//! Because each item only sees the grid left by higher-priority items, and
//! all anchors are reserved before packing starts, removing a low-priority
//! item never moves a higher-priority one.

mod config;
mod order;
mod runner;

pub use config::PlacementConfig;
pub use order::priority_order;
pub use runner::{DropReason, DroppedItem, PlacementEngine, PlacementResult};
