//! End-to-end blueprint generation.
//!
//! [`BlueprintRunner`] validates the whole configuration and item list up
//! front, then runs placement, filler and assembly strictly in sequence on
//! one freshly built [`OccupancyGrid`](crate::grid::OccupancyGrid). Runs share
//! no state, so [`BlueprintRunner::run_batch`] can spread independent jobs
//! across threads (feature `parallel`).

mod config;
mod runner;

pub use config::GeneratorConfig;
pub use runner::{BlueprintJob, BlueprintResult, BlueprintRunner};
