//! Deterministic grid blueprint generation.
//!
//! Turns a ranked list of curated content (headlines, secondary articles,
//! quick links, repository cards, stock tickers, branding marks, day badges)
//! into a conflict-free layout on a fixed cell grid:
//!
//! - **Footprint catalog**: per-kind, per-rank candidate sizes, largest
//!   first.
//! - **Occupancy grid**: bounds and overlap checks, row-major first-fit.
//! - **Placement**: priority-ordered first-fit with graceful shape
//!   degradation; branding on fixed anchors; items that fit nowhere are
//!   dropped, never fatal.
//! - **Filler**: optional capped placeholder slots, then one single-cell
//!   bit per leftover cell.
//! - **Blueprint**: stable component ordering, efficiency metadata and the
//!   JSON contract consumed by the renderer.
//!
//! # Architecture
//!
//! Each generation owns one [`grid::OccupancyGrid`]; placement and filler
//! run strictly in sequence against it. There is no global state, so
//! independent generations can run on separate threads without
//! coordination.
//!
//! # Examples
//!
//! ```
//! use u_blueprint::content::parse_items;
//! use u_blueprint::generator::{BlueprintRunner, GeneratorConfig};
//!
//! let items = parse_items(r#"[
//!     {"id": "lead", "type": "headline", "rankWithinType": 1, "globalPriority": 1,
//!      "payload": {"title": "Launch day", "url": "https://example.com/launch"}},
//!     {"id": "aapl", "type": "stock", "rankWithinType": 1, "globalPriority": 9,
//!      "payload": {"symbol": "AAPL", "price": 227.5}}
//! ]"#).unwrap();
//!
//! let result = BlueprintRunner::run(&items, &GeneratorConfig::default()).unwrap();
//! let lead = result.blueprint.component("lead").unwrap();
//! assert_eq!((lead.position.row, lead.position.column), (1, 1));
//! assert!(result.blueprint.to_json().is_ok());
//! ```

pub mod blueprint;
pub mod content;
pub mod error;
pub mod filler;
pub mod footprint;
pub mod generator;
pub mod grid;
pub mod placement;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::GridError;
