//! Error taxonomy for blueprint generation.
//!
//! Every variant here is fatal and raised before any placement happens.
//! Items that merely fail to fit are not errors; they are reported as
//! [`DroppedItem`](crate::placement::DroppedItem)s.

use crate::content::ContentKind;
use thiserror::Error;

/// Configuration or input error that aborts a blueprint generation.
#[derive(Debug, Error)]
pub enum GridError {
    #[error(
        "invalid grid dimensions {columns}x{rows}: need positive sides and at most {} cells",
        crate::grid::MAX_CELLS
    )]
    InvalidGrid { columns: u32, rows: u32 },

    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),

    #[error("no footprint rule for content type `{0}`")]
    MissingFootprint(ContentKind),

    #[error("footprint rule for `{kind}` is invalid: {reason}")]
    InvalidFootprint { kind: ContentKind, reason: String },

    #[error("branding anchor {index} is invalid: {reason}")]
    InvalidAnchor { index: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unrecognized content type `{kind}` on item `{id}`")]
    UnknownContentType { id: String, kind: String },

    #[error("duplicate item id `{0}`")]
    DuplicateItemId(String),

    #[error("item `{0}` has rank 0 (ranks are 1-based)")]
    InvalidRank(String),

    #[error("item `{id}` payload uses reserved key `{key}`")]
    ReservedPayloadKey { id: String, key: String },

    #[error("item `{id}` payload field `{key}` must be a string or null")]
    InvalidPayloadField { id: String, key: String },

    #[error("item id `{0}` collides with the filler id scheme")]
    ReservedItemId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
