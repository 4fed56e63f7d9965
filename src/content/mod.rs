//! Content items consumed by the layout engine.
//!
//! Items arrive already ranked and classified by upstream collaborators.
//! The engine only reads their kind, rank within kind, global priority,
//! and forwards the payload verbatim to the rendered component.
//!
//! The set of kinds is closed: anything outside [`ContentKind`] is
//! rejected when a wire [`ItemRecord`] is converted into a
//! [`ContentItem`], before placement starts.

mod item;
mod kind;

pub use item::{parse_items, validate_items, ContentItem, ItemRecord, RESERVED_PAYLOAD_KEYS};
pub use kind::ContentKind;
