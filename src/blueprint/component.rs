//! Placed components, the unit of the blueprint wire format.

use crate::content::{ContentItem, ContentKind};
use crate::grid::Rect;
use serde::{Deserialize, Serialize};
use log::warn;
use serde_json::{Map, Value};

/// A content item seated on the grid.
///
/// Serializes as `{id, type, position, clickable, url, ...payload}`; `url`
/// is `null` when absent and the remaining payload fields are flattened
/// into the component object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ContentKind,

    pub position: Rect,

    pub clickable: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PlacedComponent {
    /// Builds a component for `item` at `position`.
    ///
    /// A string `url` payload field is lifted into [`PlacedComponent::url`].
    /// Any other `url` value is discarded so the component always reads back
    /// from its own JSON; everything else is forwarded untouched.
    pub fn from_item(item: &ContentItem, position: Rect) -> Self {
        let mut payload = item.payload.clone();
        let url = match payload.remove("url") {
            Some(Value::String(url)) => Some(url),
            Some(Value::Null) | None => None,
            Some(other) => {
                warn!("item `{}` has a non-string url {other}; dropping it", item.id);
                None
            }
        };
        Self {
            id: item.id.clone(),
            kind: item.kind,
            position,
            clickable: item.kind.is_clickable(),
            url,
            payload,
        }
    }

    /// An empty placeholder of `kind`. Placeholders carry no link and are
    /// never clickable.
    pub fn placeholder(id: String, kind: ContentKind, position: Rect) -> Self {
        Self {
            id,
            kind,
            position,
            clickable: false,
            url: None,
            payload: Map::new(),
        }
    }

    /// A single-cell filler bit.
    pub fn bit(id: String, row: u32, column: u32, value: u8) -> Self {
        let mut payload = Map::new();
        payload.insert("value".into(), Value::from(value));
        Self {
            id,
            kind: ContentKind::Bit,
            position: Rect::new(row, column, 1, 1),
            clickable: false,
            url: None,
            payload,
        }
    }

    /// Cells covered.
    pub fn area(&self) -> usize {
        self.position.area()
    }
}
