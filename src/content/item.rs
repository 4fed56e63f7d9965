//! Content items and their wire records.

use super::kind::ContentKind;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Payload keys that would collide with component fields in the blueprint.
pub const RESERVED_PAYLOAD_KEYS: [&str; 4] = ["id", "type", "position", "clickable"];

/// Wire form of a content item, as produced upstream.
///
/// `type` is kept as a string here so an unrecognized kind surfaces as a
/// [`GridError::UnknownContentType`] instead of a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rank_within_type: u32,
    pub global_priority: i64,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// A ranked, classified item to lay out.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Unique identifier; becomes the component id.
    pub id: String,
    /// Kind discriminator driving footprint lookup.
    pub kind: ContentKind,
    /// 1-based rank among items of the same kind.
    pub rank_within_type: u32,
    /// Lower is more important.
    pub global_priority: i64,
    /// Opaque content fields, forwarded verbatim.
    pub payload: Map<String, Value>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        kind: ContentKind,
        rank_within_type: u32,
        global_priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            rank_within_type,
            global_priority,
            payload: Map::new(),
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Sets a single payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

impl TryFrom<ItemRecord> for ContentItem {
    type Error = GridError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let kind = record
            .kind
            .parse::<ContentKind>()
            .map_err(|_| GridError::UnknownContentType {
                id: record.id.clone(),
                kind: record.kind.clone(),
            })?;
        Ok(Self {
            id: record.id,
            kind,
            rank_within_type: record.rank_within_type,
            global_priority: record.global_priority,
            payload: record.payload,
        })
    }
}

impl From<&ContentItem> for ItemRecord {
    fn from(item: &ContentItem) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.kind.as_str().to_string(),
            rank_within_type: item.rank_within_type,
            global_priority: item.global_priority,
            payload: item.payload.clone(),
        }
    }
}

/// Parses a JSON array of item records into typed items.
///
/// Fails on the first record with an unrecognized type.
pub fn parse_items(json: &str) -> Result<Vec<ContentItem>, GridError> {
    let records: Vec<ItemRecord> = serde_json::from_str(json)?;
    records.into_iter().map(ContentItem::try_from).collect()
}

/// Checks item-level invariants: unique ids, 1-based ranks, no reserved
/// payload keys.
pub fn validate_items(items: &[ContentItem]) -> Result<(), GridError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(GridError::DuplicateItemId(item.id.clone()));
        }
        if item.rank_within_type == 0 {
            return Err(GridError::InvalidRank(item.id.clone()));
        }
        if let Some(key) = RESERVED_PAYLOAD_KEYS
            .iter()
            .find(|key| item.payload.contains_key(**key))
        {
            return Err(GridError::ReservedPayloadKey {
                id: item.id.clone(),
                key: key.to_string(),
            });
        }
        if item
            .payload
            .get("url")
            .is_some_and(|url| !url.is_string() && !url.is_null())
        {
            return Err(GridError::InvalidPayloadField {
                id: item.id.clone(),
                key: "url".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_items() {
        let json = r#"[
            {"id": "h1", "type": "headline", "rankWithinType": 1, "globalPriority": 1,
             "payload": {"title": "Launch", "url": "https://example.com/a"}},
            {"id": "q1", "type": "quick_link", "rankWithinType": 1, "globalPriority": 5}
        ]"#;
        let items = parse_items(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ContentKind::Headline);
        assert_eq!(items[0].payload["title"], json!("Launch"));
        assert_eq!(items[1].kind, ContentKind::QuickLink);
        assert!(items[1].payload.is_empty());
    }

    #[test]
    fn test_parse_unknown_type() {
        let json = r#"[{"id": "w1", "type": "weather", "rankWithinType": 1, "globalPriority": 1}]"#;
        match parse_items(json) {
            Err(GridError::UnknownContentType { id, kind }) => {
                assert_eq!(id, "w1");
                assert_eq!(kind, "weather");
            }
            other => panic!("expected UnknownContentType, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse_items("{"), Err(GridError::Json(_))));
    }

    #[test]
    fn test_record_round_trip() {
        let item = ContentItem::new("s1", ContentKind::Secondary, 2, 7).with_field("title", "x");
        let record = ItemRecord::from(&item);
        assert_eq!(record.kind, "secondary");
        assert_eq!(ContentItem::try_from(record).unwrap(), item);
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let items = vec![
            ContentItem::new("a", ContentKind::Headline, 1, 1),
            ContentItem::new("a", ContentKind::Secondary, 1, 2),
        ];
        assert!(matches!(
            validate_items(&items),
            Err(GridError::DuplicateItemId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_validate_zero_rank() {
        let items = vec![ContentItem::new("a", ContentKind::Headline, 0, 1)];
        assert!(matches!(validate_items(&items), Err(GridError::InvalidRank(_))));
    }

    #[test]
    fn test_validate_reserved_key() {
        let items =
            vec![ContentItem::new("a", ContentKind::Headline, 1, 1).with_field("position", 3)];
        assert!(matches!(
            validate_items(&items),
            Err(GridError::ReservedPayloadKey { key, .. }) if key == "position"
        ));
    }

    #[test]
    fn test_validate_non_string_url() {
        let items = vec![ContentItem::new("s", ContentKind::Stock, 1, 1).with_field("url", 5)];
        assert!(matches!(
            validate_items(&items),
            Err(GridError::InvalidPayloadField { id, key }) if id == "s" && key == "url"
        ));

        let items =
            vec![ContentItem::new("s", ContentKind::Stock, 1, 1).with_field("url", Value::Null)];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_validate_ok() {
        let items = vec![
            ContentItem::new("a", ContentKind::Headline, 1, 1).with_field("url", "u"),
            ContentItem::new("b", ContentKind::Bit, 1, 2),
        ];
        assert!(validate_items(&items).is_ok());
    }
}
