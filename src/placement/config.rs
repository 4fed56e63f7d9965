//! Placement configuration: branding anchors and per-kind limits.

use crate::content::ContentKind;
use crate::error::GridError;
use crate::grid::{GridConfig, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the placement pass.
///
/// # Examples
///
/// ```
/// use u_blueprint::content::ContentKind;
/// use u_blueprint::grid::{GridConfig, Rect};
/// use u_blueprint::placement::PlacementConfig;
///
/// let config = PlacementConfig::default()
///     .with_anchors(vec![Rect::new(1, 1, 2, 2)])
///     .with_kind_limit(ContentKind::Stock, 5);
/// assert!(config.validate(&GridConfig::default()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Fixed branding positions, claimed in this order.
    ///
    /// All anchors are reserved before packing; those left without a
    /// branding item are released to the filler pass afterwards.
    pub anchors: Vec<Rect>,

    /// Maximum number of placed items per kind. Kinds absent here are
    /// unlimited.
    pub kind_limits: BTreeMap<ContentKind, usize>,
}

impl Default for PlacementConfig {
    /// Three 2x2 brand marks along the bottom edge of the default 12x16
    /// grid.
    fn default() -> Self {
        Self {
            anchors: vec![
                Rect::new(15, 1, 2, 2),
                Rect::new(15, 6, 2, 2),
                Rect::new(15, 11, 2, 2),
            ],
            kind_limits: BTreeMap::new(),
        }
    }
}

impl PlacementConfig {
    pub fn with_anchors(mut self, anchors: Vec<Rect>) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn with_kind_limit(mut self, kind: ContentKind, limit: usize) -> Self {
        self.kind_limits.insert(kind, limit);
        self
    }

    /// Validates anchors against the grid: each must lie inside it and no
    /// two may overlap.
    pub fn validate(&self, grid: &GridConfig) -> Result<(), GridError> {
        for (index, anchor) in self.anchors.iter().enumerate() {
            if !anchor.fits_within(grid.columns, grid.rows) {
                return Err(GridError::InvalidAnchor {
                    index,
                    reason: format!(
                        "{anchor:?} does not fit a {}x{} grid",
                        grid.columns, grid.rows
                    ),
                });
            }
            if let Some(other) = self.anchors[..index]
                .iter()
                .position(|earlier| earlier.intersects(anchor))
            {
                return Err(GridError::InvalidAnchor {
                    index,
                    reason: format!("overlaps anchor {other}"),
                });
            }
        }
        Ok(())
    }
}
