//! Placement loop.

use super::config::PlacementConfig;
use super::order::priority_order;
use crate::blueprint::PlacedComponent;
use crate::content::{ContentItem, ContentKind};
use crate::error::GridError;
use crate::footprint::FootprintCatalog;
use crate::grid::{OccupancyGrid, Rect};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Why an item was left out of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DropReason {
    /// No footprint candidate fit anywhere on the remaining grid.
    NoFit,
    /// The kind had already reached its configured limit.
    KindLimit,
}

/// An item that was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedItem {
    pub id: String,
    pub kind: ContentKind,
    pub global_priority: i64,
    pub reason: DropReason,
}

/// Result of a placement pass.
#[derive(Debug, Clone)]
pub struct PlacementResult {
    /// Placed components, in placement order: anchored branding first, then
    /// everything else by priority.
    pub placed: Vec<PlacedComponent>,

    /// Items that could not be placed, in priority order.
    pub dropped: Vec<DroppedItem>,
}

impl PlacementResult {
    /// Cells covered by placed components.
    pub fn placed_area(&self) -> usize {
        self.placed.iter().map(PlacedComponent::area).sum()
    }
}

/// Seats ranked content on an [`OccupancyGrid`].
///
/// # Examples
///
/// ```
/// use u_blueprint::content::{ContentItem, ContentKind};
/// use u_blueprint::footprint::FootprintCatalog;
/// use u_blueprint::grid::{OccupancyGrid, Rect};
/// use u_blueprint::placement::{PlacementConfig, PlacementEngine};
///
/// let catalog = FootprintCatalog::default();
/// let config = PlacementConfig::default();
/// let engine = PlacementEngine::new(&catalog, &config);
///
/// let items = vec![ContentItem::new("lead", ContentKind::Headline, 1, 1)];
/// let mut grid = OccupancyGrid::new(12, 16);
/// let result = engine.run(&items, &mut grid).unwrap();
///
/// assert_eq!(result.placed[0].position, Rect::new(1, 1, 6, 4));
/// assert!(result.dropped.is_empty());
/// ```
pub struct PlacementEngine<'a> {
    catalog: &'a FootprintCatalog,
    config: &'a PlacementConfig,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(catalog: &'a FootprintCatalog, config: &'a PlacementConfig) -> Self {
        Self { catalog, config }
    }

    /// Checks that every item can be looked up and the configuration fits
    /// `grid`. Nothing is placed.
    pub fn validate(&self, items: &[ContentItem], grid: &OccupancyGrid) -> Result<(), GridError> {
        self.catalog.validate()?;
        for (index, anchor) in self.config.anchors.iter().enumerate() {
            if !anchor.fits_within(grid.columns(), grid.rows()) {
                return Err(GridError::InvalidAnchor {
                    index,
                    reason: format!(
                        "{anchor:?} does not fit a {}x{} grid",
                        grid.columns(),
                        grid.rows()
                    ),
                });
            }
        }

        let mut branding_count = 0usize;
        for item in items {
            if item.kind == ContentKind::Branding {
                branding_count += 1;
            } else if !self.catalog.covers(item.kind) {
                return Err(GridError::MissingFootprint(item.kind));
            }
        }
        if branding_count > self.config.anchors.len() && !self.catalog.covers(ContentKind::Branding)
        {
            return Err(GridError::MissingFootprint(ContentKind::Branding));
        }
        Ok(())
    }

    /// Places `items` on `grid`.
    ///
    /// Fails only on configuration problems, before the grid is touched:
    /// every footprint lookup is resolved up front. Items that do not fit
    /// are reported in [`PlacementResult::dropped`].
    pub fn run(
        &self,
        items: &[ContentItem],
        grid: &mut OccupancyGrid,
    ) -> Result<PlacementResult, GridError> {
        self.validate(items, grid)?;

        let order = priority_order(items);
        let mut placed = Vec::with_capacity(items.len());
        let mut dropped = Vec::new();
        let mut placed_per_kind: BTreeMap<ContentKind, usize> = BTreeMap::new();

        // Anchored branding first, in priority order.
        let anchors = self.reservable_anchors(grid);
        let mut anchored: Vec<(usize, Rect)> = Vec::with_capacity(anchors.len());
        let mut packing = Vec::with_capacity(order.len());
        for &idx in &order {
            let item = &items[idx];
            if item.kind != ContentKind::Branding {
                packing.push(idx);
            } else if self.limit_reached(item.kind, &placed_per_kind) {
                dropped.push(drop_item(item, DropReason::KindLimit));
            } else if let Some(&anchor) = anchors.get(anchored.len()) {
                *placed_per_kind.entry(item.kind).or_default() += 1;
                anchored.push((idx, anchor));
            } else {
                packing.push(idx);
            }
        }

        let candidates = packing
            .iter()
            .map(|&idx| {
                let item = &items[idx];
                self.catalog
                    .candidates_for(item.kind, item.rank_within_type)
                    .map(|c| (idx, c))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let reservations: Vec<(Rect, String)> = anchors
            .iter()
            .enumerate()
            .map(|(i, &anchor)| {
                let reservation = format!("#anchor-{}", i + 1);
                grid.place(anchor, &reservation);
                (anchor, reservation)
            })
            .collect();

        for (&(idx, anchor), (_, reservation)) in anchored.iter().zip(&reservations) {
            let item = &items[idx];
            grid.release(anchor, reservation);
            grid.place(anchor, &item.id);
            debug!("anchored `{}` at {:?}", item.id, anchor);
            placed.push(PlacedComponent::from_item(item, anchor));
        }

        for (idx, candidates) in candidates {
            let item = &items[idx];
            if self.limit_reached(item.kind, &placed_per_kind) {
                debug!("skipping `{}`: {} limit reached", item.id, item.kind);
                dropped.push(drop_item(item, DropReason::KindLimit));
                continue;
            }

            let position = candidates
                .iter()
                .find_map(|fp| grid.first_fit(fp.width, fp.height));

            match position {
                Some(rect) => {
                    grid.place(rect, &item.id);
                    debug!(
                        "placed `{}` ({}) at row {} col {} as {}x{}",
                        item.id, item.kind, rect.row, rect.column, rect.width, rect.height
                    );
                    *placed_per_kind.entry(item.kind).or_default() += 1;
                    placed.push(PlacedComponent::from_item(item, rect));
                }
                None => {
                    warn!(
                        "dropping `{}` ({}, priority {}): no footprint fits the remaining grid",
                        item.id, item.kind, item.global_priority
                    );
                    dropped.push(drop_item(item, DropReason::NoFit));
                }
            }
        }

        for (anchor, reservation) in reservations.into_iter().skip(anchored.len()) {
            grid.release(anchor, &reservation);
        }

        Ok(PlacementResult { placed, dropped })
    }

    /// Anchors that are free on `grid` and clear of every earlier one, in
    /// configuration order.
    fn reservable_anchors(&self, grid: &OccupancyGrid) -> Vec<Rect> {
        let mut reservable: Vec<Rect> = Vec::with_capacity(self.config.anchors.len());
        for (i, anchor) in self.config.anchors.iter().enumerate() {
            if !grid.can_place_rect(anchor) || reservable.iter().any(|r| r.intersects(anchor)) {
                warn!("anchor {i} at {anchor:?} is already occupied; skipping it");
                continue;
            }
            reservable.push(*anchor);
        }
        reservable
    }

    fn limit_reached(&self, kind: ContentKind, placed: &BTreeMap<ContentKind, usize>) -> bool {
        self.config
            .kind_limits
            .get(&kind)
            .is_some_and(|&limit| placed.get(&kind).copied().unwrap_or(0) >= limit)
    }
}

fn drop_item(item: &ContentItem, reason: DropReason) -> DroppedItem {
    DroppedItem {
        id: item.id.clone(),
        kind: item.kind,
        global_priority: item.global_priority,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::Footprint;

    fn engine_parts() -> (FootprintCatalog, PlacementConfig) {
        (FootprintCatalog::default(), PlacementConfig::default())
    }

    fn position_of<'r>(result: &'r PlacementResult, id: &str) -> Option<&'r Rect> {
        result
            .placed
            .iter()
            .find(|c| c.id == id)
            .map(|c| &c.position)
    }

    #[test]
    fn test_highest_priority_takes_top_left() {
        let (catalog, config) = engine_parts();
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![
            ContentItem::new("h2", ContentKind::Headline, 2, 2),
            ContentItem::new("h1", ContentKind::Headline, 1, 1),
        ];
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(position_of(&result, "h1"), Some(&Rect::new(1, 1, 6, 4)));
        assert_eq!(position_of(&result, "h2"), Some(&Rect::new(1, 7, 6, 4)));
        assert_eq!(result.placed[0].id, "h1");
    }

    #[test]
    fn test_branding_anchored_and_first() {
        let (catalog, config) = engine_parts();
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![
            ContentItem::new("h1", ContentKind::Headline, 1, 1),
            ContentItem::new("b1", ContentKind::Branding, 1, 90),
            ContentItem::new("b2", ContentKind::Branding, 2, 80),
        ];
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        // b2 has the better priority, so it claims the first anchor.
        assert_eq!(result.placed[0].id, "b2");
        assert_eq!(result.placed[0].position, Rect::new(15, 1, 2, 2));
        assert_eq!(result.placed[1].id, "b1");
        assert_eq!(result.placed[1].position, Rect::new(15, 6, 2, 2));
        assert_eq!(result.placed[2].id, "h1");
    }

    #[test]
    fn test_unclaimed_anchor_released() {
        let (catalog, config) = engine_parts();
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![ContentItem::new("b1", ContentKind::Branding, 1, 1)];
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(result.placed.len(), 1);
        assert_eq!(grid.occupied_count(), 4);
        assert!(grid.is_free(15, 6));
        assert!(grid.is_free(16, 12));
    }

    #[test]
    fn test_anchors_block_packing() {
        let catalog = FootprintCatalog::default();
        let config = PlacementConfig::default().with_anchors(vec![Rect::new(1, 1, 2, 2)]);
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![ContentItem::new("h1", ContentKind::Headline, 1, 1)];
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        // The reserved anchor keeps the headline off the top-left corner even
        // without any branding item.
        assert_eq!(position_of(&result, "h1"), Some(&Rect::new(1, 3, 6, 4)));
        assert!(grid.is_free(1, 1));
    }

    #[test]
    fn test_extra_branding_is_packed() {
        let (catalog, _) = engine_parts();
        let config = PlacementConfig::default().with_anchors(vec![Rect::new(16, 11, 2, 1)]);
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![
            ContentItem::new("b1", ContentKind::Branding, 1, 1),
            ContentItem::new("b2", ContentKind::Branding, 2, 2),
        ];
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(position_of(&result, "b1"), Some(&Rect::new(16, 11, 2, 1)));
        assert_eq!(position_of(&result, "b2"), Some(&Rect::new(1, 1, 2, 2)));
    }

    #[test]
    fn test_extra_branding_needs_catalog_rule() {
        let catalog =
            FootprintCatalog::new().with_candidates(ContentKind::Bit, vec![Footprint::new(1, 1)]);
        let config = PlacementConfig::default().with_anchors(vec![]);
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![ContentItem::new("b1", ContentKind::Branding, 1, 1)];
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(matches!(
            engine.run(&items, &mut grid),
            Err(GridError::MissingFootprint(ContentKind::Branding))
        ));
    }

    #[test]
    fn test_shape_degradation() {
        let (catalog, _) = engine_parts();
        let config = PlacementConfig::default().with_anchors(vec![]);
        let engine = PlacementEngine::new(&catalog, &config);
        // 5 columns: 6x4 cannot fit, 5x4 can.
        let items = vec![ContentItem::new("h1", ContentKind::Headline, 1, 1)];
        let mut grid = OccupancyGrid::new(5, 4);
        let result = engine.run(&items, &mut grid).unwrap();
        assert_eq!(result.placed[0].position, Rect::new(1, 1, 5, 4));
    }

    #[test]
    fn test_drop_when_nothing_fits() {
        let (catalog, _) = engine_parts();
        let config = PlacementConfig::default().with_anchors(vec![]);
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![
            ContentItem::new("h1", ContentKind::Headline, 1, 1),
            ContentItem::new("h2", ContentKind::Headline, 2, 2),
            ContentItem::new("q1", ContentKind::QuickLink, 1, 3),
        ];
        let mut grid = OccupancyGrid::new(6, 5);
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(position_of(&result, "h1"), Some(&Rect::new(1, 1, 6, 4)));
        assert!(position_of(&result, "h2").is_none());
        assert_eq!(position_of(&result, "q1"), Some(&Rect::new(5, 1, 4, 1)));
        assert_eq!(
            result.dropped,
            vec![DroppedItem {
                id: "h2".into(),
                kind: ContentKind::Headline,
                global_priority: 2,
                reason: DropReason::NoFit,
            }]
        );
        assert_eq!(result.placed_area(), 28);
        assert_eq!(grid.occupied_count(), 28);
    }

    #[test]
    fn test_kind_limit() {
        let catalog = FootprintCatalog::default();
        let config = PlacementConfig::default()
            .with_anchors(vec![])
            .with_kind_limit(ContentKind::Stock, 2);
        let engine = PlacementEngine::new(&catalog, &config);
        let items: Vec<ContentItem> = (1..=4)
            .map(|i| ContentItem::new(format!("s{i}"), ContentKind::Stock, i, i as i64))
            .collect();
        let mut grid = OccupancyGrid::new(12, 16);
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(result.placed.len(), 2);
        assert_eq!(result.dropped.len(), 2);
        assert!(result.dropped.iter().all(|d| d.reason == DropReason::KindLimit));
        assert_eq!(result.dropped[0].id, "s3");
    }

    #[test]
    fn test_missing_rule_fails_before_placing() {
        let catalog = FootprintCatalog::new()
            .with_candidates(ContentKind::Headline, vec![Footprint::new(2, 2)]);
        let config = PlacementConfig::default().with_anchors(vec![]);
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![
            ContentItem::new("h1", ContentKind::Headline, 1, 1),
            ContentItem::new("s1", ContentKind::Stock, 1, 2),
        ];
        let mut grid = OccupancyGrid::new(12, 16);
        assert!(matches!(
            engine.run(&items, &mut grid),
            Err(GridError::MissingFootprint(ContentKind::Stock))
        ));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_lookup_failure_leaves_grid_untouched() {
        let catalog = FootprintCatalog::new()
            .with_candidates(ContentKind::Headline, vec![Footprint::new(2, 2)]);
        let config = PlacementConfig::default();
        let engine = PlacementEngine::new(&catalog, &config);
        let items: Vec<ContentItem> = (1..=3)
            .map(|i| ContentItem::new(format!("b{i}"), ContentKind::Branding, i, i as i64))
            .collect();

        // One anchor is already taken, so the third brand mark needs a rule.
        let mut grid = OccupancyGrid::new(12, 16);
        grid.place(Rect::new(15, 1, 2, 2), "taken");
        assert!(matches!(
            engine.run(&items, &mut grid),
            Err(GridError::MissingFootprint(ContentKind::Branding))
        ));
        assert_eq!(grid.occupied_count(), 4);
        assert!(grid.is_free(15, 6));
        assert!(grid.is_free(15, 11));
    }

    #[test]
    fn test_occupied_anchor_skipped() {
        let (catalog, config) = engine_parts();
        let engine = PlacementEngine::new(&catalog, &config);
        let items = vec![ContentItem::new("b1", ContentKind::Branding, 1, 1)];
        let mut grid = OccupancyGrid::new(12, 16);
        grid.place(Rect::new(15, 1, 2, 2), "taken");
        let result = engine.run(&items, &mut grid).unwrap();

        assert_eq!(position_of(&result, "b1"), Some(&Rect::new(15, 6, 2, 2)));
        assert_eq!(grid.occupied_count(), 8);
        assert!(grid.is_free(15, 11));
    }

    #[test]
    fn test_anchor_outside_grid() {
        let (catalog, config) = engine_parts();
        let engine = PlacementEngine::new(&catalog, &config);
        let mut grid = OccupancyGrid::new(6, 6);
        assert!(matches!(
            engine.run(&[], &mut grid),
            Err(GridError::InvalidAnchor { .. })
        ));
    }
}
