//! Blueprint assembly: ordering, enrichment and metadata.

use super::component::PlacedComponent;
use super::types::{Blueprint, BlueprintMetadata};
use crate::content::ContentKind;
use crate::error::GridError;
use crate::grid::GridConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order of components in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentOrder {
    /// By top-left cell: row, then column.
    #[default]
    Reading,

    /// Placement order: primary components by priority, then filler.
    Placement,
}

/// Configuration for blueprint assembly.
///
/// # Examples
///
/// ```
/// use u_blueprint::blueprint::{AssemblyConfig, ComponentOrder};
///
/// let config = AssemblyConfig::default()
///     .with_order(ComponentOrder::Placement)
///     .with_efficiency_decimals(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblyConfig {
    pub order: ComponentOrder,

    /// Decimal places kept in the efficiency figures.
    pub efficiency_decimals: u32,

    /// Number branding components 1..n in reading order (`orderId`).
    pub assign_branding_order: bool,

    /// When set, `day` components without a `dayNumber` field get the
    /// number of whole days from this instant to `generatedAt`.
    pub day_epoch: Option<DateTime<Utc>>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            order: ComponentOrder::default(),
            efficiency_decimals: 1,
            assign_branding_order: true,
            day_epoch: None,
        }
    }
}

impl AssemblyConfig {
    pub fn with_order(mut self, order: ComponentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_efficiency_decimals(mut self, decimals: u32) -> Self {
        self.efficiency_decimals = decimals;
        self
    }

    pub fn with_branding_order(mut self, assign: bool) -> Self {
        self.assign_branding_order = assign;
        self
    }

    pub fn with_day_epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.day_epoch = Some(epoch);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.efficiency_decimals > 6 {
            return Err(GridError::InvalidConfig(format!(
                "efficiency_decimals must be at most 6, got {}",
                self.efficiency_decimals
            )));
        }
        Ok(())
    }
}

/// Packages placed components into a [`Blueprint`].
pub struct BlueprintAssembler;

impl BlueprintAssembler {
    /// Builds the blueprint from the primary (placement) and filler
    /// components.
    pub fn assemble(
        grid: &GridConfig,
        primary: Vec<PlacedComponent>,
        filler: Vec<PlacedComponent>,
        generated_at: DateTime<Utc>,
        config: &AssemblyConfig,
    ) -> Blueprint {
        let total_cells = grid.total_cells();
        let content_cells: usize = primary.iter().map(PlacedComponent::area).sum();
        let filler_cells: usize = filler.iter().map(PlacedComponent::area).sum();

        let mut components = primary;
        components.extend(filler);

        if config.assign_branding_order {
            assign_branding_order(&mut components);
        }
        if let Some(epoch) = config.day_epoch {
            let day_number = (generated_at - epoch).num_days();
            for comp in components
                .iter_mut()
                .filter(|c| c.kind == ContentKind::Day)
            {
                comp.payload
                    .entry("dayNumber")
                    .or_insert_with(|| Value::from(day_number));
            }
        }
        if config.order == ComponentOrder::Reading {
            components.sort_by_key(|c| (c.position.row, c.position.column));
        }

        let decimals = config.efficiency_decimals;
        let metadata = BlueprintMetadata {
            generated_at,
            total_components: components.len(),
            efficiency: percentage(content_cells + filler_cells, total_cells, decimals),
            content_efficiency: percentage(content_cells, total_cells, decimals),
        };

        Blueprint {
            grid_config: grid.clone(),
            components,
            metadata,
        }
    }
}

fn assign_branding_order(components: &mut [PlacedComponent]) {
    let mut brandings: Vec<&mut PlacedComponent> = components
        .iter_mut()
        .filter(|c| c.kind == ContentKind::Branding)
        .collect();
    brandings.sort_by_key(|c| (c.position.row, c.position.column));
    for (i, comp) in brandings.into_iter().enumerate() {
        comp.payload.insert("orderId".into(), Value::from(i + 1));
    }
}

/// `100 * part / whole`, rounded to `decimals` places.
fn percentage(part: usize, whole: usize, decimals: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(decimals as i32);
    (100.0 * part as f64 / whole as f64 * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;
    use crate::grid::Rect;
    use chrono::TimeZone;

    fn at(id: &str, kind: ContentKind, rect: Rect) -> PlacedComponent {
        PlacedComponent::from_item(&ContentItem::new(id, kind, 1, 1), rect)
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 20, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_reading_order_and_metadata() {
        let grid = GridConfig::new(4, 4);
        let primary = vec![
            at("low", ContentKind::Stock, Rect::new(3, 1, 2, 2)),
            at("top", ContentKind::Headline, Rect::new(1, 1, 4, 2)),
        ];
        let filler = vec![PlacedComponent::bit("bit_1".into(), 3, 3, 1)];
        let config = AssemblyConfig::default();
        let bp = BlueprintAssembler::assemble(&grid, primary, filler, epoch(), &config);

        let ids: Vec<&str> = bp.components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "low", "bit_1"]);
        assert_eq!(bp.metadata.total_components, 3);
        // 13 of 16 cells.
        assert!((bp.metadata.efficiency - 81.3).abs() < 1e-9);
        assert!((bp.metadata.content_efficiency - 75.0).abs() < 1e-9);
        assert_eq!(bp.occupied_cells(), 13);
    }

    #[test]
    fn test_placement_order_kept() {
        let grid = GridConfig::new(4, 4);
        let primary = vec![
            at("low", ContentKind::Stock, Rect::new(3, 1, 2, 2)),
            at("top", ContentKind::Headline, Rect::new(1, 1, 4, 2)),
        ];
        let config = AssemblyConfig::default().with_order(ComponentOrder::Placement);
        let bp = BlueprintAssembler::assemble(&grid, primary, vec![], epoch(), &config);
        assert_eq!(bp.components[0].id, "low");
    }

    #[test]
    fn test_branding_order_ids() {
        let grid = GridConfig::new(6, 6);
        let primary = vec![
            at("b_late", ContentKind::Branding, Rect::new(5, 1, 2, 2)),
            at("b_right", ContentKind::Branding, Rect::new(1, 5, 2, 2)),
            at("b_left", ContentKind::Branding, Rect::new(1, 1, 2, 2)),
        ];
        let config = AssemblyConfig::default();
        let bp = BlueprintAssembler::assemble(&grid, primary, vec![], epoch(), &config);
        assert_eq!(bp.component("b_left").unwrap().payload["orderId"], 1);
        assert_eq!(bp.component("b_right").unwrap().payload["orderId"], 2);
        assert_eq!(bp.component("b_late").unwrap().payload["orderId"], 3);
    }

    #[test]
    fn test_branding_order_disabled() {
        let grid = GridConfig::new(2, 2);
        let primary = vec![at("b", ContentKind::Branding, Rect::new(1, 1, 2, 2))];
        let config = AssemblyConfig::default().with_branding_order(false);
        let bp = BlueprintAssembler::assemble(&grid, primary, vec![], epoch(), &config);
        assert!(bp.components[0].payload.get("orderId").is_none());
    }

    #[test]
    fn test_day_number_from_epoch() {
        let grid = GridConfig::new(4, 1);
        let primary = vec![
            at("d1", ContentKind::Day, Rect::new(1, 1, 2, 1)),
            PlacedComponent::from_item(
                &ContentItem::new("d2", ContentKind::Day, 2, 2).with_field("dayNumber", 7),
                Rect::new(1, 3, 2, 1),
            ),
        ];
        let generated_at = epoch() + chrono::Duration::days(30) + chrono::Duration::hours(5);
        let config = AssemblyConfig::default().with_day_epoch(epoch());
        let bp = BlueprintAssembler::assemble(&grid, primary, vec![], generated_at, &config);
        assert_eq!(bp.component("d1").unwrap().payload["dayNumber"], 30);
        assert_eq!(bp.component("d2").unwrap().payload["dayNumber"], 7);
    }

    #[test]
    fn test_percentage_rounding() {
        assert!((percentage(1, 3, 1) - 33.3).abs() < 1e-9);
        assert!((percentage(2, 3, 2) - 66.67).abs() < 1e-9);
        assert!((percentage(192, 192, 1) - 100.0).abs() < 1e-9);
        assert_eq!(percentage(0, 0, 1), 0.0);
    }

    #[test]
    fn test_validate_decimals() {
        assert!(AssemblyConfig::default().validate().is_ok());
        assert!(AssemblyConfig::default().with_efficiency_decimals(9).validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let grid = GridConfig::new(2, 1);
        let primary = vec![at("q", ContentKind::QuickLink, Rect::new(1, 1, 2, 1))];
        let config = AssemblyConfig::default();
        let bp = BlueprintAssembler::assemble(&grid, primary, vec![], epoch(), &config);
        let json = bp.to_json_pretty().unwrap();
        assert!(json.contains("\"gridConfig\""));
        assert!(json.contains("\"totalComponents\": 1"));
        assert!(json.contains("\"generatedAt\""));
        assert_eq!(Blueprint::from_json(&json).unwrap(), bp);
    }
}
