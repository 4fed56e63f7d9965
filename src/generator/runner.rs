//! Generation pipeline.

use super::config::GeneratorConfig;
use crate::blueprint::{Blueprint, BlueprintAssembler};
use crate::content::{validate_items, ContentItem};
use crate::error::GridError;
use crate::filler::FillerPass;
use crate::grid::OccupancyGrid;
use crate::placement::{DroppedItem, PlacementEngine};
use chrono::{DateTime, Utc};
use log::{info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of one blueprint generation.
#[derive(Debug, Clone)]
pub struct BlueprintResult {
    /// The assembled blueprint.
    pub blueprint: Blueprint,

    /// Items left out of the layout, in priority order.
    pub dropped: Vec<DroppedItem>,
}

/// One independent generation for [`BlueprintRunner::run_batch`].
#[derive(Debug, Clone)]
pub struct BlueprintJob {
    pub config: GeneratorConfig,
    pub items: Vec<ContentItem>,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full placement → filler → assembly pipeline.
///
/// # Examples
///
/// ```
/// use u_blueprint::content::{ContentItem, ContentKind};
/// use u_blueprint::generator::{BlueprintRunner, GeneratorConfig};
///
/// let items = vec![
///     ContentItem::new("lead", ContentKind::Headline, 1, 1).with_field("title", "Launch"),
///     ContentItem::new("brand", ContentKind::Branding, 1, 2),
/// ];
/// let result = BlueprintRunner::run(&items, &GeneratorConfig::default()).unwrap();
///
/// assert!(result.dropped.is_empty());
/// assert!((result.blueprint.metadata.efficiency - 100.0).abs() < 1e-9);
/// ```
pub struct BlueprintRunner;

impl BlueprintRunner {
    /// Generates a blueprint stamped with the current time.
    pub fn run(
        items: &[ContentItem],
        config: &GeneratorConfig,
    ) -> Result<BlueprintResult, GridError> {
        Self::run_at(items, config, Utc::now())
    }

    /// Generates a blueprint stamped with `generated_at`.
    ///
    /// Identical inputs produce identical output.
    pub fn run_at(
        items: &[ContentItem],
        config: &GeneratorConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<BlueprintResult, GridError> {
        Self::validate(items, config)?;

        info!(
            "generating blueprint: {} items on a {}x{} grid",
            items.len(),
            config.grid.columns,
            config.grid.rows
        );

        let mut grid = OccupancyGrid::from_config(&config.grid);
        let engine = PlacementEngine::new(&config.catalog, &config.placement);
        let placement = engine.run(items, &mut grid)?;
        let filler = FillerPass::run(&mut grid, &config.filler);

        if !placement.dropped.is_empty() {
            warn!(
                "{} of {} items dropped",
                placement.dropped.len(),
                items.len()
            );
        }

        let blueprint = BlueprintAssembler::assemble(
            &config.grid,
            placement.placed,
            filler,
            generated_at,
            &config.assembly,
        );

        info!(
            "blueprint ready: {} components, efficiency {}% (content {}%)",
            blueprint.metadata.total_components,
            blueprint.metadata.efficiency,
            blueprint.metadata.content_efficiency
        );

        Ok(BlueprintResult {
            blueprint,
            dropped: placement.dropped,
        })
    }

    /// Checks configuration and items without placing anything.
    pub fn validate(items: &[ContentItem], config: &GeneratorConfig) -> Result<(), GridError> {
        config.validate()?;
        validate_items(items)?;
        if let Some(item) = items.iter().find(|item| config.filler.reserves(&item.id)) {
            return Err(GridError::ReservedItemId(item.id.clone()));
        }
        let grid = OccupancyGrid::from_config(&config.grid);
        PlacementEngine::new(&config.catalog, &config.placement).validate(items, &grid)
    }

    /// Runs independent jobs, in parallel when the `parallel` feature is
    /// enabled. Results keep job order.
    pub fn run_batch(jobs: &[BlueprintJob]) -> Vec<Result<BlueprintResult, GridError>> {
        #[cfg(feature = "parallel")]
        let results = jobs
            .par_iter()
            .map(|job| Self::run_at(&job.items, &job.config, job.generated_at))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results = jobs
            .iter()
            .map(|job| Self::run_at(&job.items, &job.config, job.generated_at))
            .collect();

        results
    }
}
