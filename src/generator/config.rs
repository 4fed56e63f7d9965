//! Aggregate generator configuration.

use crate::blueprint::AssemblyConfig;
use crate::error::GridError;
use crate::filler::FillerConfig;
use crate::footprint::FootprintCatalog;
use crate::grid::GridConfig;
use crate::placement::PlacementConfig;
use serde::{Deserialize, Serialize};

/// Everything a blueprint generation needs besides the items.
///
/// Loaded once at startup and never mutated during a run. Every section
/// has a default, so a JSON document only needs the parts it changes.
///
/// # Examples
///
/// ```
/// use u_blueprint::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(
///     r#"{"grid": {"columns": 12, "rows": 16, "cellSize": 40}, "filler": {"pattern": "checkerboard"}}"#,
/// ).unwrap();
/// assert!((config.grid.cell_size - 40.0).abs() < 1e-10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub grid: GridConfig,
    pub catalog: FootprintCatalog,
    pub placement: PlacementConfig,
    pub filler: FillerConfig,
    pub assembly: AssemblyConfig,
}

impl GeneratorConfig {
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_catalog(mut self, catalog: FootprintCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_filler(mut self, filler: FillerConfig) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_assembly(mut self, assembly: AssemblyConfig) -> Self {
        self.assembly = assembly;
        self
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), GridError> {
        self.grid.validate()?;
        self.catalog.validate()?;
        self.placement.validate(&self.grid)?;
        self.filler.validate()?;
        self.assembly.validate()?;
        Ok(())
    }
}
