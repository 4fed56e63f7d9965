//! Blueprint types.

use super::component::PlacedComponent;
use crate::error::GridError;
use crate::grid::GridConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintMetadata {
    pub generated_at: DateTime<Utc>,

    /// Number of components, filler included.
    pub total_components: usize,

    /// Percentage of cells covered by any component, filler included.
    pub efficiency: f64,

    /// Percentage of cells covered by components seated by the placement
    /// pass, before filler.
    pub content_efficiency: f64,
}

/// The assembled layout handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub grid_config: GridConfig,
    pub components: Vec<PlacedComponent>,
    pub metadata: BlueprintMetadata,
}

impl Blueprint {
    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cells covered by all components.
    pub fn occupied_cells(&self) -> usize {
        self.components.iter().map(PlacedComponent::area).sum()
    }

    /// Looks up a component by id.
    pub fn component(&self, id: &str) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }
}
