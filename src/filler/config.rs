//! Filler configuration.

use crate::content::ContentKind;
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// How the 0/1 value of each bit is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BitPattern {
    /// Parity of the filler's sequence number: 1, 0, 1, 0, ...
    #[default]
    Alternating,

    /// `(row + column) % 2`, independent of which cells are free.
    Checkerboard,

    /// Pseudo-random bits from a seeded generator. Same seed, same bits.
    Seeded(u64),
}

/// A fixed-size placeholder seated into leftover space before bits.
///
/// Up to `max_count` slots are placed, each at the first free
/// `width x height` position in row-major order. Ids are
/// `{id_prefix}_{n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSlot {
    pub kind: ContentKind,
    pub width: u32,
    pub height: u32,
    pub max_count: usize,
    pub id_prefix: String,
}

impl GapSlot {
    /// A slot whose ids are prefixed with the kind's wire name.
    pub fn new(kind: ContentKind, width: u32, height: u32, max_count: usize) -> Self {
        Self {
            kind,
            width,
            height,
            max_count,
            id_prefix: kind.as_str().into(),
        }
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Id of the `n`-th slot (1-based).
    pub fn slot_id(&self, n: usize) -> String {
        format!("{}_{n}", self.id_prefix)
    }
}

/// Configuration for the filler pass.
///
/// # Examples
///
/// ```
/// use u_blueprint::content::ContentKind;
/// use u_blueprint::filler::{BitPattern, FillerConfig, GapSlot};
///
/// let config = FillerConfig::default()
///     .with_pattern(BitPattern::Seeded(7))
///     .with_id_prefix("dot")
///     .with_gap_slot(GapSlot::new(ContentKind::Stock, 2, 2, 4))
///     .with_gap_slot(GapSlot::new(ContentKind::Day, 2, 1, 1));
/// assert!(config.validate().is_ok());
/// assert!(config.reserves("dot_3"));
/// assert!(config.reserves("stock_2"));
/// assert!(!config.reserves("dot_x"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FillerConfig {
    /// Whether the pass runs at all.
    pub enabled: bool,

    /// Value pattern for emitted bits.
    pub pattern: BitPattern,

    /// Filler ids are `{id_prefix}_{n}`, n counting from 1.
    pub id_prefix: String,

    /// Placeholder slots seated, in this order, before any bit. Empty by
    /// default, so every leftover cell becomes a bit.
    pub gap_slots: Vec<GapSlot>,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: BitPattern::default(),
            id_prefix: "bit".into(),
            gap_slots: Vec::new(),
        }
    }
}

impl FillerConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_pattern(mut self, pattern: BitPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_gap_slot(mut self, slot: GapSlot) -> Self {
        self.gap_slots.push(slot);
        self
    }

    /// Id of the `n`-th filler (1-based).
    pub fn filler_id(&self, n: usize) -> String {
        format!("{}_{n}", self.id_prefix)
    }

    /// Whether `id` has the shape of a bit or gap-slot id and could collide
    /// with one.
    pub fn reserves(&self, id: &str) -> bool {
        self.prefixes().any(|prefix| {
            id.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('_'))
                .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        })
    }

    fn prefixes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id_prefix.as_str())
            .chain(self.gap_slots.iter().map(|slot| slot.id_prefix.as_str()))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.id_prefix.is_empty() {
            return Err(GridError::InvalidConfig("filler id_prefix must not be empty".into()));
        }
        for (i, slot) in self.gap_slots.iter().enumerate() {
            if slot.width == 0 || slot.height == 0 {
                return Err(GridError::InvalidConfig(format!(
                    "gap slot {i} has zero-sized footprint {}x{}",
                    slot.width, slot.height
                )));
            }
            if slot.id_prefix.is_empty() {
                return Err(GridError::InvalidConfig(format!(
                    "gap slot {i} id_prefix must not be empty"
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = self.prefixes().find(|prefix| !seen.insert(*prefix)) {
            return Err(GridError::InvalidConfig(format!(
                "filler id prefix `{dup}` is used more than once"
            )));
        }
        Ok(())
    }
}
