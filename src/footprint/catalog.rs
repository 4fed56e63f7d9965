//! Footprint catalog and its validation.

use crate::content::ContentKind;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `width x height` cell span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Candidate footprints for items ranked up to `max_rank`.
///
/// `max_rank = None` admits every rank and must close the tier list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankTier {
    pub max_rank: Option<u32>,
    pub candidates: Vec<Footprint>,
}

impl RankTier {
    /// Tier for ranks `1..=max_rank`.
    pub fn up_to(max_rank: u32, candidates: Vec<Footprint>) -> Self {
        Self {
            max_rank: Some(max_rank),
            candidates,
        }
    }

    /// Catch-all tier.
    pub fn rest(candidates: Vec<Footprint>) -> Self {
        Self {
            max_rank: None,
            candidates,
        }
    }

    fn admits(&self, rank: u32) -> bool {
        self.max_rank.is_none_or(|max| rank <= max)
    }
}

/// Maps each content kind to its ranked footprint candidates.
///
/// The default catalog encodes the newsletter policy: headlines get the
/// biggest blocks, secondary articles less, quick links a single row,
/// filler bits exactly one cell.
///
/// # Examples
///
/// ```
/// use u_blueprint::content::ContentKind;
/// use u_blueprint::footprint::{Footprint, FootprintCatalog, RankTier};
///
/// let catalog = FootprintCatalog::new()
///     .with_rule(ContentKind::Headline, vec![
///         RankTier::up_to(1, vec![Footprint::new(6, 4), Footprint::new(5, 4)]),
///         RankTier::rest(vec![Footprint::new(4, 3)]),
///     ]);
/// assert!(catalog.validate().is_ok());
///
/// let first = catalog.candidates_for(ContentKind::Headline, 1).unwrap();
/// assert_eq!(first[0], Footprint::new(6, 4));
/// let later = catalog.candidates_for(ContentKind::Headline, 4).unwrap();
/// assert_eq!(later, &[Footprint::new(4, 3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootprintCatalog {
    rules: BTreeMap<ContentKind, Vec<RankTier>>,
}

impl FootprintCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Sets the tiers for `kind`, replacing any previous rule.
    pub fn with_rule(mut self, kind: ContentKind, tiers: Vec<RankTier>) -> Self {
        self.rules.insert(kind, tiers);
        self
    }

    /// Sets a single catch-all tier for `kind`.
    pub fn with_candidates(self, kind: ContentKind, candidates: Vec<Footprint>) -> Self {
        self.with_rule(kind, vec![RankTier::rest(candidates)])
    }

    /// Whether `kind` has a rule.
    pub fn covers(&self, kind: ContentKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// Kinds with a rule, in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = ContentKind> + '_ {
        self.rules.keys().copied()
    }

    /// Ordered candidates for an item of `kind` at `rank`, most preferred
    /// first.
    pub fn candidates_for(&self, kind: ContentKind, rank: u32) -> Result<&[Footprint], GridError> {
        let tiers = self
            .rules
            .get(&kind)
            .ok_or(GridError::MissingFootprint(kind))?;
        tiers
            .iter()
            .find(|tier| tier.admits(rank))
            .map(|tier| tier.candidates.as_slice())
            .ok_or_else(|| GridError::InvalidFootprint {
                kind,
                reason: format!("no tier admits rank {rank}"),
            })
    }

    /// Validates every rule.
    ///
    /// Each kind needs at least one tier, tier bounds strictly increasing and
    /// ending in a catch-all tier, and each candidate list non-empty, free of
    /// zero-sized entries and non-increasing in area.
    pub fn validate(&self) -> Result<(), GridError> {
        for (&kind, tiers) in &self.rules {
            let invalid = |reason: String| GridError::InvalidFootprint { kind, reason };

            let Some(last) = tiers.last() else {
                return Err(invalid("no rank tiers".into()));
            };
            if last.max_rank.is_some() {
                return Err(invalid("last tier must admit every rank".into()));
            }

            let mut previous_bound = 0u32;
            for (i, tier) in tiers.iter().enumerate() {
                if let Some(max) = tier.max_rank {
                    if max <= previous_bound {
                        return Err(invalid(format!(
                            "tier {i} bound {max} must exceed previous bound {previous_bound}"
                        )));
                    }
                    previous_bound = max;
                } else if i + 1 != tiers.len() {
                    return Err(invalid(format!("catch-all tier {i} is not last")));
                }

                if tier.candidates.is_empty() {
                    return Err(invalid(format!("tier {i} has no candidates")));
                }
                if let Some(zero) = tier.candidates.iter().find(|f| f.area() == 0) {
                    return Err(invalid(format!(
                        "tier {i} has zero-sized candidate {}x{}",
                        zero.width, zero.height
                    )));
                }
                if let Some(w) = tier
                    .candidates
                    .windows(2)
                    .find(|w| w[1].area() > w[0].area())
                {
                    return Err(invalid(format!(
                        "tier {i} candidates grow in area: {}x{} before {}x{}",
                        w[0].width, w[0].height, w[1].width, w[1].height
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for FootprintCatalog {
    fn default() -> Self {
        let f = Footprint::new;
        FootprintCatalog::new()
            .with_rule(
                ContentKind::Headline,
                vec![
                    RankTier::up_to(3, vec![f(6, 4), f(5, 4), f(4, 3)]),
                    RankTier::rest(vec![f(5, 3), f(4, 3), f(4, 2)]),
                ],
            )
            .with_rule(
                ContentKind::Secondary,
                vec![
                    RankTier::up_to(3, vec![f(6, 3), f(4, 3), f(4, 2)]),
                    RankTier::rest(vec![f(4, 2), f(3, 2), f(2, 2)]),
                ],
            )
            .with_candidates(ContentKind::QuickLink, vec![f(4, 1), f(3, 1), f(2, 1)])
            .with_rule(
                ContentKind::GitRepo,
                vec![
                    RankTier::up_to(2, vec![f(4, 3), f(4, 2), f(3, 2)]),
                    RankTier::rest(vec![f(3, 2), f(2, 2)]),
                ],
            )
            .with_candidates(ContentKind::Stock, vec![f(2, 2), f(2, 1)])
            .with_candidates(ContentKind::Branding, vec![f(2, 2)])
            .with_candidates(ContentKind::Day, vec![f(2, 1), f(1, 1)])
            .with_candidates(ContentKind::Bit, vec![f(1, 1)])
    }
}
