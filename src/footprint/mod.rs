//! Footprint catalog: which rectangle sizes each kind of content may take.
//!
//! Lookup is by `(kind, rank_within_type)`. Each kind owns an ordered list
//! of rank tiers; an item uses the first tier whose bound admits its rank.
//! Within a tier, candidates run from most to least preferred and never grow
//! in area, so the placement engine degrades gracefully by walking the list.

mod catalog;

pub use catalog::{Footprint, FootprintCatalog, RankTier};
