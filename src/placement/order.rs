//! Placement ordering.

use crate::content::ContentItem;

/// Indices of `items` sorted by `global_priority` ascending.
///
/// The sort is stable: items with equal priority keep their input order.
pub fn priority_order(items: &[ContentItem]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&i| items[i].global_priority);
    indices
}
