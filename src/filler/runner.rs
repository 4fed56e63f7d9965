//! Filler execution.

use super::config::{BitPattern, FillerConfig, GapSlot};
use crate::blueprint::PlacedComponent;
use crate::grid::{OccupancyGrid, Rect};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fills leftover space: configured gap slots first, then a single-cell bit
/// in every remaining free cell.
pub struct FillerPass;

impl FillerPass {
    /// Seats the gap slots, then emits one bit per free cell in row-major
    /// order, marking everything occupied. Returns nothing when disabled or
    /// when the grid is full.
    pub fn run(grid: &mut OccupancyGrid, config: &FillerConfig) -> Vec<PlacedComponent> {
        if !config.enabled {
            return Vec::new();
        }

        let mut filler = Self::seat_gap_slots(grid, &config.gap_slots);
        filler.extend(Self::emit_bits(grid, config));
        filler
    }

    fn seat_gap_slots(grid: &mut OccupancyGrid, slots: &[GapSlot]) -> Vec<PlacedComponent> {
        let mut seated = Vec::new();
        for slot in slots {
            let mut count = 0;
            while count < slot.max_count {
                let Some(rect) = grid.first_fit(slot.width, slot.height) else {
                    break;
                };
                count += 1;
                let id = slot.slot_id(count);
                grid.place(rect, &id);
                seated.push(PlacedComponent::placeholder(id, slot.kind, rect));
            }
            debug!(
                "seated {count} of at most {} {}x{} {} slots",
                slot.max_count, slot.width, slot.height, slot.kind
            );
        }
        seated
    }

    fn emit_bits(grid: &mut OccupancyGrid, config: &FillerConfig) -> Vec<PlacedComponent> {
        let free: Vec<(u32, u32)> = grid.free_cells().collect();
        let mut rng = match config.pattern {
            BitPattern::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            _ => None,
        };

        let mut bits = Vec::with_capacity(free.len());
        for (i, (row, column)) in free.into_iter().enumerate() {
            let value = match (config.pattern, rng.as_mut()) {
                (BitPattern::Seeded(_), Some(rng)) => rng.random_range(0..=1u8),
                (BitPattern::Checkerboard, _) => ((row + column) % 2) as u8,
                _ => ((i + 1) % 2) as u8,
            };
            let id = config.filler_id(i + 1);
            grid.place(Rect::new(row, column, 1, 1), &id);
            bits.push(PlacedComponent::bit(id, row, column, value));
        }

        debug!("filled {} free cells with bits", bits.len());
        bits
    }
}
