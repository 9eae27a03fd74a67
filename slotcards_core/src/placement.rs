//! Slot targeting and drop resolution.
//!
//! A card targets a slot when the intersection of their bounds is at least
//! `threshold` wide. Height is not considered.

use crate::card::{Slot, SlotId};
use crate::geom::Bounds;

/// Whether `card` overlaps `slot` widely enough to count as a drop target
pub fn is_target(card: &Bounds, slot: &Bounds, threshold: f32) -> bool {
    card.intersection(slot).width >= threshold
}

/// Per-slot target flags, used to paint slot tints while dragging.
/// Occupied slots are included; tinting does not care about occupancy.
pub fn targeted_slots(
    card: &Bounds,
    slots: impl IntoIterator<Item = (SlotId, Bounds)>,
    threshold: f32,
) -> Vec<(SlotId, bool)> {
    slots
        .into_iter()
        .map(|(id, bounds)| (id, is_target(card, &bounds, threshold)))
        .collect()
}

/// Pick the slot a dropped card lands in: the first unoccupied slot, in
/// slot order, that the card targets. Occupied slots are skipped without
/// an overlap check.
pub fn resolve_drop(
    card: &Bounds,
    slots: &[Slot],
    slot_bounds: impl Fn(SlotId) -> Bounds,
    threshold: f32,
) -> Option<SlotId> {
    slots
        .iter()
        .filter(|slot| !slot.is_occupied())
        .find(|slot| is_target(card, &slot_bounds(slot.id), threshold))
        .map(|slot| slot.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;

    fn slot_bounds(id: SlotId) -> Bounds {
        Bounds::new(id.0 as f32 * 400.0, 0.0, 320.0, 440.0)
    }

    fn slots() -> Vec<Slot> {
        (0..5).map(|i| Slot::new(SlotId(i))).collect()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let slot = Bounds::new(0.0, 0.0, 320.0, 440.0);
        let exactly = Bounds::new(120.0, 0.0, 384.0, 512.0);
        assert_eq!(exactly.intersection(&slot).width, 200.0);
        assert!(is_target(&exactly, &slot, 200.0));

        let short = Bounds::new(120.001, 0.0, 384.0, 512.0);
        assert!(!is_target(&short, &slot, 200.0));
    }

    #[test]
    fn test_threshold_ignores_height() {
        let slot = Bounds::new(0.0, 0.0, 320.0, 440.0);
        let sliver = Bounds::new(0.0, 439.0, 300.0, 512.0);
        assert!(is_target(&sliver, &slot, 200.0));
    }

    #[test]
    fn test_resolve_drop_picks_first_match() {
        // Wide card straddling slots 1 and 2, overlapping both by >= 200
        let card = Bounds::new(500.0, 0.0, 600.0, 100.0);
        let picked = resolve_drop(&card, &slots(), slot_bounds, 200.0);
        assert_eq!(picked, Some(SlotId(1)));
    }

    #[test]
    fn test_resolve_drop_skips_occupied() {
        let card = Bounds::new(500.0, 0.0, 600.0, 100.0);
        let mut slots = slots();
        slots[1].card = Some(CardId(9));
        let picked = resolve_drop(&card, &slots, slot_bounds, 200.0);
        assert_eq!(picked, Some(SlotId(2)));

        slots[2].card = Some(CardId(10));
        assert_eq!(resolve_drop(&card, &slots, slot_bounds, 200.0), None);
    }

    #[test]
    fn test_targeted_slots_flags_each_slot() {
        let card = Bounds::new(0.0, 0.0, 320.0, 100.0);
        let flags: Vec<bool> = targeted_slots(
            &card,
            (0..3).map(|i| (SlotId(i), slot_bounds(SlotId(i)))),
            200.0,
        )
        .into_iter()
        .map(|(_, hit)| hit)
        .collect();
        assert_eq!(flags, vec![true, false, false]);
    }
}
