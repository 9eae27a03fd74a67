use crate::card::{CardId, SlotId};
use crate::geom::Vec2;

/// The card currently held by the pointer, tagged with where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dragging {
    Hand {
        index: usize,
        card: CardId,
        /// Resting position to return to if the drop is rejected
        original: Vec2,
    },
    /// Dragging a card back out of a slot is not supported; nothing
    /// creates this variant yet.
    Slot { slot: SlotId, card: CardId },
}

impl Dragging {
    pub fn card(&self) -> CardId {
        match self {
            Dragging::Hand { card, .. } | Dragging::Slot { card, .. } => *card,
        }
    }
}

/// The card lifted by pointer hover, tagged with where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hovering {
    Hand {
        index: usize,
        card: CardId,
        /// Position before the lift, restored on pointer-out
        original: Vec2,
    },
    Slot { slot: SlotId, card: CardId },
}

impl Hovering {
    pub fn card(&self) -> CardId {
        match self {
            Hovering::Hand { card, .. } | Hovering::Slot { card, .. } => *card,
        }
    }
}
