use std::fmt;

/// Stable identity of a card sprite. Input events name cards by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Index of one of the fixed placement slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// A 24-bit RGB colour, as used for slot tints and the hover glow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(pub u32);

impl Tint {
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

/// Artwork printed on a card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artwork {
    Programmer1,
    Programmer2,
    Programmer3,
}

impl Artwork {
    pub const ALL: [Artwork; 3] = [
        Artwork::Programmer1,
        Artwork::Programmer2,
        Artwork::Programmer3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Artwork::Programmer1 => "programmer1",
            Artwork::Programmer2 => "programmer2",
            Artwork::Programmer3 => "programmer3",
        }
    }

    /// Short caption for cramped renderings
    pub fn short_name(&self) -> &'static str {
        match self {
            Artwork::Programmer1 => "P1",
            Artwork::Programmer2 => "P2",
            Artwork::Programmer3 => "P3",
        }
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A placement target. Holds at most one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub card: Option<CardId>,
}

impl Slot {
    pub fn new(id: SlotId) -> Self {
        Self { id, card: None }
    }

    pub fn is_occupied(&self) -> bool {
        self.card.is_some()
    }
}
