use ratatui::style::Color;
use slotcards_core::Tint;

/// Colour theme for the card table
pub struct Theme;

impl Theme {
    // Table
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const WOOD: Color = Color::Rgb(74, 47, 28);

    // Cards
    pub const CARD_FACE: Color = Color::Rgb(236, 232, 220);
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_INK: Color = Color::Rgb(40, 40, 60);
    pub const ARTWORK: Color = Color::Rgb(120, 110, 170);

    // Slots
    pub const SLOT_BORDER: Color = Color::Rgb(160, 140, 110);
    pub const SLOT_FILL: Color = Color::Rgb(64, 40, 24);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);

    /// Terminal colour for an engine tint
    pub fn tint(tint: Tint) -> Color {
        let (r, g, b) = tint.rgb();
        Color::Rgb(r, g, b)
    }
}
