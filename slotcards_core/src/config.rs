use std::time::Duration;

use tachyonfx::Interpolation;

use crate::card::Tint;
use crate::geom::Vec2;

/// Number of placement slots on the table
pub const SLOT_COUNT: usize = 5;

/// Minimum intersection width (inclusive) for a card to target a slot
pub const OVERLAP_THRESHOLD: f32 = 200.0;

/// Tunables for the card table. Coordinates are in scaled world units.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Layout divides texture widths by this
    pub device_pixel_ratio: f32,

    // Hand
    pub hand_padding: f32,
    pub hand_y: f32,
    pub hand_scale: f32,
    pub drag_scale_factor: f32,
    pub hover_lift: f32,
    /// How many of the three cards to deal (1..=3)
    pub deal_count: usize,

    // Slots
    pub slot_origin: Vec2,
    pub slot_spacing: f32,
    pub slot_scale: f32,
    pub overlap_threshold: f32,

    // Textures (pixel size before scaling)
    pub card_texture: (f32, f32),
    pub slot_texture: (f32, f32),

    // Colours
    pub target_tint: Tint,
    pub glow: Tint,

    // Animation
    pub easing: Interpolation,
    pub hover_duration: Duration,
    pub drag_scale_duration: Duration,
    pub place_duration: Duration,
    pub return_duration: Duration,
    pub layout_duration: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen_width: 2000.0,
            screen_height: 1700.0,
            device_pixel_ratio: 1.0,

            hand_padding: 40.0,
            hand_y: 1400.0,
            hand_scale: 0.5,
            drag_scale_factor: 1.2,
            hover_lift: 30.0,
            deal_count: 3,

            slot_origin: Vec2::new(200.0, 250.0),
            slot_spacing: 400.0,
            slot_scale: 0.4,
            overlap_threshold: OVERLAP_THRESHOLD,

            card_texture: (768.0, 1024.0),
            slot_texture: (800.0, 1100.0),

            target_tint: Tint(0x2233ff),
            glow: Tint(0x3f4fff),

            easing: Interpolation::CubicOut,
            hover_duration: Duration::from_millis(200),
            drag_scale_duration: Duration::from_millis(400),
            place_duration: Duration::from_millis(100),
            return_duration: Duration::from_millis(250),
            layout_duration: Duration::from_millis(250),
        }
    }
}

impl SceneConfig {
    /// Scale of a card while it is being dragged
    pub fn drag_scale(&self) -> f32 {
        self.drag_scale_factor * self.hand_scale
    }

    /// World position of slot `index`
    pub fn slot_position(&self, index: usize) -> Vec2 {
        Vec2::new(
            self.slot_origin.x + index as f32 * self.slot_spacing,
            self.slot_origin.y,
        )
    }

    pub fn with_deal_count(mut self, deal_count: usize) -> Self {
        self.deal_count = deal_count.clamp(1, 3);
        self
    }
}
