use ratatui::layout::Rect;
use slotcards_widgets::Theme;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

/// One key per slot so landings in different slots flash independently
pub const LANDING_KEYS: [&str; 5] = [
    "landing_0",
    "landing_1",
    "landing_2",
    "landing_3",
    "landing_4",
];

/// Table materializes when a hand is dealt
pub fn deal_in() -> Effect {
    fx::coalesce((450, Interpolation::CubicOut))
}

/// Hint line sweeps in alongside the deal
pub fn hint_sweep(area: Rect) -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        Theme::WOOD,
        (400, Interpolation::QuadOut),
    )
    .with_area(area)
}

/// Short gold flash over a slot when a card lands in it
pub fn landing_flash(area: Rect) -> Effect {
    fx::fade_from_fg(Theme::GOLD, (350, Interpolation::QuadOut)).with_area(area)
}
