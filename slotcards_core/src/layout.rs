//! Horizontal layout of the hand.
//!
//! Cards are centered as a group on the screen and separated by a fixed
//! padding. Positions are sprite centers.

/// Total width of a row of `count` cards of `card_width` separated by `padding`
pub fn row_width(count: usize, card_width: f32, padding: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    card_width * count as f32 + padding * (count - 1) as f32
}

/// Center x of the card at `index` in a hand of `count` cards
pub fn hand_target_x(
    index: usize,
    count: usize,
    card_width: f32,
    padding: f32,
    screen_width: f32,
) -> f32 {
    let total = row_width(count, card_width, padding);
    (screen_width + card_width) / 2.0 + index as f32 * (card_width + padding) - total / 2.0
}

/// Target x for every card of a hand, given each card's layout width
pub fn hand_targets(widths: &[f32], padding: f32, screen_width: f32) -> Vec<f32> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| hand_target_x(i, widths.len(), w, padding, screen_width))
        .collect()
}
