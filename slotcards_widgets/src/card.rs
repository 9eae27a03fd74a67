use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use slotcards_core::{Artwork, Tint};

use crate::theme::Theme;
use crate::{put, put_str};

/// A card face drawn at whatever size the viewport gives it
pub struct CardWidget {
    pub artwork: Artwork,
    /// Hover highlight colour, when lit
    pub glow: Option<Tint>,
}

impl CardWidget {
    pub fn new(artwork: Artwork) -> Self {
        Self {
            artwork,
            glow: None,
        }
    }

    pub fn glow(mut self, glow: Option<Tint>) -> Self {
        self.glow = glow;
        self
    }

    fn border_color(&self) -> Color {
        self.glow.map(Theme::tint).unwrap_or(Theme::CARD_BORDER)
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let face = Style::default().bg(Theme::CARD_FACE).fg(Theme::CARD_INK);
        if area.width < 3 || area.height < 3 {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    put(buf, x, y, " ", face);
                }
            }
            return;
        }

        let border = Style::default().fg(self.border_color()).bg(Theme::CARD_FACE);
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        // Highlighted cards get a heavy double border in the glow colour
        let (h, v, tl, tr, bl, br) = if self.glow.is_some() {
            ("\u{2550}", "\u{2551}", "\u{2554}", "\u{2557}", "\u{255a}", "\u{255d}")
        } else {
            ("\u{2500}", "\u{2502}", "\u{256d}", "\u{256e}", "\u{2570}", "\u{256f}")
        };

        for x in area.left() + 1..right {
            put(buf, x, area.top(), h, border);
            put(buf, x, bottom, h, border);
        }
        for y in area.top() + 1..bottom {
            put(buf, area.left(), y, v, border);
            put(buf, right, y, v, border);
            for x in area.left() + 1..right {
                put(buf, x, y, " ", face);
            }
        }
        put(buf, area.left(), area.top(), tl, border);
        put(buf, right, area.top(), tr, border);
        put(buf, area.left(), bottom, bl, border);
        put(buf, right, bottom, br, border);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );

        // Artwork window: upper part of the face, inset by one cell
        let art_h = inner.height.saturating_sub(2) * 2 / 3;
        if inner.width > 2 && art_h > 0 {
            let art = Style::default().fg(Theme::ARTWORK).bg(Theme::CARD_FACE);
            for y in inner.y + 1..inner.y + 1 + art_h {
                for x in inner.x + 1..inner.right() - 1 {
                    let sym = if (x + y) % 2 == 0 { "\u{2593}" } else { "\u{2592}" }; // ▓ ▒
                    put(buf, x, y, sym, art);
                }
            }
        }

        // Caption along the bottom of the face
        let name = if inner.width as usize >= self.artwork.name().len() {
            self.artwork.name()
        } else {
            self.artwork.short_name()
        };
        let caption = Style::default()
            .fg(Theme::CARD_INK)
            .bg(Theme::CARD_FACE)
            .add_modifier(Modifier::BOLD);
        let x = inner.x + inner.width.saturating_sub(name.len() as u16) / 2;
        let y = inner.bottom().saturating_sub(1);
        put_str(buf, x, y, inner.right(), name, caption);
    }
}
