use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use slotcards_core::Tint;

use crate::theme::Theme;
use crate::{put, put_str};

/// A placement slot outline. Filled with the tint colour while a dragged
/// card targets it.
pub struct SlotWidget {
    pub tint: Option<Tint>,
    pub occupied: bool,
}

impl SlotWidget {
    pub fn new() -> Self {
        Self {
            tint: None,
            occupied: false,
        }
    }

    pub fn tint(mut self, tint: Option<Tint>) -> Self {
        self.tint = tint;
        self
    }

    pub fn occupied(mut self, occupied: bool) -> Self {
        self.occupied = occupied;
        self
    }
}

impl Default for SlotWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SlotWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let fill = self.tint.map(Theme::tint).unwrap_or(Theme::SLOT_FILL);
        let border = match self.tint {
            Some(_) => Style::default().fg(Theme::BRIGHT_TEXT).bg(fill),
            None => Style::default().fg(Theme::SLOT_BORDER).bg(fill),
        };
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        // Dashed outline
        for x in area.left()..=right {
            let sym = if (x - area.left()) % 2 == 0 { "\u{2504}" } else { " " }; // ┄
            put(buf, x, area.top(), sym, border);
            put(buf, x, bottom, sym, border);
        }
        for y in area.top()..=bottom {
            let sym = if (y - area.top()) % 2 == 0 { "\u{2506}" } else { " " }; // ┆
            put(buf, area.left(), y, sym, border);
            put(buf, right, y, sym, border);
        }
        put(buf, area.left(), area.top(), "\u{256d}", border);
        put(buf, right, area.top(), "\u{256e}", border);
        put(buf, area.left(), bottom, "\u{2570}", border);
        put(buf, right, bottom, "\u{256f}", border);

        // Interior
        for y in area.top() + 1..bottom {
            for x in area.left() + 1..right {
                put(buf, x, y, " ", Style::default().bg(fill));
            }
        }

        if !self.occupied {
            let label = if self.tint.is_some() { "drop" } else { "empty" };
            let inner_w = area.width.saturating_sub(2);
            let x = area.x + 1 + inner_w.saturating_sub(label.len() as u16) / 2;
            let y = area.y + area.height / 2;
            let style = Style::default()
                .fg(if self.tint.is_some() {
                    Theme::BRIGHT_TEXT
                } else {
                    Theme::DIM_TEXT
                })
                .bg(fill)
                .add_modifier(Modifier::BOLD);
            put_str(buf, x, y, right, label, style);
        }
    }
}
