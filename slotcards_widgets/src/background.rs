use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Wooden table top with a slowly drifting grain
pub struct TableWidget {
    pub tick: u64,
}

impl TableWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for TableWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let drift = (self.tick % 720) as f64 * 0.01;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Long horizontal grain lines with a little waviness
                let grain = ((y as f64 * 0.9 + (x as f64 * 0.07 + drift).sin() * 1.5).sin()
                    * 6.0) as i16;

                let r = (74 + grain).clamp(0, 255) as u8;
                let g = (47 + grain / 2).clamp(0, 255) as u8;
                let b = (28 + grain / 3).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
