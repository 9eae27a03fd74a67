pub mod background;
pub mod card;
pub mod hint;
pub mod slot;
pub mod theme;
pub mod viewport;

pub use theme::Theme;
pub use viewport::Viewport;

use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// Write a symbol into a cell, silently skipping cells outside the buffer
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

/// Write a string left to right, clipped at `max_x`
pub(crate) fn put_str(buf: &mut Buffer, x: u16, y: u16, max_x: u16, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        let cx = x.saturating_add(i as u16);
        if cx >= max_x {
            break;
        }
        let mut tmp = [0u8; 4];
        put(buf, cx, y, ch.encode_utf8(&mut tmp), style);
    }
}
