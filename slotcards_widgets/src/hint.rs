use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Bottom line: key help plus hand and slot counts
pub struct HintWidget {
    pub hand: usize,
    pub placed: usize,
    pub slots: usize,
}

impl HintWidget {
    pub fn new(hand: usize, placed: usize, slots: usize) -> Self {
        Self {
            hand,
            placed,
            slots,
        }
    }
}

impl Widget for HintWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Theme::GOLD);
        let dim = Style::default().fg(Theme::DIM_TEXT);
        let line = Line::from(vec![
            Span::styled("[", dim),
            Span::styled("Drag", key),
            Span::styled("] Move card  [", dim),
            Span::styled("R", key),
            Span::styled("] Re-deal  [", dim),
            Span::styled("Q", key),
            Span::styled("] Quit   ", dim),
            Span::styled(
                format!("Hand {}", self.hand),
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" \u{2502} ", dim),
            Span::styled(
                format!("Slots {}/{}", self.placed, self.slots),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(Theme::BG))
            .render(area, buf);
    }
}
