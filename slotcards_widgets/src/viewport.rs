use ratatui::layout::Rect;
use slotcards_core::{Bounds, Vec2};

/// Maps the scaled world onto a block of terminal cells.
///
/// The world is stretched to fill the area on both axes; terminal cells
/// are roughly twice as tall as they are wide, so a uniform scale would
/// waste half the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(area: Rect, world_width: f32, world_height: f32) -> Self {
        Self {
            area,
            world_width,
            world_height,
        }
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.area.width as f32 / self.world_width,
            self.area.height as f32 / self.world_height,
        )
    }

    /// Cells covered by `bounds`, clipped to the viewport. `None` when
    /// nothing is visible.
    pub fn to_cells(&self, bounds: Bounds) -> Option<Rect> {
        let (sx, sy) = self.scale();
        let left = (bounds.x * sx).round().max(0.0);
        let top = (bounds.y * sy).round().max(0.0);
        let right = (bounds.right() * sx)
            .round()
            .min(self.area.width as f32);
        let bottom = (bounds.bottom() * sy)
            .round()
            .min(self.area.height as f32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    /// World point at the center of a terminal cell. `None` outside the viewport.
    pub fn to_world(&self, column: u16, row: u16) -> Option<Vec2> {
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.right()
            || row >= self.area.bottom()
        {
            return None;
        }
        let (sx, sy) = self.scale();
        Some(Vec2::new(
            ((column - self.area.x) as f32 + 0.5) / sx,
            ((row - self.area.y) as f32 + 0.5) / sy,
        ))
    }
}
