use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use tachyonfx::Duration;

use slotcards_core::{DropOutcome, DragStart, Response, SceneConfig, SlotId, Table, Vec2};
use slotcards_widgets::background::TableWidget;
use slotcards_widgets::card::CardWidget;
use slotcards_widgets::hint::HintWidget;
use slotcards_widgets::slot::SlotWidget;
use slotcards_widgets::Viewport;

use crate::effects::{self, FxManager, LANDING_KEYS};

/// Main application state
pub struct App {
    pub config: SceneConfig,
    pub table: Table,
    pub tick: u64,
    pub fx: FxManager,
    /// Where the table was drawn last frame; mouse events map through it
    viewport: Option<Viewport>,
    hint_area: Rect,
    /// The opening hint sweep waits for the first frame to know its area
    hint_pending: bool,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Self {
        let config = SceneConfig::default();
        let mut fx = FxManager::default();
        fx.add_unique_effect("deal", effects::deal_in());

        Self {
            table: Table::deal(config.clone()),
            config,
            tick: 0,
            fx,
            viewport: None,
            hint_area: Rect::default(),
            hint_pending: true,
            last_tick: Instant::now(),
        }
    }

    fn redeal(&mut self) {
        self.table = Table::deal(self.config.clone());
        self.fx.add_unique_effect("deal", effects::deal_in());
        self.fx
            .add_unique_effect("hint", effects::hint_sweep(self.hint_area));
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Help
        ])
        .split(area);

        let viewport = Viewport::new(
            chunks[0],
            self.config.screen_width,
            self.config.screen_height,
        );
        self.viewport = Some(viewport);
        self.hint_area = chunks[1];
        if std::mem::take(&mut self.hint_pending) {
            self.fx
                .add_unique_effect("hint", effects::hint_sweep(self.hint_area));
        }

        frame.render_widget(TableWidget::new(self.tick), chunks[0]);

        // Slots under the cards
        let controller = &self.table.controller;
        for slot in self.table.scene.slot_sprites() {
            let Some(cells) = viewport.to_cells(slot.sprite.bounds()) else {
                continue;
            };
            let occupied = controller
                .slots()
                .iter()
                .any(|s| s.id == slot.id && s.is_occupied());
            let widget = SlotWidget::new().tint(slot.tint).occupied(occupied);
            frame.render_widget(widget, cells);
        }

        for card in self.table.scene.cards_in_render_order() {
            let Some(cells) = viewport.to_cells(card.sprite.bounds()) else {
                continue;
            };
            let glow = card.highlighted.then_some(self.config.glow);
            frame.render_widget(CardWidget::new(card.artwork).glow(glow), cells);
        }

        let placed = controller.slots().iter().filter(|s| s.is_occupied()).count();
        frame.render_widget(
            HintWidget::new(controller.hand().len(), placed, controller.slots().len()),
            chunks[1],
        );

        // Effects draw over the finished frame, one poll interval per frame
        let tick_duration = Duration::from_millis(33);
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Returns true when the key quits the app
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Mid-gesture re-deals would orphan the held card
                if self.table.controller.dragging().is_none() {
                    self.redeal();
                }
            }
            _ => {}
        }
        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(point) = self.world_point(mouse.column, mouse.row) else {
            return;
        };

        let responses = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.table.pointer_moved(point)
            }
            MouseEventKind::Down(MouseButton::Left) => self.table.pointer_down(point),
            MouseEventKind::Up(MouseButton::Left) => self.table.pointer_up(point),
            _ => return,
        };

        for response in responses {
            match response {
                Response::DragStart(DragStart::NotInHand) => {
                    tracing::debug!(?point, "placed cards stay put");
                }
                Response::Drop(DropOutcome::Placed { card, slot }) => {
                    tracing::info!(%card, %slot, "card placed");
                }
                _ => {}
            }
        }
    }

    /// Pointer position in world units. Positions off the table are pinned
    /// to its edge so a release outside still ends the drag.
    fn world_point(&self, column: u16, row: u16) -> Option<Vec2> {
        let viewport = self.viewport?;
        let area = viewport.area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let column = column.clamp(area.left(), area.right() - 1);
        let row = row.clamp(area.top(), area.bottom() - 1);
        viewport.to_world(column, row)
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;

        for slot in self.table.advance(dt) {
            self.flash_slot(slot);
        }
    }

    fn flash_slot(&mut self, slot: SlotId) {
        let (Some(viewport), Some(key)) = (self.viewport, LANDING_KEYS.get(slot.0)) else {
            return;
        };
        let Some(cells) = self
            .table
            .scene
            .slot_sprites()
            .get(slot.0)
            .and_then(|s| viewport.to_cells(s.sprite.bounds()))
        else {
            return;
        };
        self.fx.add_unique_effect(*key, effects::landing_flash(cells));
    }
}
