//! Turns raw pointer down/move/up into card-level events.
//!
//! Hover is tracked against the topmost card under the pointer. While a
//! card is held, hover tracking pauses: the held card sits under the
//! pointer for the whole gesture.

use crate::card::CardId;
use crate::geom::Vec2;
use crate::scene::Stage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Over(CardId),
    Out(CardId),
    DragStart(CardId),
    /// `position` is where the card should be: pointer minus grab offset
    Drag { card: CardId, position: Vec2 },
    DragEnd { card: CardId, pointer: Vec2 },
}

#[derive(Debug, Clone, Copy)]
struct Held {
    card: CardId,
    grab_offset: Vec2,
}

#[derive(Debug, Default)]
pub struct PointerDispatcher {
    over: Option<CardId>,
    held: Option<Held>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    fn sync_over(&mut self, stage: &impl Stage, point: Vec2, events: &mut Vec<PointerEvent>) {
        let now = stage.card_at(point);
        if now == self.over {
            return;
        }
        if let Some(prev) = self.over {
            events.push(PointerEvent::Out(prev));
        }
        if let Some(card) = now {
            events.push(PointerEvent::Over(card));
        }
        self.over = now;
    }

    /// Button pressed at `point`. Grabs the topmost card there, if any.
    pub fn down(&mut self, stage: &impl Stage, point: Vec2) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        if self.held.is_some() {
            return events;
        }
        self.sync_over(stage, point, &mut events);

        if let Some(card) = self.over {
            if let Some(sprite) = stage.card(card) {
                self.held = Some(Held {
                    card,
                    grab_offset: point - sprite.position,
                });
                events.push(PointerEvent::DragStart(card));
            }
        }
        events
    }

    /// Pointer moved to `point`, with or without the button held
    pub fn moved(&mut self, stage: &impl Stage, point: Vec2) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        match self.held {
            Some(held) => events.push(PointerEvent::Drag {
                card: held.card,
                position: point - held.grab_offset,
            }),
            None => self.sync_over(stage, point, &mut events),
        }
        events
    }

    /// Button released at `point`
    pub fn up(&mut self, point: Vec2) -> Vec<PointerEvent> {
        match self.held.take() {
            Some(held) => vec![PointerEvent::DragEnd {
                card: held.card,
                pointer: point,
            }],
            None => Vec::new(),
        }
    }
}
