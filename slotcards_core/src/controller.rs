//! Hand layout, hover, drag and placement handling.
//!
//! Every handler runs to completion inside a single pointer event. Visual
//! changes go through the injected [`Stage`]; the controller itself only
//! owns hand membership, slot occupancy and the transient drag and hover
//! records.

use tracing::{debug, warn};

use crate::card::{CardId, Slot, SlotId};
use crate::config::SceneConfig;
use crate::geom::Vec2;
use crate::input::PointerEvent;
use crate::layout::hand_targets;
use crate::placement::{resolve_drop, targeted_slots};
use crate::scene::Stage;
use crate::state::{Dragging, Hovering};
use crate::tween::{TweenSpec, TweenTo};

/// Result of a hover event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    /// A hand card was lifted
    Lifted { card: CardId, index: usize },
    /// The hovered card was put back down
    Restored { card: CardId },
    Ignored,
}

/// Result of a drag-start event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    Started { card: CardId, index: usize },
    /// The card is not in the hand; no drag begins
    NotInHand,
}

/// Result of a drag-end event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed { card: CardId, slot: SlotId },
    Returned { card: CardId },
    /// No drag of that card was in progress
    NoDrag,
}

/// Result of a hand layout request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Applied,
    /// A hand card was still animating; the request was dropped
    Skipped,
}

/// What a dispatched pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Hover(HoverOutcome),
    DragStart(DragStart),
    Dragged,
    Drop(DropOutcome),
}

pub struct CardController {
    config: SceneConfig,
    hand: Vec<CardId>,
    slots: Vec<Slot>,
    dragging: Option<Dragging>,
    hovering: Option<Hovering>,
}

impl CardController {
    pub fn new(config: SceneConfig, hand: Vec<CardId>, slots: Vec<SlotId>) -> Self {
        Self {
            config,
            hand,
            slots: slots.into_iter().map(Slot::new).collect(),
            dragging: None,
            hovering: None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn dragging(&self) -> Option<&Dragging> {
        self.dragging.as_ref()
    }

    pub fn hovering(&self) -> Option<&Hovering> {
        self.hovering.as_ref()
    }

    /// Slot holding `card`, if it has been placed
    pub fn slot_of(&self, card: CardId) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|s| s.card == Some(card))
            .map(|s| s.id)
    }

    fn hand_index(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| *c == card)
    }

    fn spec(&self, to: TweenTo, duration: std::time::Duration) -> TweenSpec {
        TweenSpec::new(to, duration, self.config.easing)
    }

    /// Route a pointer event to its handler
    pub fn dispatch(&mut self, stage: &mut impl Stage, event: PointerEvent) -> Response {
        match event {
            PointerEvent::Over(card) => Response::Hover(self.pointer_over(stage, &[card])),
            PointerEvent::Out(card) => Response::Hover(self.pointer_out(stage, &[card])),
            PointerEvent::DragStart(card) => Response::DragStart(self.drag_start(stage, card)),
            PointerEvent::Drag { card, position } => {
                self.drag(stage, card, position);
                Response::Dragged
            }
            PointerEvent::DragEnd { card, pointer } => {
                Response::Drop(self.drag_end(stage, card, pointer))
            }
        }
    }

    // ─── Hand layout ─────────────────────────────────────────────────

    /// Spread the hand evenly around the screen center. Dropped if any hand
    /// card is still animating.
    pub fn rearrange_hand(&mut self, stage: &mut impl Stage) -> Layout {
        if self.hand.iter().any(|c| stage.is_tweening(*c)) {
            debug!(hand = self.hand.len(), "hand still animating, layout skipped");
            return Layout::Skipped;
        }

        let cards: Vec<(CardId, f32)> = self
            .hand
            .iter()
            .filter_map(|&card| {
                let sprite = stage.card(card)?;
                Some((card, sprite.texture.0 / self.config.device_pixel_ratio))
            })
            .collect();
        let widths: Vec<f32> = cards.iter().map(|(_, w)| *w).collect();
        let targets = hand_targets(&widths, self.config.hand_padding, self.config.screen_width);
        for (&(card, _), x) in cards.iter().zip(targets) {
            let spec = self.spec(
                TweenTo::default().x(x).scale(self.config.hand_scale),
                self.config.layout_duration,
            );
            stage.tween(card, spec);
        }
        Layout::Applied
    }

    // ─── Hover ───────────────────────────────────────────────────────

    /// Pointer entered `cards`. The last hand card among them is lifted.
    pub fn pointer_over(&mut self, stage: &mut impl Stage, cards: &[CardId]) -> HoverOutcome {
        let dragged = self.dragging.map(|d| d.card());
        let Some((index, card)) = cards
            .iter()
            .filter(|c| Some(**c) != dragged)
            .filter_map(|c| self.hand_index(*c).map(|i| (i, *c)))
            .last()
        else {
            return HoverOutcome::Ignored;
        };
        let Some(sprite) = stage.card(card) else {
            return HoverOutcome::Ignored;
        };

        // Hand cards rest at hand_y, even when re-entered mid-restore
        let rest = Vec2::new(sprite.position.x, self.config.hand_y);
        self.hovering = Some(Hovering::Hand {
            index,
            card,
            original: rest,
        });
        stage.set_highlight(card, true);
        let spec = self.spec(
            TweenTo::default().y(rest.y - self.config.hover_lift),
            self.config.hover_duration,
        );
        stage.tween(card, spec);
        HoverOutcome::Lifted { card, index }
    }

    /// Pointer left `cards`. Puts the hovered hand card back if it is among them.
    pub fn pointer_out(&mut self, stage: &mut impl Stage, cards: &[CardId]) -> HoverOutcome {
        match self.hovering {
            Some(hover @ Hovering::Hand { card, .. }) if cards.contains(&card) => {
                self.unhover(stage, hover);
                HoverOutcome::Restored { card }
            }
            _ => HoverOutcome::Ignored,
        }
    }

    fn unhover(&mut self, stage: &mut impl Stage, hover: Hovering) {
        stage.set_highlight(hover.card(), false);
        if let Hovering::Hand { card, original, .. } = hover {
            let spec = self.spec(TweenTo::default().y(original.y), self.config.hover_duration);
            stage.tween(card, spec);
        }
        self.hovering = None;
    }

    // ─── Drag ────────────────────────────────────────────────────────

    pub fn drag_start(&mut self, stage: &mut impl Stage, card: CardId) -> DragStart {
        let (Some(index), Some(sprite)) = (self.hand_index(card), stage.card(card)) else {
            warn!(%card, "drag started on a card that is not in the hand");
            return DragStart::NotInHand;
        };

        // A hovered card is lifted; return it to where it rested before the lift
        let original_y = match self.hovering {
            Some(Hovering::Hand {
                card: hovered,
                original,
                ..
            }) if hovered == card => original.y,
            _ => sprite.position.y,
        };
        self.dragging = Some(Dragging::Hand {
            index,
            card,
            original: Vec2::new(sprite.position.x, original_y),
        });

        stage.bring_to_top(card);
        let spec = self.spec(
            TweenTo::default().scale(self.config.drag_scale()),
            self.config.drag_scale_duration,
        );
        stage.tween(card, spec);
        debug!(%card, index, "drag started");
        DragStart::Started { card, index }
    }

    /// The held card follows the pointer; slots it targets are tinted.
    pub fn drag(&mut self, stage: &mut impl Stage, card: CardId, position: Vec2) {
        let Some(Dragging::Hand { card: held, .. }) = self.dragging else {
            return;
        };
        if held != card {
            return;
        }

        stage.set_position(held, position);
        let Some(bounds) = stage.card(held).map(|s| s.bounds()) else {
            return;
        };
        let slots: Vec<_> = self
            .slots
            .iter()
            .filter_map(|s| stage.slot(s.id).map(|sprite| (s.id, sprite.bounds())))
            .collect();
        for (slot, hit) in targeted_slots(&bounds, slots, self.config.overlap_threshold) {
            stage.set_slot_tint(slot, hit.then_some(self.config.target_tint));
        }
    }

    /// Release the held card at `pointer`: place it in a free targeted slot
    /// or send it back to its resting spot.
    pub fn drag_end(
        &mut self,
        stage: &mut impl Stage,
        card: CardId,
        pointer: Vec2,
    ) -> DropOutcome {
        let Some(Dragging::Hand {
            index,
            card: held,
            original,
        }) = self.dragging
        else {
            return DropOutcome::NoDrag;
        };
        if held != card {
            return DropOutcome::NoDrag;
        }

        for slot in &self.slots {
            stage.set_slot_tint(slot.id, None);
        }

        let target = stage.card(held).and_then(|sprite| {
            resolve_drop(
                &sprite.bounds(),
                &self.slots,
                |id| stage.slot(id).map(|s| s.bounds()).unwrap_or_default(),
                self.config.overlap_threshold,
            )
        });

        let outcome = match target {
            Some(slot_id) => {
                self.place(stage, held, index, slot_id, pointer);
                DropOutcome::Placed {
                    card: held,
                    slot: slot_id,
                }
            }
            None => {
                let spec = self.spec(
                    TweenTo::default()
                        .position(original.x, original.y)
                        .scale(self.config.hand_scale),
                    self.config.return_duration,
                );
                stage.tween(held, spec);
                debug!(card = %held, "drop rejected, card returns to hand");
                DropOutcome::Returned { card: held }
            }
        };

        self.dragging = None;
        outcome
    }

    fn place(
        &mut self,
        stage: &mut impl Stage,
        card: CardId,
        index: usize,
        slot_id: SlotId,
        pointer: Vec2,
    ) {
        let Some(slot_sprite) = stage.slot(slot_id) else {
            return;
        };
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
            slot.card = Some(card);
        }
        if self.hand.get(index) == Some(&card) {
            self.hand.remove(index);
        } else {
            self.hand.retain(|c| *c != card);
        }

        let spec = self.spec(
            TweenTo::default()
                .position(slot_sprite.position.x, slot_sprite.position.y)
                .scale(self.config.slot_scale),
            self.config.place_duration,
        );
        stage.tween(card, spec);
        debug!(%card, slot = %slot_id, "card placed");

        self.rearrange_hand(stage);

        if let Some(hover) = self.hovering.take() {
            if slot_sprite.bounds().contains(pointer) {
                let hover = Hovering::Slot {
                    slot: slot_id,
                    card: hover.card(),
                };
                self.hovering = Some(hover);
                self.unhover(stage, hover);
            } else {
                stage.set_highlight(hover.card(), false);
            }
        }
    }
}
