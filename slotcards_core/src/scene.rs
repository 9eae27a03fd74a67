//! The engine side of the table: sprites, render order and tweens.
//!
//! [`Stage`] is what the interaction controller is allowed to touch.
//! [`Scene`] is the in-process implementation used by the terminal
//! front-end and the tests.

use std::time::Duration;

use crate::card::{Artwork, CardId, SlotId, Tint};
use crate::geom::{Bounds, Vec2};
use crate::tween::{Property, TweenSpec, Tweens};

/// Placement and size of a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub scale: f32,
    /// Texture size in pixels, before scaling
    pub texture: (f32, f32),
}

impl Sprite {
    pub fn new(position: Vec2, scale: f32, texture: (f32, f32)) -> Self {
        Self {
            position,
            scale,
            texture,
        }
    }

    /// On-screen bounds, centered on the sprite position
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(
            self.position,
            self.texture.0 * self.scale,
            self.texture.1 * self.scale,
        )
    }

    fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.position.x,
            Property::Y => self.position.y,
            Property::Scale => self.scale,
        }
    }

    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.position.x = value,
            Property::Y => self.position.y = value,
            Property::Scale => self.scale = value,
        }
    }
}

/// Engine operations available to the interaction controller
pub trait Stage {
    fn card(&self, card: CardId) -> Option<Sprite>;
    fn slot(&self, slot: SlotId) -> Option<Sprite>;

    /// Topmost card whose bounds contain `point`
    fn card_at(&self, point: Vec2) -> Option<CardId>;

    fn set_position(&mut self, card: CardId, position: Vec2);
    fn set_highlight(&mut self, card: CardId, on: bool);
    fn set_slot_tint(&mut self, slot: SlotId, tint: Option<Tint>);
    fn bring_to_top(&mut self, card: CardId);

    fn tween(&mut self, card: CardId, spec: TweenSpec);
    fn is_tweening(&self, card: CardId) -> bool;
}

#[derive(Debug, Clone)]
pub struct CardSprite {
    pub id: CardId,
    pub artwork: Artwork,
    pub sprite: Sprite,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct SlotSprite {
    pub id: SlotId,
    pub sprite: Sprite,
    pub tint: Option<Tint>,
}

#[derive(Debug, Default)]
pub struct Scene {
    cards: Vec<CardSprite>,
    slots: Vec<SlotSprite>,
    /// Render order, bottom first
    display: Vec<CardId>,
    tweens: Tweens,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card sprite on top of everything else
    pub fn add_card(&mut self, artwork: Artwork, sprite: Sprite) -> CardId {
        let id = CardId(self.cards.len() as u32);
        self.cards.push(CardSprite {
            id,
            artwork,
            sprite,
            highlighted: false,
        });
        self.display.push(id);
        id
    }

    pub fn add_slot(&mut self, sprite: Sprite) -> SlotId {
        let id = SlotId(self.slots.len());
        self.slots.push(SlotSprite {
            id,
            sprite,
            tint: None,
        });
        id
    }

    pub fn card_sprite(&self, card: CardId) -> Option<&CardSprite> {
        self.cards.get(card.0 as usize)
    }

    fn card_sprite_mut(&mut self, card: CardId) -> Option<&mut CardSprite> {
        self.cards.get_mut(card.0 as usize)
    }

    pub fn slot_sprites(&self) -> &[SlotSprite] {
        &self.slots
    }

    /// Cards bottom to top
    pub fn cards_in_render_order(&self) -> impl Iterator<Item = &CardSprite> {
        self.display.iter().filter_map(|id| self.card_sprite(*id))
    }

    /// Step all tweens. Returns cards whose tweens finished this step.
    pub fn advance(&mut self, dt: Duration) -> Vec<CardId> {
        let cards = &mut self.cards;
        self.tweens.advance(dt, |id, property, value| {
            if let Some(card) = cards.get_mut(id.0 as usize) {
                card.sprite.set(property, value);
            }
        })
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }
}

impl Stage for Scene {
    fn card(&self, card: CardId) -> Option<Sprite> {
        self.card_sprite(card).map(|c| c.sprite)
    }

    fn slot(&self, slot: SlotId) -> Option<Sprite> {
        self.slots.get(slot.0).map(|s| s.sprite)
    }

    fn card_at(&self, point: Vec2) -> Option<CardId> {
        self.display.iter().rev().copied().find(|id| {
            self.card_sprite(*id)
                .is_some_and(|c| c.sprite.bounds().contains(point))
        })
    }

    fn set_position(&mut self, card: CardId, position: Vec2) {
        if let Some(c) = self.card_sprite_mut(card) {
            c.sprite.position = position;
        }
    }

    fn set_highlight(&mut self, card: CardId, on: bool) {
        if let Some(c) = self.card_sprite_mut(card) {
            c.highlighted = on;
        }
    }

    fn set_slot_tint(&mut self, slot: SlotId, tint: Option<Tint>) {
        if let Some(s) = self.slots.get_mut(slot.0) {
            s.tint = tint;
        }
    }

    fn bring_to_top(&mut self, card: CardId) {
        if let Some(pos) = self.display.iter().position(|id| *id == card) {
            let id = self.display.remove(pos);
            self.display.push(id);
        }
    }

    fn tween(&mut self, card: CardId, spec: TweenSpec) {
        let Some(sprite) = self.card(card) else {
            return;
        };
        self.tweens.add(card, spec, |p| sprite.get(p));
    }

    fn is_tweening(&self, card: CardId) -> bool {
        self.tweens.is_tweening(card)
    }
}
