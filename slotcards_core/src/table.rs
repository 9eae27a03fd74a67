use std::time::Duration;

use tracing::info;

use crate::card::{Artwork, CardId, SlotId};
use crate::config::{SceneConfig, SLOT_COUNT};
use crate::controller::{CardController, DropOutcome, Response};
use crate::geom::Vec2;
use crate::input::{PointerDispatcher, PointerEvent};
use crate::scene::{Scene, Sprite, Stage};

/// Starting x of each dealt card, before the first layout pass
const DEAL_X: [f32; 3] = [2000.0, 1600.0, 1200.0];

/// A dealt table: the scene, its controller and the pointer plumbing
pub struct Table {
    pub scene: Scene,
    pub controller: CardController,
    input: PointerDispatcher,
    /// Placed cards whose landing tween has not finished yet
    landing: Vec<(CardId, SlotId)>,
}

impl Table {
    /// Create the slots, deal the hand and lay it out
    pub fn deal(config: SceneConfig) -> Self {
        let mut scene = Scene::new();

        let slots: Vec<SlotId> = (0..SLOT_COUNT)
            .map(|i| {
                scene.add_slot(Sprite::new(
                    config.slot_position(i),
                    config.slot_scale,
                    config.slot_texture,
                ))
            })
            .collect();

        let hand: Vec<CardId> = Artwork::ALL
            .iter()
            .zip(DEAL_X)
            .take(config.deal_count)
            .map(|(&artwork, x)| {
                scene.add_card(
                    artwork,
                    Sprite::new(
                        Vec2::new(x, config.hand_y),
                        config.hand_scale,
                        config.card_texture,
                    ),
                )
            })
            .collect();
        info!(cards = hand.len(), slots = slots.len(), "table dealt");

        let mut controller = CardController::new(config, hand, slots);
        controller.rearrange_hand(&mut scene);

        Self {
            scene,
            controller,
            input: PointerDispatcher::new(),
            landing: Vec::new(),
        }
    }

    pub fn pointer_down(&mut self, point: Vec2) -> Vec<Response> {
        let events = self.input.down(&self.scene, point);
        self.run(events)
    }

    pub fn pointer_moved(&mut self, point: Vec2) -> Vec<Response> {
        let events = self.input.moved(&self.scene, point);
        self.run(events)
    }

    pub fn pointer_up(&mut self, point: Vec2) -> Vec<Response> {
        let events = self.input.up(point);
        self.run(events)
    }

    fn run(&mut self, events: Vec<PointerEvent>) -> Vec<Response> {
        events
            .into_iter()
            .map(|event| {
                let response = self.controller.dispatch(&mut self.scene, event);
                if let Response::Drop(DropOutcome::Placed { card, slot }) = response {
                    self.landing.push((card, slot));
                }
                response
            })
            .collect()
    }

    /// Advance animations. Returns slots whose card finished landing.
    pub fn advance(&mut self, dt: Duration) -> Vec<SlotId> {
        let finished = self.scene.advance(dt);
        let scene = &self.scene;
        let mut landed = Vec::new();
        self.landing.retain(|(card, slot)| {
            let done = finished.contains(card) && !scene.is_tweening(*card);
            if done {
                landed.push(*slot);
            }
            !done
        });
        landed
    }
}
