//! Hover, drag and placement scenarios driven through the pointer
//! dispatcher, the way the terminal front-end drives them.

use std::time::Duration;

use slotcards_core::{
    CardId, DragStart, Dragging, DropOutcome, HoverOutcome, Layout, Response, SceneConfig, SlotId,
    Stage, Table, Vec2,
};

fn settle(table: &mut Table) {
    for _ in 0..20 {
        if !table.scene.is_animating() {
            return;
        }
        table.advance(Duration::from_millis(100));
    }
    panic!("animations did not settle");
}

fn dealt(count: usize) -> Table {
    let mut table = Table::deal(SceneConfig::default().with_deal_count(count));
    settle(&mut table);
    table
}

fn position(table: &Table, card: CardId) -> Vec2 {
    table.scene.card(card).expect("card sprite").position
}

fn scale(table: &Table, card: CardId) -> f32 {
    table.scene.card(card).expect("card sprite").scale
}

fn slot_card(table: &Table, slot: usize) -> Option<CardId> {
    table.controller.slots()[slot].card
}

/// Every card is in exactly one of the hand or a slot.
fn assert_single_membership(table: &Table) {
    let placed: Vec<CardId> = table
        .controller
        .slots()
        .iter()
        .filter_map(|s| s.card)
        .collect();
    for card in table.scene.cards_in_render_order().map(|c| c.id) {
        let in_hand = table.controller.hand().contains(&card) as usize;
        let in_slots = placed.iter().filter(|c| **c == card).count();
        assert_eq!(in_hand + in_slots, 1, "{} membership", card);
    }
}

/// Drag the card under `from` to `to` and release there.
fn drag_and_drop(table: &mut Table, from: Vec2, to: Vec2) -> Vec<Response> {
    let mut responses = table.pointer_down(from);
    responses.extend(table.pointer_moved(to));
    responses.extend(table.pointer_up(to));
    responses
}

fn drop_of(responses: &[Response]) -> Option<DropOutcome> {
    responses.iter().find_map(|r| match r {
        Response::Drop(d) => Some(*d),
        _ => None,
    })
}

// =============================================================================
// Deal and layout
// =============================================================================

/// Three dealt cards end up centered and evenly spaced at rest scale.
#[test]
fn test_deal_lays_out_hand() {
    let table = dealt(3);
    let hand = table.controller.hand().to_vec();
    assert_eq!(hand.len(), 3);

    let xs: Vec<f32> = hand.iter().map(|c| position(&table, *c).x).collect();
    assert_eq!(xs, vec![192.0, 1000.0, 1808.0]);
    for card in &hand {
        assert_eq!(position(&table, *card).y, 1400.0);
        assert_eq!(scale(&table, *card), 0.5);
    }
    assert!(table.controller.slots().iter().all(|s| s.card.is_none()));
    assert_single_membership(&table);
}

/// Layout is dropped while the hand is still animating.
#[test]
fn test_layout_skipped_while_animating() {
    let mut table = Table::deal(SceneConfig::default());
    assert!(table.scene.is_animating());
    assert_eq!(
        table.controller.rearrange_hand(&mut table.scene),
        Layout::Skipped
    );
}

/// Re-running layout on a settled hand converges to the same positions.
#[test]
fn test_layout_is_idempotent() {
    let mut table = dealt(3);
    let before: Vec<Vec2> = table
        .controller
        .hand()
        .iter()
        .map(|c| position(&table, *c))
        .collect();

    for _ in 0..3 {
        assert_eq!(
            table.controller.rearrange_hand(&mut table.scene),
            Layout::Applied
        );
        settle(&mut table);
    }

    let after: Vec<Vec2> = table
        .controller
        .hand()
        .iter()
        .map(|c| position(&table, *c))
        .collect();
    assert_eq!(before, after);
}

// =============================================================================
// Hover
// =============================================================================

/// Hovering lifts and highlights a card; leaving puts it back.
#[test]
fn test_hover_then_exit_restores_card() {
    let mut table = dealt(3);
    let card = table.controller.hand()[1];

    let responses = table.pointer_moved(Vec2::new(1000.0, 1400.0));
    assert_eq!(
        responses,
        vec![Response::Hover(HoverOutcome::Lifted { card, index: 1 })]
    );
    settle(&mut table);
    assert_eq!(position(&table, card).y, 1370.0);
    assert!(table.scene.card_sprite(card).unwrap().highlighted);

    let responses = table.pointer_moved(Vec2::new(1000.0, 900.0));
    assert_eq!(
        responses,
        vec![Response::Hover(HoverOutcome::Restored { card })]
    );
    settle(&mut table);
    assert_eq!(position(&table, card), Vec2::new(1000.0, 1400.0));
    assert!(!table.scene.card_sprite(card).unwrap().highlighted);
    assert!(table.controller.hovering().is_none());
    assert_eq!(table.controller.hand().len(), 3);
    assert_single_membership(&table);
}

/// Re-entering a card while it is still settling back does not change
/// where it rests.
#[test]
fn test_hover_reentry_mid_restore_rests_at_hand_y() {
    let mut table = dealt(3);
    let card = table.controller.hand()[1];

    table.pointer_moved(Vec2::new(1000.0, 1400.0));
    settle(&mut table);
    table.pointer_moved(Vec2::new(1000.0, 900.0));
    table.advance(Duration::from_millis(100));
    let midway = position(&table, card).y;
    assert!(midway > 1370.0 && midway < 1400.0);

    let responses = table.pointer_moved(Vec2::new(1000.0, 1400.0));
    assert_eq!(
        responses,
        vec![Response::Hover(HoverOutcome::Lifted { card, index: 1 })]
    );
    settle(&mut table);
    assert_eq!(position(&table, card).y, 1370.0);

    table.pointer_moved(Vec2::new(1000.0, 900.0));
    settle(&mut table);
    assert_eq!(position(&table, card), Vec2::new(1000.0, 1400.0));
}

/// Pointer-out for a card that is not hovered changes nothing.
#[test]
fn test_pointer_out_for_other_card_is_ignored() {
    let mut table = dealt(3);
    let hand = table.controller.hand().to_vec();
    table.controller.pointer_over(&mut table.scene, &[hand[0]]);

    let outcome = table.controller.pointer_out(&mut table.scene, &[hand[2]]);
    assert_eq!(outcome, HoverOutcome::Ignored);
    assert_eq!(table.controller.hovering().map(|h| h.card()), Some(hand[0]));
}

/// A second pointer-over replaces the first hover record.
#[test]
fn test_hover_last_write_wins() {
    let mut table = dealt(3);
    let hand = table.controller.hand().to_vec();
    table.controller.pointer_over(&mut table.scene, &[hand[0]]);
    table.controller.pointer_over(&mut table.scene, &[hand[2]]);
    assert_eq!(table.controller.hovering().map(|h| h.card()), Some(hand[2]));
}

// =============================================================================
// Drag and placement
// =============================================================================

/// Dropping the middle card on slot 2 places it and re-lays-out the rest.
#[test]
fn test_place_middle_card_into_slot() {
    let mut table = dealt(3);
    let hand = table.controller.hand().to_vec();

    let responses = drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 1400.0),
        Vec2::new(1000.0, 250.0),
    );
    assert!(responses.contains(&Response::DragStart(DragStart::Started {
        card: hand[1],
        index: 1
    })));
    assert_eq!(
        drop_of(&responses),
        Some(DropOutcome::Placed {
            card: hand[1],
            slot: SlotId(2)
        })
    );

    assert_eq!(slot_card(&table, 2), Some(hand[1]));
    assert_eq!(table.controller.hand(), &[hand[0], hand[2]]);
    assert!(table.controller.dragging().is_none());
    assert!(table.controller.hovering().is_none());
    assert!(!table.scene.card_sprite(hand[1]).unwrap().highlighted);

    settle(&mut table);
    assert_eq!(position(&table, hand[1]), Vec2::new(1000.0, 250.0));
    assert!((scale(&table, hand[1]) - 0.4).abs() < 1e-6);
    assert_eq!(position(&table, hand[0]).x, 596.0);
    assert_eq!(position(&table, hand[2]).x, 1404.0);
    assert!(table.scene.slot_sprites().iter().all(|s| s.tint.is_none()));
    assert_single_membership(&table);
}

/// A drop that reaches no slot sends the card back where it rested.
#[test]
fn test_rejected_drop_returns_card() {
    let mut table = dealt(1);
    let card = table.controller.hand()[0];
    assert_eq!(position(&table, card), Vec2::new(1000.0, 1400.0));

    let responses = drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 1400.0),
        Vec2::new(1000.0, 900.0),
    );
    assert_eq!(drop_of(&responses), Some(DropOutcome::Returned { card }));

    settle(&mut table);
    assert_eq!(position(&table, card), Vec2::new(1000.0, 1400.0));
    assert_eq!(scale(&table, card), 0.5);
    assert_eq!(table.controller.hand(), &[card]);
    assert_single_membership(&table);
}

/// Releasing over a filled slot never replaces its card.
#[test]
fn test_occupied_slot_rejects_drop() {
    let mut table = dealt(3);
    let hand = table.controller.hand().to_vec();
    drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 1400.0),
        Vec2::new(1000.0, 250.0),
    );
    settle(&mut table);

    let left = position(&table, hand[0]);
    table.pointer_down(left);
    table.pointer_moved(Vec2::new(1000.0, 250.0));
    // Tinting does not care about occupancy
    assert!(table.scene.slot_sprites()[2].tint.is_some());
    let responses = table.pointer_up(Vec2::new(1000.0, 250.0));

    assert_eq!(drop_of(&responses), Some(DropOutcome::Returned { card: hand[0] }));
    assert_eq!(slot_card(&table, 2), Some(hand[1]));
    assert_eq!(table.controller.hand(), &[hand[0], hand[2]]);

    settle(&mut table);
    assert_eq!(position(&table, hand[0]), left);
    assert_single_membership(&table);
}

/// Placed cards are not draggable; the attempt is ignored.
#[test]
fn test_drag_from_slot_is_ignored() {
    let mut table = dealt(3);
    let hand = table.controller.hand().to_vec();
    drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 1400.0),
        Vec2::new(1000.0, 250.0),
    );
    settle(&mut table);

    assert_eq!(
        table.controller.drag_start(&mut table.scene, hand[1]),
        DragStart::NotInHand
    );

    let responses = drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 250.0),
        Vec2::new(600.0, 250.0),
    );
    assert!(responses.contains(&Response::DragStart(DragStart::NotInHand)));
    assert_eq!(drop_of(&responses), Some(DropOutcome::NoDrag));
    settle(&mut table);
    assert_eq!(position(&table, hand[1]), Vec2::new(1000.0, 250.0));
    assert_eq!(slot_card(&table, 2), Some(hand[1]));
    assert_single_membership(&table);
}

/// Dragging a lifted card remembers where it rested before the lift.
#[test]
fn test_drag_start_uses_pre_hover_position() {
    let mut table = dealt(3);
    let card = table.controller.hand()[0];
    table.pointer_moved(Vec2::new(192.0, 1400.0));
    settle(&mut table);
    assert_eq!(position(&table, card).y, 1370.0);

    table.pointer_down(Vec2::new(192.0, 1400.0));
    match table.controller.dragging() {
        Some(Dragging::Hand { original, .. }) => {
            assert_eq!(*original, Vec2::new(192.0, 1400.0))
        }
        other => panic!("unexpected drag state {:?}", other),
    }

    // The card is enlarged while held
    settle(&mut table);
    assert!((scale(&table, card) - 0.6).abs() < 1e-6);
}

/// The held card does not get re-lifted by hover.
#[test]
fn test_drag_takes_precedence_over_hover() {
    let mut table = dealt(3);
    let card = table.controller.hand()[1];
    table.controller.drag_start(&mut table.scene, card);
    assert_eq!(
        table.controller.pointer_over(&mut table.scene, &[card]),
        HoverOutcome::Ignored
    );
}

/// Exactly 200 units of overlap is enough; a hair less is not.
#[test]
fn test_overlap_threshold_is_inclusive() {
    let mut table = dealt(3);
    let card = table.controller.hand()[0];

    table.controller.drag_start(&mut table.scene, card);
    table
        .controller
        .drag(&mut table.scene, card, Vec2::new(352.001, 250.0));
    assert!(table.scene.slot_sprites()[0].tint.is_none());
    let drop = table
        .controller
        .drag_end(&mut table.scene, card, Vec2::new(352.001, 250.0));
    assert_eq!(drop, DropOutcome::Returned { card });
    settle(&mut table);

    table.controller.drag_start(&mut table.scene, card);
    table
        .controller
        .drag(&mut table.scene, card, Vec2::new(352.0, 250.0));
    assert!(table.scene.slot_sprites()[0].tint.is_some());
    let drop = table
        .controller
        .drag_end(&mut table.scene, card, Vec2::new(352.0, 250.0));
    assert_eq!(
        drop,
        DropOutcome::Placed {
            card,
            slot: SlotId(0)
        }
    );
}

/// Landing reports the slot once the placement animation finishes.
#[test]
fn test_advance_reports_landing() {
    let mut table = dealt(3);
    drag_and_drop(
        &mut table,
        Vec2::new(1000.0, 1400.0),
        Vec2::new(1000.0, 250.0),
    );
    let mut landed = Vec::new();
    for _ in 0..10 {
        landed.extend(table.advance(Duration::from_millis(50)));
    }
    assert_eq!(landed, vec![SlotId(2)]);
}
