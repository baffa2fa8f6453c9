//! End-to-end gesture workflows: drag, release, settle, rotate.

use crate::helpers::{move_left, move_right, release, release_left, release_right, CarouselBuilder};
use swipedeck::{CardId, Direction, DragPhase, Slot, SlotBindings};

fn abc() -> SlotBindings {
    SlotBindings {
        before: CardId(1),
        active: CardId(2),
        after: CardId(3),
    }
}

#[test]
fn test_committed_left_drag_rotates_roles() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();
    assert_eq!(carousel.slots(), Some(abc()));

    carousel.handle_drag_move(&move_left(60.0));
    carousel.handle_drag_end(&release_left(60.0));
    carousel.handle_transition_finished();

    // {before=A, active=B, after=C} -> {before=B, active=C, after=A}
    assert_eq!(
        carousel.slots(),
        Some(SlotBindings {
            before: CardId(2),
            active: CardId(3),
            after: CardId(1),
        })
    );
    assert_eq!(carousel.phase(), DragPhase::Idle);
    assert!(carousel.is_listening());

    // New roles were pushed to the renderer.
    assert_eq!(carousel.host().last_role(CardId(3)), Some(Slot::Active));
    assert_eq!(carousel.host().last_role(CardId(2)), Some(Slot::Before));
    assert_eq!(carousel.host().last_role(CardId(1)), Some(Slot::After));
}

#[test]
fn test_committed_right_drag_rotates_roles_mirrored() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();

    carousel.handle_drag_move(&move_right(90.0));
    carousel.handle_drag_end(&release_right(90.0));
    carousel.handle_transition_finished();

    // {before=A, active=B, after=C} -> {before=C, active=A, after=B}
    assert_eq!(
        carousel.slots(),
        Some(SlotBindings {
            before: CardId(3),
            active: CardId(1),
            after: CardId(2),
        })
    );
}

#[test]
fn test_reset_drag_leaves_bindings_untouched() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();

    carousel.handle_drag_move(&move_left(20.0));
    carousel.handle_drag_end(&release_left(20.0));
    carousel.handle_transition_finished();

    assert_eq!(carousel.slots(), Some(abc()));
    assert_eq!(carousel.phase(), DragPhase::Idle);
    // No role announcements on a reset.
    assert_eq!(carousel.host().last_role(CardId(2)), None);
}

#[test]
fn test_non_horizontal_release_is_a_noop_transition() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();

    let decision = carousel.handle_drag_end(&release(200.0, Direction::Other, 4.0));
    assert_eq!(decision.map(|d| d.completed), Some(false));
    assert!(carousel.phase().is_settling());

    carousel.handle_transition_finished();
    assert_eq!(carousel.slots(), Some(abc()));
    assert_eq!(carousel.phase(), DragPhase::Idle);
    assert!(carousel.is_listening());
}

#[test]
fn test_roles_stay_a_permutation_across_many_gestures() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();

    let gestures = [
        release_left(60.0),   // commit
        release_right(10.0),  // reset
        release_right(250.0), // commit
        release_left(50.0),   // commit, exactly at threshold
        release(80.0, Direction::Other, 0.0),
        release_left(49.0), // reset, one short of threshold
        release_right(60.0),
    ];

    for gesture in gestures {
        carousel.handle_drag_end(&gesture);
        carousel.handle_transition_finished();

        let slots = carousel.slots().unwrap();
        let mut cards = slots.cards();
        cards.sort();
        assert_eq!(cards, [CardId(1), CardId(2), CardId(3)]);
        assert_eq!(slots.role_of(slots.active), Some(Slot::Active));
        assert_eq!(carousel.phase(), DragPhase::Idle);
    }
}

#[test]
fn test_two_opposite_commits_return_to_start() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();

    carousel.handle_drag_end(&release_left(100.0));
    carousel.handle_transition_finished();
    carousel.handle_drag_end(&release_right(100.0));
    carousel.handle_transition_finished();

    assert_eq!(carousel.slots(), Some(abc()));
}

#[test]
fn test_settle_clears_all_three_cards() {
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();
    carousel.handle_drag_move(&move_left(60.0));
    carousel.handle_drag_end(&release_left(60.0));

    carousel.host_mut().clear_log();
    carousel.handle_transition_finished();

    let script = carousel.host().script();
    for card in 1..=3 {
        assert!(
            script.contains(&format!("clear card#{card}")),
            "card#{card} not cleared:\n{script}"
        );
    }
}
