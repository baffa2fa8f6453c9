//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down two surfaces that are easy to regress quietly:
//! the exact instruction stream a canonical gesture produces, and the serde
//! shape of the public config/event types.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{move_left, release, CarouselBuilder};
use swipedeck::{CarouselConfig, Direction, DragEvent};

#[test]
fn snapshot_committed_left_gesture_instruction_stream() {
    // The worked example: viewport 300px, drag left 60px, release with
    // vertical velocity 1. 60 >= 300/6, so the gesture commits; velocity
    // below the boundary picks the fast 200ms settle.
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();
    carousel.handle_drag_move(&move_left(60.0));
    carousel.handle_drag_end(&release(60.0, Direction::Left, 1.0));
    carousel.handle_transition_finished();

    insta::assert_snapshot!(carousel.host().script(), @r"
    transform card#3 x=240
    opacity card#3 value=0.3
    flag card#2 animating=on
    duration card#1 ms=200
    duration card#2 ms=200
    duration card#3 ms=200
    body dragleft-complete=on
    flag card#2 drag-complete=on
    input blocked=on
    flag card#2 animating=off
    flag card#2 drag-complete=off
    body dragleft-reset=off
    body dragleft-complete=off
    body dragright-reset=off
    body dragright-complete=off
    clear card#1
    clear card#2
    clear card#3
    role card#2=before
    role card#3=active
    role card#1=after
    input blocked=off
    ");
}

#[test]
fn snapshot_reset_gesture_instruction_stream() {
    // 30 < 300/6: the drag snaps back and no roles are announced.
    let mut carousel = CarouselBuilder::new().with_viewport(300.0).build();
    carousel.handle_drag_end(&release(30.0, Direction::Right, 0.0));
    carousel.handle_transition_finished();

    insta::assert_snapshot!(carousel.host().script(), @r"
    flag card#2 animating=on
    duration card#1 ms=200
    duration card#2 ms=200
    duration card#3 ms=200
    body dragright-reset=on
    input blocked=on
    flag card#2 animating=off
    flag card#2 drag-complete=off
    body dragleft-reset=off
    body dragleft-complete=off
    body dragright-reset=off
    body dragright-complete=off
    clear card#1
    clear card#2
    clear card#3
    input blocked=off
    ");
}

#[test]
fn snapshot_default_config() {
    insta::assert_json_snapshot!(CarouselConfig::default(), @r#"
    {
      "drag_window_fraction": 6.0,
      "animation_speed_fast_ms": 200,
      "animation_speed_slow_ms": 100,
      "drag_velocity_boundary": 2.0,
      "min_drag_opacity_percent": 30.0
    }
    "#);
}

#[test]
fn snapshot_drag_event() {
    let event = DragEvent::new(60.0, Direction::Left, 1.0);
    insta::assert_json_snapshot!(event, @r#"
    {
      "distance": 60.0,
      "direction": "left",
      "velocity_y": 1.0
    }
    "#);
}
