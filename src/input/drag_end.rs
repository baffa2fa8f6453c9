//! Drag-end handling - decide commit vs reset and kick off the settle
//! animation.

use crate::carousel::Carousel;
use crate::input::DragPhase;
use crate::render::{BodyFlag, RenderHost, SlotFlag};
use crate::types::{CompletionDecision, Direction, DragEvent};
use tracing::debug;

impl<H: RenderHost> Carousel<H> {
    /// Process the release of a drag gesture.
    ///
    /// Emits the settle instructions (animating flag, transition durations,
    /// outcome body flag), blocks input, and enters `Settling` until the
    /// host delivers the transition-finished signal. Returns the completion
    /// decision, or `None` if the event was dropped (un-initialized or
    /// already settling).
    pub fn handle_drag_end(&mut self, event: &DragEvent) -> Option<CompletionDecision> {
        let Some(slots) = self.slots else {
            return None;
        };
        if self.phase.is_settling() {
            return None;
        }

        let viewport = self.host.viewport_width();
        let speed_ms = self.config.animation_speed_ms(event.velocity_y);

        self.host.set_flag(slots.active, SlotFlag::Animating, true);
        for card in slots.cards() {
            self.host.set_transition_duration(card, speed_ms);
        }

        let decision = self.decide(event, viewport);
        match (event.direction, decision.completed) {
            (Direction::Left, true) => {
                self.host.set_body_flag(BodyFlag::DragLeftComplete, true);
                self.host.set_flag(slots.active, SlotFlag::DragComplete, true);
            }
            (Direction::Left, false) => {
                self.host.set_body_flag(BodyFlag::DragLeftReset, true);
            }
            (Direction::Right, true) => {
                self.host.set_body_flag(BodyFlag::DragRightComplete, true);
                self.host.set_flag(slots.active, SlotFlag::DragComplete, true);
            }
            (Direction::Right, false) => {
                self.host.set_body_flag(BodyFlag::DragRightReset, true);
            }
            // Non-horizontal release: no outcome flag, the settle still
            // runs so the cycle always returns to Idle.
            (Direction::Other, _) => {}
        }

        debug!(
            direction = %decision.direction,
            completed = decision.completed,
            distance = event.distance,
            viewport,
            speed_ms,
            "drag end"
        );

        self.host.set_input_blocked(true);
        self.phase = DragPhase::Settling {
            direction: decision.direction,
            complete: decision.completed,
        };
        Some(decision)
    }

    /// Commit iff the drag is horizontal and crossed the commit window.
    fn decide(&self, event: &DragEvent, viewport: f32) -> CompletionDecision {
        let completed = event.direction.is_horizontal()
            && event.distance >= self.config.commit_threshold(viewport);
        CompletionDecision {
            completed,
            direction: event.direction,
        }
    }
}
