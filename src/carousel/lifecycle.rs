//! Carousel lifecycle - initialization and settle completion.
//!
//! Slot relabeling happens here, at exactly one point: when the render layer
//! reports a committed transition visually finished.

use crate::carousel::slots::SlotBindings;
use crate::carousel::Carousel;
use crate::error::CarouselResult;
use crate::input::DragPhase;
use crate::render::{BodyFlag, RenderHost, SlotFlag};
use crate::types::Direction;
use tracing::{debug, warn};

impl<H: RenderHost> Carousel<H> {
    /// Query the host for the current cards and bind them to the three
    /// slots, then start listening for drag input.
    ///
    /// On failure the carousel stays inert - no bindings, every gesture
    /// handler a no-op - and the error is also logged so an observably dead
    /// widget has a diagnosis trail. Never panics.
    pub fn initialize(&mut self) -> CarouselResult<()> {
        let cards = self.host.query_cards();
        let bindings = match SlotBindings::from_query(&cards) {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!(found = cards.len(), error = %e, "carousel left un-initialized");
                return Err(e);
            }
        };

        debug!(
            before = %bindings.before,
            active = %bindings.active,
            after = %bindings.after,
            "cards bound to slots"
        );
        self.slots = Some(bindings);
        self.phase = DragPhase::Idle;
        self.host.set_input_blocked(false);
        Ok(())
    }

    /// One-shot completion signal from the render layer: the settle
    /// animation has visually finished.
    ///
    /// Clears every transient instruction, rotates the slot roles if the
    /// drag committed, and re-enables input. The permutation invariant is
    /// re-established before input is unblocked.
    pub fn handle_transition_finished(&mut self) {
        let Some(slots) = self.slots else {
            return;
        };
        let DragPhase::Settling {
            direction,
            complete,
        } = self.phase
        else {
            // Exactly-once is the render layer's contract; a stray signal
            // must not corrupt an idle or mid-drag carousel.
            warn!(phase = ?self.phase, "transition signal outside settling, dropped");
            return;
        };

        self.host.set_flag(slots.active, SlotFlag::Animating, false);
        self.host.set_flag(slots.active, SlotFlag::DragComplete, false);
        for flag in BodyFlag::ALL {
            self.host.set_body_flag(flag, false);
        }
        for card in slots.cards() {
            self.host.clear_all(card);
        }

        if complete {
            let rotated = match direction {
                Direction::Left => slots.rotated_left(),
                Direction::Right => slots.rotated_right(),
                // A completed decision requires a horizontal direction.
                Direction::Other => slots,
            };
            for (card, role) in rotated.assignments() {
                self.host.assign_role(card, role);
            }
            debug!(direction = %direction, active = %rotated.active, "slots rotated");
            self.slots = Some(rotated);
        }

        self.phase = DragPhase::Idle;
        self.host.set_input_blocked(false);
    }
}
