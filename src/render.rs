//! Render-output interface.
//!
//! The carousel never touches pixels itself; it writes declarative
//! instructions to a [`RenderHost`] implemented by the embedding render
//! layer. Instructions address individual cards (roles rotate, element
//! identities do not), plus a small set of body-level flags the renderer can
//! use for global visual treatment of a reset or completed drag.

use crate::types::{CardId, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Instruction Vocabulary
// ============================================================================

/// Per-card render flags toggled around a settle animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotFlag {
    /// The card is running its settle transition
    Animating,
    /// The drag crossed the commit window; roles rotate when the
    /// transition finishes
    DragComplete,
}

impl fmt::Display for SlotFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotFlag::Animating => "animating",
            SlotFlag::DragComplete => "drag-complete",
        };
        write!(f, "{name}")
    }
}

/// Body-level flags describing the outcome of the most recent release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyFlag {
    DragLeftReset,
    DragLeftComplete,
    DragRightReset,
    DragRightComplete,
}

impl BodyFlag {
    /// Every body flag, for bulk clearing when a settle finishes.
    pub const ALL: [BodyFlag; 4] = [
        BodyFlag::DragLeftReset,
        BodyFlag::DragLeftComplete,
        BodyFlag::DragRightReset,
        BodyFlag::DragRightComplete,
    ];
}

impl fmt::Display for BodyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyFlag::DragLeftReset => "dragleft-reset",
            BodyFlag::DragLeftComplete => "dragleft-complete",
            BodyFlag::DragRightReset => "dragright-reset",
            BodyFlag::DragRightComplete => "dragright-complete",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Render Host
// ============================================================================

/// The rendering collaborator the carousel writes instructions to.
///
/// Contract notes:
///
/// - `viewport_width` is read per processed event, never cached, so
///   orientation changes mid-drag are picked up.
/// - `query_cards` returns the current cards in `before`, `active`, `after`
///   order; it is only consulted by `Carousel::initialize`.
/// - After the carousel sets [`SlotFlag::Animating`] at drag end, the host
///   must call `Carousel::handle_transition_finished` exactly once when the
///   visual transition completes. Deduplicating completion events from the
///   underlying animation machinery is the host's responsibility.
/// - `set_input_blocked(true)` asks the host to stop feeding gesture events
///   while a settle is in flight. The carousel also gates internally, so a
///   host that cannot block input still gets correct (if wasteful) behavior.
pub trait RenderHost {
    /// Current viewport width in pixels.
    fn viewport_width(&self) -> f32;

    /// Cards currently occupying the slots, in slot order.
    fn query_cards(&self) -> Vec<CardId>;

    /// Set a horizontal translation on a card, in pixels from rest.
    fn set_transform(&mut self, card: CardId, translate_x: f32);

    /// Set a card's opacity as a fraction in `[0, 1]`.
    fn set_opacity(&mut self, card: CardId, opacity: f32);

    /// Set the CSS/engine transition duration on a card.
    fn set_transition_duration(&mut self, card: CardId, ms: u64);

    /// Toggle a per-card render flag.
    fn set_flag(&mut self, card: CardId, flag: SlotFlag, on: bool);

    /// Toggle a body-level render flag.
    fn set_body_flag(&mut self, flag: BodyFlag, on: bool);

    /// Announce a card's new slot role after a committed transition.
    fn assign_role(&mut self, card: CardId, role: Slot);

    /// Reset a card's transform, opacity, and duration to resting defaults.
    fn clear_all(&mut self, card: CardId);

    /// Block or unblock gesture input delivery at the source.
    fn set_input_blocked(&mut self, blocked: bool);
}
