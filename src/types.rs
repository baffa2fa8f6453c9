//! Core types for the swipedeck carousel.
//!
//! This module defines the fundamental data structures shared across the
//! crate: card handles, slot roles, drag directions, and the event/decision
//! values exchanged with the gesture and render collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Card Handles
// ============================================================================

/// Opaque handle to a renderable card element.
///
/// The carousel never creates or destroys cards; it only re-assigns their
/// slot roles and issues rendering instructions against them. The id is
/// whatever the render layer uses to identify its elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

// ============================================================================
// Slot Roles
// ============================================================================

/// Logical role of a card slot. Roles rotate among the same three cards
/// after each committed transition; they are not fixed element identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The card behind the active one (slides in on a right drag)
    Before,
    /// The card currently presented to the user
    Active,
    /// The card ahead of the active one (slides in on a left drag)
    After,
}

impl Slot {
    /// All three roles in `before`, `active`, `after` order.
    pub const ALL: [Slot; 3] = [Slot::Before, Slot::Active, Slot::After];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Before => "before",
            Slot::Active => "active",
            Slot::After => "after",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Drag Input
// ============================================================================

/// Horizontal drag direction as reported by the gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    /// Any non-horizontal direction (vertical or diagonal release)
    Other,
}

impl Direction {
    /// Returns true for the two directions that can commit a transition.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// A single sample from the gesture stream, delivered per movement frame
/// (`handle_drag_move`) and once at release (`handle_drag_end`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    /// Magnitude of horizontal displacement in pixels; always non-negative,
    /// `direction` carries the sign.
    pub distance: f32,
    /// Which way the pointer moved along the drag axis.
    pub direction: Direction,
    /// Vertical velocity sampled at the same moment, used to pick the
    /// settle animation speed.
    pub velocity_y: f32,
}

impl DragEvent {
    pub fn new(distance: f32, direction: Direction, velocity_y: f32) -> Self {
        Self {
            distance,
            direction,
            velocity_y,
        }
    }
}

// ============================================================================
// Completion Decision
// ============================================================================

/// Outcome of a drag release, computed once per gesture.
///
/// `completed` means the drag crossed the commit window and the slot roles
/// will rotate when the settle animation finishes; otherwise the cards snap
/// back and the bindings are left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionDecision {
    pub completed: bool,
    pub direction: Direction,
}

impl CompletionDecision {
    pub fn reset(direction: Direction) -> Self {
        Self {
            completed: false,
            direction,
        }
    }

    pub fn complete(direction: Direction) -> Self {
        Self {
            completed: true,
            direction,
        }
    }
}
