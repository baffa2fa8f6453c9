//! Drag state machine - explicit phase tracking for the gesture lifecycle.
//!
//! A single enum replaces the reference implementation's scattered mutable
//! globals (last direction, bound/unbound listeners), making impossible
//! states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (first drag-move of a gesture)
//! Dragging -> Settling         (drag-end; input blocked, animation runs)
//! Idle -> Settling             (drag-end with no preceding move)
//! Settling -> Idle             (transition-finished signal)
//! ```
//!
//! While `Settling`, every gesture event is dropped unprocessed; listening
//! and transition-in-flight are mutually exclusive by construction.

use crate::types::Direction;

/// Phase of the drag-to-transition cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Listening for drag input, nothing in flight
    Idle,

    /// Receiving per-frame drag-move events
    Dragging {
        /// Direction of the most recent move
        direction: Direction,
    },

    /// Drag released; waiting for the render layer's completion signal
    Settling {
        /// Direction recorded at release
        direction: Direction,
        /// Whether the drag crossed the commit window
        complete: bool,
    },
}

impl Default for DragPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragPhase {
    /// Returns true if the phase is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if a settle animation is in flight
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    /// Returns true if gesture events should be processed
    pub fn is_listening(&self) -> bool {
        !self.is_settling()
    }

    /// Direction carried by the current phase, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Idle => None,
            Self::Dragging { direction } | Self::Settling { direction, .. } => Some(*direction),
        }
    }

    /// Whether the in-flight settle will rotate slots when it finishes
    pub fn is_commit_pending(&self) -> bool {
        matches!(self, Self::Settling { complete: true, .. })
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
