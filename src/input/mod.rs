//! Gesture input handling for the carousel.
//!
//! This module implements the drag side of the controller: the phase state
//! machine, per-frame move handling, and the release decision.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`DragPhase`) to track
//! the gesture lifecycle. While a settle animation is in flight the phase
//! gates every handler, so residual touch activity cannot corrupt state.
//!
//! ## Modules
//!
//! - `state` - Drag phase state machine enum and helper methods
//! - `drag` - Drag-move handling (edge-slot transforms, opacity ramp)
//! - `drag_end` - Drag-end handling (commit decision, settle kickoff)

mod drag;
mod drag_end;
mod state;

pub use state::DragPhase;
