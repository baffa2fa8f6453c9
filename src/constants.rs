//! Crate-wide constants.
//!
//! Centralizes the carousel tunables so the drag/settle behavior is
//! self-documenting. `CarouselConfig` defaults are wired to these values.

// ============================================================================
// Animation & Timing
// ============================================================================

/// Transition duration in milliseconds for a fast drag
pub const ANIMATION_SPEED_FAST_MS: u64 = 200;

/// Transition duration in milliseconds for a slow drag
pub const ANIMATION_SPEED_SLOW_MS: u64 = 100;

/// Vertical velocity boundary separating a fast drag from a slow one.
/// 0 is slow, 3+ is very fast.
pub const DRAG_VELOCITY_BOUNDARY: f32 = 2.0;

// ============================================================================
// Commit Decision
// ============================================================================

/// Fraction of the viewport width a drag must cross to commit a card
/// transition (distance >= viewport / fraction completes the swipe).
pub const DRAG_WINDOW_FRACTION: f32 = 6.0;

// ============================================================================
// Drag Rendering
// ============================================================================

/// Opacity floor for the incoming card, as a percentage. The incoming card
/// is never rendered below this even at the very start of a drag.
pub const MIN_DRAG_OPACITY_PERCENT: f32 = 30.0;

// ============================================================================
// Slots
// ============================================================================

/// Number of card slots the carousel manages (`before`, `active`, `after`).
pub const SLOT_COUNT: usize = 3;
