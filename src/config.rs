//! Carousel configuration.
//!
//! All tunables default to the values in [`crate::constants`]; embedders can
//! deserialize a `CarouselConfig` from their settings file or build one in
//! code. Serialization uses serde so the config slots into whatever settings
//! format the host application already has.

use crate::constants::{
    ANIMATION_SPEED_FAST_MS, ANIMATION_SPEED_SLOW_MS, DRAG_VELOCITY_BOUNDARY,
    DRAG_WINDOW_FRACTION, MIN_DRAG_OPACITY_PERCENT,
};
use serde::{Deserialize, Serialize};

/// Tunables for the drag-to-transition behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Fraction of the viewport width a drag must cross to commit
    /// (distance >= viewport / fraction). The single knob that decides how
    /// far a user must drag before the card switches.
    pub drag_window_fraction: f32,
    /// Transition duration in milliseconds for a fast drag.
    pub animation_speed_fast_ms: u64,
    /// Transition duration in milliseconds for a slow drag.
    pub animation_speed_slow_ms: u64,
    /// Vertical velocity boundary separating fast from slow drags.
    pub drag_velocity_boundary: f32,
    /// Opacity floor for the incoming card, as a percentage.
    pub min_drag_opacity_percent: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_window_fraction: DRAG_WINDOW_FRACTION,
            animation_speed_fast_ms: ANIMATION_SPEED_FAST_MS,
            animation_speed_slow_ms: ANIMATION_SPEED_SLOW_MS,
            drag_velocity_boundary: DRAG_VELOCITY_BOUNDARY,
            min_drag_opacity_percent: MIN_DRAG_OPACITY_PERCENT,
        }
    }
}

impl CarouselConfig {
    /// Pixel distance a drag must reach to commit, for the given viewport.
    pub fn commit_threshold(&self, viewport_width: f32) -> f32 {
        viewport_width / self.drag_window_fraction
    }

    /// Transition duration for a release with the given vertical velocity.
    ///
    /// Note the inverted mapping: a vertical velocity above the boundary
    /// selects the *slow* duration. This mirrors the reference behavior and
    /// is kept until product confirms a fix (see DESIGN.md).
    pub fn animation_speed_ms(&self, velocity_y: f32) -> u64 {
        if velocity_y > self.drag_velocity_boundary {
            self.animation_speed_slow_ms
        } else {
            self.animation_speed_fast_ms
        }
    }
}
