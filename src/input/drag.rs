//! Drag-move handling - live-updating render instructions while the finger
//! is down.
//!
//! ## Performance Notes
//!
//! This handler fires once per movement sample (60+ times per second on
//! touch hardware). It stays a pure function of event + viewport width:
//! early exits for gated states, no allocation, at most three instructions
//! emitted per call.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::input::DragPhase;
use crate::profile_scope;
use crate::render::RenderHost;
use crate::types::{Direction, DragEvent};
use tracing::trace;

impl<H: RenderHost> Carousel<H> {
    /// Process one drag-move sample.
    ///
    /// Only the edge slot on the incoming side tracks the finger; the active
    /// card is left at rest on a left drag, matching the reference behavior.
    /// Dropped unprocessed while un-initialized or settling.
    pub fn handle_drag_move(&mut self, event: &DragEvent) {
        profile_scope!("handle_drag_move");

        let Some(slots) = self.slots else {
            return;
        };
        if self.phase.is_settling() {
            return;
        }

        // Read per event, never cached: orientation can change mid-drag.
        let viewport = self.host.viewport_width();
        if viewport <= 0.0 {
            return;
        }

        let opacity = incoming_opacity(event.distance, viewport, &self.config);

        match event.direction {
            Direction::Left => {
                // After-card slides in from the right edge.
                self.host
                    .set_transform(slots.after, viewport - event.distance);
                self.host.set_opacity(slots.after, opacity);
            }
            Direction::Right => {
                self.host.set_transform(slots.active, event.distance);
                self.host
                    .set_transform(slots.before, -viewport + event.distance);
                self.host.set_opacity(slots.before, opacity);
            }
            // The gesture source splits moves by direction; non-horizontal
            // samples never reach us and are ignored if they somehow do.
            Direction::Other => return,
        }

        trace!(
            direction = %event.direction,
            distance = event.distance,
            opacity,
            "drag move"
        );
        self.phase = DragPhase::Dragging {
            direction: event.direction,
        };
    }
}

/// Opacity for the incoming card as a fraction of full.
///
/// The ramp follows the rounded drag-progress percentage, floored at the
/// configured minimum so the incoming card is visible from the first frame.
pub(crate) fn incoming_opacity(distance: f32, viewport: f32, config: &CarouselConfig) -> f32 {
    let percent = (distance / viewport * 100.0).round();
    percent.max(config.min_drag_opacity_percent) / 100.0
}
