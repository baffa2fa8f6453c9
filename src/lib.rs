//! swipedeck - touch-gesture-driven card carousel core.
//!
//! One controller, [`Carousel`], tracks a horizontal drag over three logical
//! card slots (`before`, `active`, `after`), decides at release whether the
//! gesture commits a transition to the next/previous card or snaps back, and
//! rotates the slot roles when a committed settle animation finishes.
//!
//! Gesture recognition and rendering stay outside the crate: the embedder
//! feeds [`DragEvent`]s in and implements [`RenderHost`] to consume the
//! declarative instructions (transforms, opacity, durations, flags) the
//! controller emits.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod render;
pub mod types;

pub use carousel::{Carousel, SlotBindings};
pub use config::CarouselConfig;
pub use error::{CarouselError, CarouselResult};
pub use input::DragPhase;
pub use render::{BodyFlag, RenderHost, SlotFlag};
pub use types::{CardId, CompletionDecision, Direction, DragEvent, Slot};
