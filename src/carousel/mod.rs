//! Carousel module - controller state, slot bindings, and lifecycle.
//!
//! This module is organized into several submodules:
//! - `state` - The `Carousel` struct definition and accessors
//! - `slots` - `SlotBindings` and the relabeling (rotation) algorithm
//! - `lifecycle` - Initialization and transition-finished handling
//!
//! The drag handlers themselves live in [`crate::input`].

mod lifecycle;
mod slots;
mod state;

pub use slots::SlotBindings;
pub use state::Carousel;
