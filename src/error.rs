//! Error types for carousel initialization.
//!
//! Gesture handlers are deliberately infallible no-ops when the carousel is
//! not ready; initialization is the only operation that can fail.

use thiserror::Error;

/// Errors that can occur while binding cards to slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The render layer reported fewer cards than the carousel needs
    #[error("not enough cards: found {found}, need 3")]
    NotEnoughCards { found: usize },

    /// The same card id was reported for more than one slot
    #[error("duplicate card id across slots")]
    DuplicateCard,
}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;
