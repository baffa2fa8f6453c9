//! Slot bindings and the relabeling algorithm.
//!
//! The three slot roles are a cyclic permutation of the same three cards.
//! A committed left drag rotates the ring one way, a committed right drag
//! the other; a reset leaves the bindings untouched.

use crate::constants::SLOT_COUNT;
use crate::error::{CarouselError, CarouselResult};
use crate::types::{CardId, Slot};
use serde::{Deserialize, Serialize};

/// The current card-to-role assignment. The only mutable shared state in the
/// carousel, owned exclusively by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBindings {
    pub before: CardId,
    pub active: CardId,
    pub after: CardId,
}

impl SlotBindings {
    /// Bind the first three queried cards to `before`, `active`, `after`.
    ///
    /// Rejects short queries and duplicate ids up front so the permutation
    /// invariant holds for every later rotation.
    pub fn from_query(cards: &[CardId]) -> CarouselResult<Self> {
        let [before, active, after] = cards
            .get(..SLOT_COUNT)
            .and_then(|s| <[CardId; SLOT_COUNT]>::try_from(s).ok())
            .ok_or(CarouselError::NotEnoughCards { found: cards.len() })?;

        let bindings = Self {
            before,
            active,
            after,
        };
        if !bindings.is_distinct() {
            return Err(CarouselError::DuplicateCard);
        }
        Ok(bindings)
    }

    /// The three cards in slot order.
    pub fn cards(&self) -> [CardId; SLOT_COUNT] {
        [self.before, self.active, self.after]
    }

    /// Card currently holding the given role.
    pub fn card(&self, slot: Slot) -> CardId {
        match slot {
            Slot::Before => self.before,
            Slot::Active => self.active,
            Slot::After => self.after,
        }
    }

    /// Role currently held by the given card, if it is bound.
    pub fn role_of(&self, card: CardId) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&slot| self.card(slot) == card)
    }

    /// Card/role pairs in slot order, for pushing roles to the renderer.
    pub fn assignments(&self) -> [(CardId, Slot); SLOT_COUNT] {
        [
            (self.before, Slot::Before),
            (self.active, Slot::Active),
            (self.after, Slot::After),
        ]
    }

    /// Bindings after a committed left drag: the after-card becomes active,
    /// the outgoing active card parks behind, the old before-card wraps to
    /// the far side.
    pub fn rotated_left(&self) -> Self {
        let rotated = Self {
            before: self.active,
            active: self.after,
            after: self.before,
        };
        debug_assert!(rotated.is_distinct());
        rotated
    }

    /// Bindings after a committed right drag: mirror of `rotated_left`.
    pub fn rotated_right(&self) -> Self {
        let rotated = Self {
            before: self.after,
            active: self.before,
            after: self.active,
        };
        debug_assert!(rotated.is_distinct());
        rotated
    }

    fn is_distinct(&self) -> bool {
        self.before != self.active && self.active != self.after && self.before != self.after
    }
}
