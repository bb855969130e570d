//! A single grid cell: its pair key, position, and visibility.
//!
//! Cards are dealt fresh for every level and thrown away when the level
//! ends, so identity (`value`, `position`) is fixed at construction and only
//! the visibility flags change.

use serde::{Deserialize, Serialize};

use crate::grid::Position;

/// Identifier shared by exactly two cards of a level.
///
/// The session deals keys `1..=pairs`. The engine only compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a new pair key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the grid.
///
/// ## Invariant
///
/// Once `matched` is set, `flipped` is also set and neither changes again
/// (short of [`Card::reset`]). `flipped` only toggles while unmatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: PairKey,
    position: Position,
    flipped: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(value: PairKey, position: Position) -> Self {
        Self {
            value,
            position,
            flipped: false,
            matched: false,
        }
    }

    #[must_use]
    pub const fn value(&self) -> PairKey {
        self.value
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.position.col
    }

    /// Is the card face up (revealed or matched)?
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face down and still in play.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Toggle face up/down.
    ///
    /// Returns `false` without effect if the card is already matched.
    pub fn flip(&mut self) -> bool {
        if self.matched {
            return false;
        }
        self.flipped = !self.flipped;
        true
    }

    /// Lock the card face up as part of a found pair. Idempotent.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.flipped = true;
    }

    /// Return to face down and unmatched.
    pub fn reset(&mut self) {
        self.flipped = false;
        self.matched = false;
    }

    /// Do the two cards form a pair? Position is irrelevant.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.matched {
            "matched"
        } else if self.flipped {
            "flipped"
        } else {
            "hidden"
        };
        write!(f, "Card(value={}, pos={}, {})", self.value, self.position, status)
    }
}
