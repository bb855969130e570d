//! Turn states and the card selection held during a turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where the session is within a turn.
///
/// `FirstCard -> SecondCard -> Delay -> FirstCard`. The match that clears
/// the board goes `SecondCard -> LevelComplete -> FirstCard` of the next level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the first card of a turn.
    #[default]
    FirstCard,
    /// One card is face up, waiting for the second.
    SecondCard,
    /// Both cards face up; the outcome is applied and the reveal window runs.
    Delay,
    /// Board cleared; the transition window runs before the next deal.
    LevelComplete,
}

impl TurnState {
    /// Does this state take a flip?
    #[must_use]
    pub const fn accepts_flip(self) -> bool {
        matches!(self, TurnState::FirstCard | TurnState::SecondCard)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TurnState::FirstCard => "first card",
            TurnState::SecondCard => "second card",
            TurnState::Delay => "delay",
            TurnState::LevelComplete => "level complete",
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Indices of the cards chosen this turn, in selection order.
///
/// Holds 0, 1 or 2 entries. SmallVec keeps it off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: SmallVec<[usize; 2]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Ignored once two are held.
    pub fn push(&mut self, index: usize) {
        if self.indices.len() < 2 {
            self.indices.push(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    #[must_use]
    pub fn second(&self) -> Option<usize> {
        self.indices.get(1).copied()
    }

    /// Both cards, once two are held.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        Some((self.first()?, self.second()?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}
