//! Notifications reported by `GameSession::update`.

use serde::{Deserialize, Serialize};

/// What happened during one `update` tick.
///
/// Each flag is independent. At most one of `matched`/`mismatched` and at
/// most one `level_complete` fire per tick. `game_over` mirrors the session
/// state on every tick rather than marking the transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateEvents {
    /// A matched pair finished its reveal window.
    pub matched: bool,
    /// A mismatched pair was turned back face down.
    pub mismatched: bool,
    /// The level transition finished and the next level was dealt.
    pub level_complete: bool,
    /// The level just cleared earned a life (granted when it was cleared).
    pub extra_life: bool,
    /// The session is over.
    pub game_over: bool,
}

impl UpdateEvents {
    /// No flags set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Did anything worth notifying happen?
    #[must_use]
    pub fn any(&self) -> bool {
        self.matched || self.mismatched || self.level_complete || self.extra_life || self.game_over
    }
}
