//! Consecutive-match combo with idle decay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tracks consecutive matches and when the last one happened.
///
/// The count grows by one per match, drops to zero on a mismatch, and
/// decays to zero once more than the configured timeout has passed since
/// the last match. Decay never touches score already earned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    count: u32,
    last_match: Option<Duration>,
}

impl Combo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive matches so far.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Timestamp of the most recent match, if any.
    #[must_use]
    pub fn last_match(&self) -> Option<Duration> {
        self.last_match
    }

    /// Extend the combo. Returns the new count.
    pub fn record_match(&mut self, now: Duration) -> u32 {
        self.count = self.count.saturating_add(1);
        self.last_match = Some(now);
        self.count
    }

    /// Break the combo.
    pub fn break_combo(&mut self) {
        self.count = 0;
    }

    /// Decay the combo if more than `timeout` has elapsed since the last match.
    ///
    /// Returns `true` if an active combo was dropped.
    pub fn expire(&mut self, now: Duration, timeout: Duration) -> bool {
        if self.count == 0 {
            return false;
        }
        let last = self.last_match.unwrap_or_default();
        if now.saturating_sub(last) > timeout {
            self.count = 0;
            return true;
        }
        false
    }

    /// Score multiplier for the current count.
    ///
    /// `1.0` with no combo, otherwise `1 + count * bonus_per_match` capped at
    /// `max_multiplier`.
    #[must_use]
    pub fn multiplier(&self, bonus_per_match: f64, max_multiplier: f64) -> f64 {
        if self.count == 0 {
            return 1.0;
        }
        (1.0 + f64::from(self.count) * bonus_per_match).min(max_multiplier)
    }
}
