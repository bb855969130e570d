//! Time sources for the session's timed transitions.
//!
//! The session never reads the wall clock itself. Hosts pass `now` into
//! [`GameSession::flip_card`](crate::session::GameSession::flip_card) and
//! [`GameSession::update`](crate::session::GameSession::update), usually taken
//! from one of these clocks. Timestamps are [`Duration`]s since an arbitrary,
//! per-clock epoch.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A source of monotonically non-decreasing timestamps.
pub trait Clock {
    /// Time elapsed since this clock's epoch.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]. The epoch is the moment of construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to. Used by tests and replays.
///
/// ```
/// use std::time::Duration;
/// use mindflip::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(1500));
/// assert_eq!(clock.now(), Duration::from_millis(1500));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the given timestamp.
    #[must_use]
    pub fn starting_at(now: Duration) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Advance by fractional seconds.
    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }

    /// Jump to an absolute timestamp. Moving backwards is ignored.
    pub fn set(&self, now: Duration) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
