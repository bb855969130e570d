//! Core building blocks: configuration, RNG, and time sources.
//!
//! These carry no game rules. The session combines them with the card grid
//! and scoring modules.

pub mod clock;
pub mod config;
pub mod rng;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{SessionConfig, DEFAULT_HIGH_SCORE_PATH};
pub use rng::{GameRng, GameRngState};
