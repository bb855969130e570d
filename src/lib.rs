//! # mindflip
//!
//! Game logic for a turn-based memory-matching card game.
//!
//! Cards are dealt face down in a grid. Each turn the player flips two; a
//! matching pair stays face up and scores, a mismatch costs a life and turns
//! back over after a short reveal. Clearing the board advances to a larger
//! grid. The session ends when lives run out.
//!
//! ## Design
//!
//! 1. **Host-driven**: the session never reads a clock, sleeps, or renders.
//!    The host passes `now` into `flip_card` and `update` and reads state
//!    back for display.
//!
//! 2. **Deterministic**: deals come from a seeded ChaCha RNG, so a seed plus
//!    an input log replays a session exactly.
//!
//! 3. **Best-effort persistence**: only the high score outlives a session,
//!    and store failures never interrupt play.
//!
//! ## Modules
//!
//! - `core`: configuration, RNG, time sources
//! - `cards`: cards and pair keys
//! - `grid`: grid sizing, cursor movement, dealing
//! - `scoring`: combo tracking, match points, level bonus
//! - `persistence`: high-score stores
//! - `session`: the game state machine
//! - `error`: error types

pub mod cards;
pub mod core;
pub mod error;
pub mod grid;
pub mod persistence;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Clock, GameRng, GameRngState, ManualClock, MonotonicClock, SessionConfig};

pub use crate::cards::{Card, PairKey};

pub use crate::grid::{Direction, GridSize, Position};

pub use crate::scoring::Combo;

pub use crate::persistence::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};

pub use crate::session::{GameSession, Selection, TurnState, UpdateEvents};

pub use crate::error::{ConfigError, LayoutError, StoreError};
