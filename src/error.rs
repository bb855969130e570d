//! Error types for the recoverable seams of the crate.
//!
//! Gameplay operations never return these: invalid input is rejected with
//! `false`, and persistence failures are logged and swallowed by the session.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::PairKey;
use crate::grid::GridSize;

/// Errors raised by a [`HighScoreStore`](crate::persistence::HighScoreStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("high score store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored content is not a non-negative integer.
    #[error("high score store holds unparseable content {content:?}")]
    Corrupt { content: String },

    /// The store refused the operation (in-memory stores primed to fail).
    #[error("high score store unavailable")]
    Unavailable,
}

/// Errors raised while loading or validating a [`SessionConfig`](crate::core::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("initial_lives must be at least 1")]
    NoInitialLives,

    #[error("lives_increment_levels must be at least 1")]
    ZeroLivesIncrement,

    #[error("max_combo_multiplier must be at least 1.0, got {0}")]
    ComboCapBelowOne(f64),

    #[error("combo_bonus_multiplier must be finite and non-negative, got {0}")]
    InvalidComboBonus(f64),
}

/// Errors raised by [`GameSession::deal_layout`](crate::session::GameSession::deal_layout).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid must have at least one row and one column, got {0}")]
    EmptyGrid(GridSize),

    #[error("layout has {actual} values but a {size} grid has {expected} cells")]
    WrongCellCount {
        size: GridSize,
        expected: usize,
        actual: usize,
    },

    #[error("pair key {key} appears {count} times, expected exactly 2")]
    UnpairedKey { key: PairKey, count: usize },
}
