//! High-score persistence.
//!
//! A single non-negative integer survives between sessions. The session
//! treats every store as best-effort: read failures mean "no high score
//! yet", write failures are logged and dropped.

pub mod file;
pub mod store;

pub use file::FileHighScoreStore;
pub use store::{HighScoreStore, MemoryHighScoreStore};
