//! The play session.
//!
//! ## Key Types
//!
//! - `GameSession`: owns the grid, turn state, score, lives, and level
//! - `TurnState`: where a turn stands (first card, second card, reveal, level done)
//! - `Selection`: the up-to-two cards chosen this turn
//! - `UpdateEvents`: what one `update` tick did, for the host's feedback

pub mod events;
pub mod game;
pub mod turn;

pub use events::UpdateEvents;
pub use game::{GameSession, STARTING_LEVEL};
pub use turn::{Selection, TurnState};
