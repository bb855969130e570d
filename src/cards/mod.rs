//! Card values and per-cell card state.
//!
//! ## Key Types
//!
//! - `PairKey`: Identifier shared by the two cards of a pair
//! - `Card`: One grid cell with its visibility flags

pub mod card;

pub use card::{Card, PairKey};
