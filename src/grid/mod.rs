//! Grid geometry and level dealing.
//!
//! - `GridSize::for_level` is the sizing policy (two more cards per level,
//!   capped at 24)
//! - `Position::step` is toroidal cursor movement
//! - `deal` / `deal_layout` build the row-major card sequence

pub mod deal;
pub mod layout;

pub use deal::{deal, deal_layout};
pub use layout::{Direction, GridSize, Position, MAX_CARDS};
