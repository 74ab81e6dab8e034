//! Board system
//!
//! Contains the space (tile) types, map descriptions and the board grid.

mod board;
mod map;
mod position;
mod space;

pub use board::Board;
pub use map::MapDescription;
pub use position::{Direction, Position};
pub use space::{Space, SpaceKind};
