//! cave-core: Core game logic for the Cave Escape text adventure
//!
//! This crate contains all game logic with no terminal I/O.
//! It is designed to be pure and testable: front ends drive it through
//! [`GameLoop::tick`] and answer prompts through [`action::ChoiceProvider`].

pub mod action;
pub mod dungeon;
pub mod object;
pub mod player;
pub mod world;

mod consts;
mod gameloop;

pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameState, INTRO};
