//! # Zuul Core
//!
//! The world model for the Zuul adventure - rooms and their exits, the items
//! lying around in them, and the player who walks between rooms carrying a
//! weight-limited inventory.
//! This crate holds no console or parsing logic; callers drive it one
//! operation at a time and decide what to show.

pub mod entities;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use mechanics::*;
pub use world_state::*;
