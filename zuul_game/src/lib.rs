//! # Zuul Game
//!
//! Everything around the world model: turning typed lines into commands,
//! dispatching them against a [`zuul_core::Player`], and the configuration
//! that decides which world is played.
//!
//! ## Modules
//!
//! - **command**: command words and the line parser
//! - **config**: TOML game configuration
//! - **session**: the per-game dispatcher producing replies

pub mod command;
pub mod config;
pub mod session;

pub use command::*;
pub use config::*;
pub use session::*;
