//! Terminal frontend for the arena game.
//!
//! This crate provides the line-based terminal implementation of
//! [`runtime::Console`] plus the configuration and logging setup the binary
//! needs.
//!
//! # Architecture
//!
//! The frontend is a pure I/O layer:
//! - Does NOT own the game state
//! - Writes lines to stdout and reads lines from stdin
//! - Clears the screen and waits for key presses only on a real terminal

mod config;
mod console;
pub mod logging;

pub use config::CliConfig;
pub use console::StdConsole;
