//! Runtime orchestration for an arena play session.
//!
//! This crate wires the combat rules from `game-core` to a line-based
//! [`Console`]. Consumers embed [`SceneController`] to run the scene loop and
//! provide the console their frontend needs.
//!
//! Modules are organized by responsibility:
//! - [`controller`] hosts the scene state machine
//! - [`api`] exposes the console abstraction and error types
//! - [`menu`] reads numbered menu choices
//! - [`format`] renders stat blocks
//! - [`scenario`] provides a scripted console for tests and demos
pub mod api;
pub mod controller;
pub mod format;
pub mod menu;
pub mod scenario;

pub use api::{Console, Result, RuntimeError};
pub use controller::{FAREWELL, SceneController, VICTORY};
pub use menu::{SelectionError, get_input, parse_selection};
pub use scenario::ScriptedConsole;
