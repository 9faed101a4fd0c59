//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the console abstraction a frontend implements and the error type every
//! runtime operation returns.

pub mod console;
pub mod errors;

pub use console::Console;
pub use errors::{Result, RuntimeError};
