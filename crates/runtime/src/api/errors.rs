//! Unified error types surfaced by the runtime API.
//!
//! Wraps console failures and configuration problems so the binary can bubble
//! them up with consistent context. Invalid menu input never appears here; it
//! is handled inside [`crate::menu::get_input`].
use thiserror::Error;

use game_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The console reached end of input.
    #[error("input stream closed")]
    InputClosed,

    #[error("menu {prompt:?} has no options")]
    EmptyMenu { prompt: String },

    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}
