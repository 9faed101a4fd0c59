//! Line-based display and input abstraction.
//!
//! The scene controller never touches stdin or stdout directly. Frontends plug
//! in a [`Console`] so the game can run in a terminal, against scripted
//! fixtures, or anywhere else lines of text can be exchanged.
use super::errors::Result;

/// Display/input collaborator used by the scene controller.
///
/// Different implementations can handle:
/// - Terminal play (stdin/stdout)
/// - Scripted input for tests
pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and read one line of input without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InputClosed`](super::RuntimeError::InputClosed)
    /// at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Clear the display. No-op by default.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    /// Wait for the player to acknowledge the last message. No-op by default.
    fn pause(&mut self) -> Result<()> {
        Ok(())
    }
}
