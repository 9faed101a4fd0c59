//! Scripted play sessions.
//!
//! [`ScriptedConsole`] replays a fixed list of input lines and records every
//! line the game writes. Tests use it to drive whole scenes without a
//! terminal:
//! - Same script, different tables (easy/hard roster)
//! - Assertions on the exact transcript the player would see

use std::collections::VecDeque;

use crate::api::{Console, Result, RuntimeError};

/// Console that reads from a script and records output.
///
/// Running out of script behaves like end of input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    reads: usize,
    clears: usize,
    pauses: usize,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends one more scripted input line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of output lines exactly equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|written| *written == line).count()
    }

    /// Returns true if any output line contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.output.iter().any(|written| written.contains(text))
    }

    /// Script lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Number of successful reads.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        let line = self.input.pop_front().ok_or(RuntimeError::InputClosed)?;
        self.reads += 1;
        Ok(line)
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.pauses += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_then_closes() {
        let mut console = ScriptedConsole::new(["Rin"]);
        console.push_line("1");

        assert_eq!(console.read_line("> ").unwrap(), "Rin");
        assert_eq!(console.read_line("> ").unwrap(), "1");
        assert!(matches!(
            console.read_line("> "),
            Err(RuntimeError::InputClosed)
        ));
        assert_eq!(console.reads(), 2);
    }

    #[test]
    fn records_output() {
        let mut console = ScriptedConsole::default();
        console.write_line("You dealt 15 damage!").unwrap();
        console.pause().unwrap();
        console.clear().unwrap();

        assert_eq!(console.output(), ["You dealt 15 damage!"]);
        assert!(console.contains("15 damage"));
        assert_eq!((console.pauses(), console.clears()), (1, 1));
    }
}
