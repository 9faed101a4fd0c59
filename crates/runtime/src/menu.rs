//! Numbered menus read through the console.
//!
//! Every decision the player makes goes through [`get_input`]: the options are
//! listed from 1, and the player may answer with either the number or the
//! option label. Anything else is rejected and the menu is shown again.

use thiserror::Error;

use crate::api::{Console, Result, RuntimeError};

/// Marker shown in front of every input line.
pub const PROMPT_MARKER: &str = "> ";

/// Options of every yes/no confirmation, in menu order.
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// Message shown when an answer matches no option.
pub const INVALID_INPUT: &str = "Invalid Input";

/// Why a line of input did not select an option.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("option {index} is out of range 1..={count}")]
    OutOfRange { index: usize, count: usize },

    #[error("no option matches {0:?}")]
    NoMatch(String),
}

/// Resolve one line of input against `options`.
///
/// Accepts a 1-based option number or an option label. Surrounding whitespace
/// is ignored and labels match ASCII case-insensitively.
///
/// # Returns
///
/// The 0-based index of the selected option.
pub fn parse_selection<S: AsRef<str>>(
    input: &str,
    options: &[S],
) -> std::result::Result<usize, SelectionError> {
    let input = input.trim();

    let by_label = options
        .iter()
        .position(|option| option.as_ref().trim().eq_ignore_ascii_case(input));

    match input.parse::<usize>() {
        Ok(number) if (1..=options.len()).contains(&number) => Ok(number - 1),
        Ok(number) => by_label.ok_or(SelectionError::OutOfRange {
            index: number,
            count: options.len(),
        }),
        Err(_) => by_label.ok_or_else(|| SelectionError::NoMatch(input.to_owned())),
    }
}

/// Present `prompt` with numbered `options` until the player picks one.
///
/// Invalid answers are never fatal: the routine reports them and asks again,
/// indefinitely. Only console failures (including end of input) end it early.
///
/// # Returns
///
/// The 0-based index of the selected option.
pub fn get_input<C, S>(console: &mut C, prompt: &str, options: &[S]) -> Result<usize>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(RuntimeError::EmptyMenu {
            prompt: prompt.to_owned(),
        });
    }

    loop {
        console.write_line(prompt)?;
        for (number, option) in (1..).zip(options) {
            console.write_line(&format!("{number}. {}", option.as_ref()))?;
        }

        let input = console.read_line(PROMPT_MARKER)?;

        match parse_selection(&input, options) {
            Ok(index) => {
                tracing::debug!(prompt, choice = options[index].as_ref(), "menu selection");
                console.clear()?;
                return Ok(index);
            }
            Err(err) => {
                tracing::debug!(prompt, %err, "rejected menu input");
                console.write_line(INVALID_INPUT)?;
                console.pause()?;
                console.clear()?;
            }
        }
    }
}

/// Ask a yes/no question. Returns `true` for "Yes".
pub fn confirm<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool> {
    Ok(get_input(console, prompt, &YES_NO)? == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScriptedConsole;

    const CLASSES: [&str; 2] = ["Wizard", "Knight"];

    #[test]
    fn accepts_numbers_and_labels() {
        assert_eq!(parse_selection("1", &CLASSES), Ok(0));
        assert_eq!(parse_selection("2", &CLASSES), Ok(1));
        assert_eq!(parse_selection("Knight", &CLASSES), Ok(1));
    }

    #[test]
    fn ignores_whitespace_and_case() {
        assert_eq!(parse_selection("  2 \r", &CLASSES), Ok(1));
        assert_eq!(parse_selection("wIzArD", &CLASSES), Ok(0));
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(
            parse_selection("3", &CLASSES),
            Err(SelectionError::OutOfRange { index: 3, count: 2 })
        );
        assert_eq!(
            parse_selection("0", &CLASSES),
            Err(SelectionError::OutOfRange { index: 0, count: 2 })
        );
    }

    #[test]
    fn rejects_unknown_text() {
        assert_eq!(
            parse_selection("Rogue", &CLASSES),
            Err(SelectionError::NoMatch("Rogue".into()))
        );
        assert_eq!(
            parse_selection("", &CLASSES),
            Err(SelectionError::NoMatch(String::new()))
        );
    }

    #[test]
    fn numeric_labels_still_match() {
        let options = ["Left", "10"];
        assert_eq!(parse_selection("10", &options), Ok(1));
    }

    #[test]
    fn get_input_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["3", "nope", "2"]);

        let choice = get_input(&mut console, "Play Again?", &YES_NO).unwrap();

        assert_eq!(choice, 1);
        assert_eq!(console.count(INVALID_INPUT), 2);
        assert_eq!(console.count("Play Again?"), 3);
        assert_eq!(console.count("1. Yes"), 3);
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn get_input_propagates_end_of_input() {
        let mut console = ScriptedConsole::new(["3"]);

        let err = get_input(&mut console, "Play Again?", &YES_NO).unwrap_err();

        assert!(matches!(err, RuntimeError::InputClosed));
    }

    #[test]
    fn get_input_rejects_empty_menu() {
        let mut console = ScriptedConsole::new(["1"]);
        let options: [&str; 0] = [];

        let err = get_input(&mut console, "Nothing", &options).unwrap_err();

        assert!(matches!(err, RuntimeError::EmptyMenu { .. }));
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn confirm_maps_yes_and_no() {
        let mut console = ScriptedConsole::new(["yes", "2"]);

        assert!(confirm(&mut console, "Keep?").unwrap());
        assert!(!confirm(&mut console, "Keep?").unwrap());
    }
}
