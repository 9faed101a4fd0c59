/// Discrete phase of the game loop.
///
/// Transitions:
///
/// ```text
/// NamingInput → ClassSelection → Battle (repeats) → MainMenu
///      ↑                                                │
///      └──────────────────── play again ────────────────┘
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Scene {
    /// Player types a name and confirms it.
    #[default]
    NamingInput,
    /// Player picks a class preset.
    ClassSelection,
    /// One turn against the current enemy, followed by the result check.
    Battle,
    /// Play again or quit.
    MainMenu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_naming_input() {
        assert_eq!(Scene::default(), Scene::NamingInput);
    }

    #[test]
    fn displays_as_snake_case() {
        assert_eq!(Scene::ClassSelection.to_string(), "class_selection");
        assert_eq!(Scene::MainMenu.as_ref(), "main_menu");
    }
}
