//! Error types for game-core.
//!
//! Combat itself cannot fail: damage saturates at zero and attacks against a
//! missing enemy are reported as `None`. The only failure the rules layer
//! knows about is a static table the game cannot be played with.

/// Invalid static configuration, detected before a session starts.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("enemy roster is empty")]
    EmptyRoster,

    #[error("at least {required} classes are required, found {found}")]
    NotEnoughClasses { required: usize, found: usize },

    #[error("{table} entry #{index} has an empty name")]
    EmptyName { table: &'static str, index: usize },

    #[error("{table} entry '{name}' has invalid {stat}: {value}")]
    InvalidStat {
        table: &'static str,
        name: String,
        stat: &'static str,
        value: f32,
    },
}
