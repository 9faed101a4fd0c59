//! CLI-specific configuration for the terminal client.
use std::env;

/// Terminal client configuration.
///
/// These settings only change how text is presented; game rules and tables
/// are never read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Clear the screen between menus (terminal only).
    pub clear_screen: bool,
    /// Wait for a key press after battle messages (terminal only).
    pub pause: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CLEAR_SCREEN` - Clear the screen between menus (default: true)
    /// - `ARENA_PAUSE` - Wait for a key press after messages (default: true)
    /// - `ARENA_LOG` - Default tracing filter (default: warn)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(clear) = lookup("ARENA_CLEAR_SCREEN").as_deref().and_then(parse_bool) {
            config.clear_screen = clear;
        }
        if let Some(pause) = lookup("ARENA_PAUSE").as_deref().and_then(parse_bool) {
            config.pause = pause;
        }
        if let Some(filter) = lookup("ARENA_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
