//! Deterministic combat rules and session state for the arena.
//!
//! `game-core` defines the canonical rules (damage, attacks, battle results)
//! and the state they act on. It performs no I/O; the runtime crate drives
//! scenes and talks to the player, and the content crate supplies the static
//! tables described by [`GameConfig`].
pub mod combat;
pub mod config;
pub mod error;
pub mod state;

pub use combat::{apply_damage, attack, calculate_damage};
pub use config::{CombatantSpec, GameConfig, ItemSpec};
pub use error::ConfigError;
pub use state::{BattleOutcome, Combatant, GameState, InventoryItem, Scene};
