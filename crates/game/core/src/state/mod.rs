//! Authoritative game state representation.
//!
//! This module owns the combatant and item records plus the session state the
//! scene controller drives. Combat rules in [`crate::combat`] are the only
//! code that changes a combatant's health.
mod combatant;
mod game_state;
mod item;
mod scene;

pub use combatant::Combatant;
pub use game_state::{BattleOutcome, GameState};
pub use item::InventoryItem;
pub use scene::Scene;
