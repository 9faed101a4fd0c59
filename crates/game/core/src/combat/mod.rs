//! Combat resolution system.
//!
//! This module provides the damage rules used by every battle turn.
//!
//! # Core Functions
//!
//! - `calculate_damage`: Damage calculation with attack/defense (pure)
//! - `apply_damage`: Health reduction (clamped to 0)
//! - `attack`: Full attack resolution, mutating only the defender

pub mod damage;

pub use damage::{apply_damage, attack, calculate_damage};
