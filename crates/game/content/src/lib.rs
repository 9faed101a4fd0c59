//! Data-driven content definitions and loaders.
//!
//! This crate houses the static arena tables and the loader that turns them
//! into a validated [`game_core::GameConfig`]:
//! - Enemy roster (fought in order)
//! - Class presets (menu order)
//! - Item table
//!
//! The built-in tables are a RON document compiled into the binary, so the
//! game never reads content files at runtime.

pub mod loaders;

pub use loaders::{ConfigLoader, LoadResult};

/// RON source of the built-in arena tables.
pub const BUILTIN_CONFIG: &str = include_str!("../data/arena.ron");
