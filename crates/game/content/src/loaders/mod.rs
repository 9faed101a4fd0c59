//! Content loaders for turning RON documents into game tables.

pub mod config;

pub use config::ConfigLoader;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;
