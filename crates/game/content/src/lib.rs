//! Data-driven content definitions and loaders.
//!
//! This crate houses static match content and provides loaders for RON/TOML data files:
//! - Character roster with per-archetype skill tables (data-driven via RON)
//! - Match timing and arena layout (data-driven via TOML)
//!
//! A default roster and configuration are embedded so that a match can be
//! built without a data directory.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization,
//! then validate through [`game_core::ConfigError`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
