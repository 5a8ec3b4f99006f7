//! Data-driven content for the arena decision engine.
//!
//! This crate provides loaders for data files and the stock participant presets:
//! - Curve constant tables (data-driven via TOML, `loaders` feature)
//! - Encounter rosters (data-driven via RON, `loaders` feature)
//! - Weapon and gladiator presets built from the stock gameplay constants
//!
//! All loaders use arena-core types directly with serde for RON/TOML deserialization.

pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterLoader};
