//! Configuration content and loaders.
//!
//! This crate turns the game's JSON-shaped configuration file into `pet-core`
//! values:
//! - Cooldown durations per action
//! - Starter pet roster (names and descriptions)
//! - Parental settings (password, playtime counters, revival flag)
//! - Starter inventory
//!
//! Loading never fails the game: every loader has a defaulting entry point,
//! and malformed text falls back from JSON parsing to substring scanning.

pub mod document;
pub mod loaders;
pub mod scan;

pub use document::ConfigDocument;
pub use loaders::{
    CooldownLoader, GameSettings, InventoryLoader, ParentalSettings, PetProfile, PetRoster,
};
