//! Deterministic pet rules and data types shared across crates.
//!
//! `pet-core` defines the canonical rules (stat transitions, actions,
//! cooldowns, inventory) as pure APIs over plain values. It performs no I/O;
//! content loading lives in `pet-content` and persistence in `pet-runtime`.
pub mod action;
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod env;
pub mod error;
pub mod inventory;
pub mod state;

pub use action::{
    Action, ActionError, ActionKind, ActionTransition, FeedAction, PlayAction, SleepAction,
    VetAction,
};
pub use config::PetConfig;
pub use cooldown::CooldownTable;
pub use engine::StatDelta;
pub use env::{PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{
    ConsumeOutcome, Inventory, InventoryLineError, InventorySlot, ItemCatalog, ItemCategory,
    ItemDefinition,
};
pub use state::{PetId, PetState, Stat};
