//! Items, the stock catalog, and the pet's held stacks.
mod catalog;
mod error;
mod item;
mod store;

pub use catalog::ItemCatalog;
pub use error::InventoryLineError;
pub use item::{InventorySlot, ItemCategory, ItemDefinition};
pub use store::{ConsumeOutcome, Inventory, parse_line};
