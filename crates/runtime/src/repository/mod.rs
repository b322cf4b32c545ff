//! Repository layer for save data
//!
//! Repositories handle data that CHANGES during gameplay: the pet's stats
//! and inventory, stored per numbered save slot.
//!
//! Static content (catalog, cooldowns, roster) comes from `pet-content`, not
//! from repositories.

pub mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use codec::SaveRecord;
pub use error::{DecodeError, RepositoryError, Result};
pub use file::{DEFAULT_SLOT_COUNT, FileSaveRepository, read_save_file, write_save_file};
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;
