//! Loaders that project a [`ConfigDocument`] onto game values.
//!
//! Each loader offers `from_document` (pure, always succeeds with defaults
//! for whatever is missing) and `load` (reads a file, `anyhow` on I/O
//! failure). [`GameSettings::load`] ties them together and never fails.

pub mod cooldowns;
pub mod inventory;
pub mod parental;
pub mod pets;
pub mod settings;

pub use cooldowns::CooldownLoader;
pub use inventory::InventoryLoader;
pub use parental::ParentalSettings;
pub use pets::{PetProfile, PetRoster};
pub use settings::GameSettings;

use std::path::Path;

use crate::ConfigDocument;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a configuration file.
pub fn load_document(path: &Path) -> LoadResult<ConfigDocument> {
    let content = read_file(path)?;
    Ok(ConfigDocument::parse(&content))
}
