//! Aggregate settings read from the game configuration file.

use std::path::Path;

use pet_core::{CooldownTable, Inventory, ItemCatalog};

use crate::ConfigDocument;
use crate::loaders::{
    CooldownLoader, InventoryLoader, ParentalSettings, PetRoster, load_document,
};

/// Everything a session needs from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub cooldowns: CooldownTable,
    pub roster: PetRoster,
    pub parental: ParentalSettings,
    pub catalog: ItemCatalog,
    pub starter_inventory: Inventory,
}

impl GameSettings {
    /// Loads settings from `path`, degrading to [`GameSettings::default`] when
    /// the file cannot be read.
    pub fn load(path: &Path) -> Self {
        match load_document(path) {
            Ok(document) => {
                tracing::debug!(
                    path = %path.display(),
                    structured = document.is_structured(),
                    "loaded game configuration"
                );
                Self::from_document(&document)
            }
            Err(err) => {
                tracing::warn!(error = %err, "game configuration unavailable; using defaults");
                Self::default()
            }
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_document(&ConfigDocument::parse(text))
    }

    pub fn from_document(document: &ConfigDocument) -> Self {
        let catalog = ItemCatalog::standard();
        Self {
            cooldowns: CooldownLoader::from_document(document),
            roster: PetRoster::from_document(document),
            parental: ParentalSettings::from_document(document),
            starter_inventory: InventoryLoader::from_document_or_default(document, &catalog),
            catalog,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        let catalog = ItemCatalog::standard();
        Self {
            cooldowns: CooldownTable::default(),
            roster: PetRoster::defaults(),
            parental: ParentalSettings::default(),
            starter_inventory: Inventory::starter(&catalog),
            catalog,
        }
    }
}
