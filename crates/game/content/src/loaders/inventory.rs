//! Starter inventory loader.

use std::path::Path;

use pet_core::{Inventory, ItemCatalog, ItemCategory, ItemDefinition};

use crate::ConfigDocument;
use crate::loaders::{LoadResult, load_document};

const INVENTORY_KEY: &str = "inventory";
const GIFT_ID_MARKER: &str = "TOY";
const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_EFFECT: &str = "Some effect";

/// Loader for the `inventory` array of `{itemId, itemName, quantity}` objects.
///
/// Items whose id contains `TOY` are gifts, everything else is food. Effect
/// text comes from the catalog entry of the same name (case-insensitive).
pub struct InventoryLoader;

impl InventoryLoader {
    /// Builds the starter inventory, or `None` when the document has no
    /// `inventory` array.
    pub fn from_document(document: &ConfigDocument, catalog: &ItemCatalog) -> Option<Inventory> {
        let entries = document.objects(INVENTORY_KEY)?;

        let mut inventory = Inventory::empty();
        for entry in entries {
            let Some(item_id) = entry.scalar("itemId") else {
                continue;
            };
            let (item, quantity) = Self::entry(&entry, &item_id, catalog);
            inventory.add(item, quantity);
        }
        Some(inventory)
    }

    /// Like [`InventoryLoader::from_document`], falling back to one of every
    /// catalog item.
    pub fn from_document_or_default(document: &ConfigDocument, catalog: &ItemCatalog) -> Inventory {
        Self::from_document(document, catalog).unwrap_or_else(|| {
            tracing::debug!("no {INVENTORY_KEY} array; using default starter inventory");
            Inventory::starter(catalog)
        })
    }

    /// Load the starter inventory from a configuration file.
    pub fn load(path: &Path, catalog: &ItemCatalog) -> LoadResult<Inventory> {
        Ok(Self::from_document_or_default(
            &load_document(path)?,
            catalog,
        ))
    }

    fn entry(entry: &ConfigDocument, item_id: &str, catalog: &ItemCatalog) -> (ItemDefinition, u32) {
        let name = entry
            .scalar("itemName")
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let category = if item_id.contains(GIFT_ID_MARKER) {
            ItemCategory::Gift
        } else {
            ItemCategory::Food
        };

        let effect = catalog
            .find_by_name(&name)
            .map_or_else(|| UNKNOWN_EFFECT.to_string(), |known| known.effect.clone());

        let quantity = entry
            .scalar("quantity")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(1);

        (ItemDefinition::new(name, category, effect), quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_items_from_entries() {
        let doc = ConfigDocument::parse(
            r#"{"inventory": [
                {"itemId": "FOOD_APPLE", "itemName": "apple", "quantity": 3},
                {"itemId": "TOY_BALL", "itemName": "Ball"},
                {"itemId": "FOOD_X", "itemName": "Pizza", "quantity": "many"},
                {"itemId": "FOOD_Y"}
            ]}"#,
        );
        let inventory = InventoryLoader::from_document(&doc, &ItemCatalog::standard()).unwrap();

        let food = inventory.slots(ItemCategory::Food);
        assert_eq!(food.len(), 3);
        assert_eq!(food[0].item, ItemDefinition::food("apple", "Restores 10 hunger"));
        assert_eq!(food[0].quantity, 3);
        assert_eq!(food[1].item, ItemDefinition::food("Pizza", "Some effect"));
        assert_eq!(food[1].quantity, 1);
        assert_eq!(food[2].item.name, "Unknown");

        let gifts = inventory.slots(ItemCategory::Gift);
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].item.effect, "Increases happiness +9");
    }

    #[test]
    fn category_comes_from_item_id() {
        // A gift name under a food id is still food.
        let doc = ConfigDocument::parse(
            r#"{"inventory": [{"itemId": "SNACK", "itemName": "Toy"}]}"#,
        );
        let inventory = InventoryLoader::from_document(&doc, &ItemCatalog::standard()).unwrap();
        assert_eq!(inventory.slots(ItemCategory::Food)[0].item.effect, "Increases happiness +10");
    }

    #[test]
    fn missing_array_uses_starter_set() {
        let catalog = ItemCatalog::standard();
        let doc = ConfigDocument::parse(r#"{"parentPassword": "x"}"#);

        assert_eq!(InventoryLoader::from_document(&doc, &catalog), None);
        let inventory = InventoryLoader::from_document_or_default(&doc, &catalog);
        assert_eq!(inventory.total_count(), 10);
    }

    #[test]
    fn empty_array_is_an_empty_inventory() {
        let doc = ConfigDocument::parse(r#"{"inventory": []}"#);
        let inventory = InventoryLoader::from_document(&doc, &ItemCatalog::standard()).unwrap();
        assert!(inventory.is_empty());
    }
}
