//! The fixed universe of items a pet can ever own.

use super::item::{ItemCategory, ItemDefinition};

/// Ordered list of every possible item.
///
/// Order matters: reward draws walk the catalog front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    /// The stock catalog: six foods and four gifts.
    pub fn standard() -> Self {
        Self::new(vec![
            ItemDefinition::food("Apple", "Restores 10 hunger"),
            ItemDefinition::food("Carrot", "Restores 5 hunger"),
            ItemDefinition::food("Bone", "Restores 15 hunger"),
            ItemDefinition::food("Fish", "Restores 12 hunger"),
            ItemDefinition::food("Chicken", "Restores 13 hunger"),
            ItemDefinition::food("Steak", "Restores 20 hunger"),
            ItemDefinition::gift("Toy", "Increases happiness +10"),
            ItemDefinition::gift("Teddy Bear", "Increases happiness +15"),
            ItemDefinition::gift("Ball", "Increases happiness +9"),
            ItemDefinition::gift("Frisbee", "Increases happiness +12"),
        ])
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Items of one category, in catalog order.
    pub fn of_category(&self, category: ItemCategory) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Looks an item up by name, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
