//! Item definitions and held stacks.

use std::fmt;

/// Which half of the inventory an item belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    /// Restores hunger when used.
    Food,
    /// Restores happiness when given.
    Gift,
}

/// Quantity-less description of an item.
///
/// Two definitions are the same item only when name, category and effect
/// text all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub category: ItemCategory,
    /// Human-readable effect, e.g. "Restores 10 hunger".
    pub effect: String,
}

impl ItemDefinition {
    pub fn new(
        name: impl Into<String>,
        category: ItemCategory,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            effect: effect.into(),
        }
    }

    pub fn food(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self::new(name, ItemCategory::Food, effect)
    }

    pub fn gift(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self::new(name, ItemCategory::Gift, effect)
    }

    /// Stat points restored when the item is used.
    ///
    /// Taken from the first integer in the effect text ("+10" and "10" both
    /// read as 10); zero when the text carries no number.
    pub fn magnitude(&self) -> i32 {
        parse_magnitude(&self.effect)
    }
}

impl fmt::Display for ItemDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.name, self.category, self.effect)
    }
}

/// Held item with its quantity. Slots in an inventory always hold at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemDefinition,
    pub quantity: u32,
}

impl InventorySlot {
    pub fn new(item: ItemDefinition, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

fn parse_magnitude(effect: &str) -> i32 {
    let bytes = effect.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return 0;
    };
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset);

    let value = effect[start..end].parse::<i32>().unwrap_or(i32::MAX);
    if start > 0 && bytes[start - 1] == b'-' {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_reads_first_number() {
        assert_eq!(ItemDefinition::food("Apple", "Restores 10 hunger").magnitude(), 10);
        assert_eq!(
            ItemDefinition::gift("Toy", "Increases happiness +15").magnitude(),
            15
        );
        assert_eq!(ItemDefinition::food("Rock", "Tastes bad -3").magnitude(), -3);
        assert_eq!(ItemDefinition::food("Mystery", "Some effect").magnitude(), 0);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("food".parse::<ItemCategory>(), Ok(ItemCategory::Food));
        assert_eq!("Gift".parse::<ItemCategory>(), Ok(ItemCategory::Gift));
        assert!("toy".parse::<ItemCategory>().is_err());
        assert_eq!(ItemCategory::Gift.to_string(), "gift");
    }
}
