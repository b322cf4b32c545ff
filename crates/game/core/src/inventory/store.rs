//! Active inventory: the stacks a pet currently holds.

use super::catalog::ItemCatalog;
use super::error::InventoryLineError;
use super::item::{InventorySlot, ItemCategory, ItemDefinition};
use crate::env::RngOracle;

/// Result of trying to use one unit of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// One unit was removed.
    Consumed {
        item: ItemDefinition,
        magnitude: i32,
        /// Units left afterwards; zero means the slot was removed.
        remaining: u32,
    },
    /// No held item has that name; nothing happened.
    NotFound,
}

impl ConsumeOutcome {
    /// Effect magnitude of the consumed unit, zero when nothing was consumed.
    pub fn magnitude(&self) -> i32 {
        match self {
            Self::Consumed { magnitude, .. } => *magnitude,
            Self::NotFound => 0,
        }
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }
}

/// Food and gift stacks held by the pet.
///
/// Every slot holds at least one unit; identical items share one slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    food: Vec<InventorySlot>,
    gifts: Vec<InventorySlot>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// One unit of every catalog item.
    pub fn starter(catalog: &ItemCatalog) -> Self {
        let mut inventory = Self::empty();
        for item in catalog.items() {
            inventory.add(item.clone(), 1);
        }
        inventory
    }

    /// Adds `quantity` units, merging into an identical slot when present.
    pub fn add(&mut self, item: ItemDefinition, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let slots = self.slots_mut(item.category);
        match slots.iter_mut().find(|slot| slot.item == item) {
            Some(slot) => slot.quantity = slot.quantity.saturating_add(quantity),
            None => slots.push(InventorySlot::new(item, quantity)),
        }
    }

    /// Uses one unit of the first held item called `name`.
    ///
    /// Food is searched before gifts. A slot that reaches zero is removed.
    pub fn consume(&mut self, name: &str) -> ConsumeOutcome {
        for category in [ItemCategory::Food, ItemCategory::Gift] {
            let slots = self.slots_mut(category);
            let Some(index) = slots.iter().position(|slot| slot.item.name == name) else {
                continue;
            };

            let slot = &mut slots[index];
            slot.quantity -= 1;
            let remaining = slot.quantity;
            let item = if remaining == 0 {
                slots.remove(index).item
            } else {
                slots[index].item.clone()
            };

            return ConsumeOutcome::Consumed {
                magnitude: item.magnitude(),
                item,
                remaining,
            };
        }
        ConsumeOutcome::NotFound
    }

    /// Grants at most one reward from `candidates`.
    ///
    /// Walks the candidates in order; each one not already held (same name,
    /// category and effect) gets an independent coin flip, and the first
    /// success is added and returned.
    pub fn add_random_reward<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a ItemDefinition>,
        rng: &mut dyn RngOracle,
    ) -> Option<String> {
        for candidate in candidates {
            if self.contains_same(candidate) {
                continue;
            }
            if rng.flip_coin() {
                self.add(candidate.clone(), 1);
                return Some(candidate.name.clone());
            }
        }
        None
    }

    /// True when a slot holds exactly this item.
    pub fn contains_same(&self, item: &ItemDefinition) -> bool {
        self.slots(item.category)
            .iter()
            .any(|slot| &slot.item == item)
    }

    /// True when any slot holds an item called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|slot| slot.item.name == name)
    }

    /// Total units held under `name`, across both categories.
    pub fn quantity(&self, name: &str) -> u32 {
        self.iter()
            .filter(|slot| slot.item.name == name)
            .map(|slot| slot.quantity)
            .sum()
    }

    /// Total units held.
    pub fn total_count(&self) -> u32 {
        self.iter().map(|slot| slot.quantity).sum()
    }

    pub fn slots(&self, category: ItemCategory) -> &[InventorySlot] {
        match category {
            ItemCategory::Food => &self.food,
            ItemCategory::Gift => &self.gifts,
        }
    }

    /// All slots, food first.
    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.food.iter().chain(self.gifts.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.food.is_empty() && self.gifts.is_empty()
    }

    /// One `name,category,effect,quantity` line per slot.
    ///
    /// Commas, line breaks and backslashes inside names and effects are
    /// backslash-escaped so every slot stays on one line with four fields.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter()
            .map(|slot| {
                format!(
                    "{},{},{},{}",
                    escape_field(&slot.item.name),
                    slot.item.category,
                    escape_field(&slot.item.effect),
                    slot.quantity
                )
            })
            .collect()
    }

    /// Rebuilds an inventory from lines produced by [`Inventory::to_lines`].
    ///
    /// Lines without a quantity field count as one unit, so repeated legacy
    /// lines fold into a single slot. Blank lines are ignored; malformed lines
    /// are skipped and returned alongside the inventory.
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
    ) -> (Self, Vec<InventoryLineError>) {
        let mut inventory = Self::empty();
        let mut rejected = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok((item, quantity)) => inventory.add(item, quantity),
                Err(kind) => rejected.push(kind.at_line(index + 1)),
            }
        }

        (inventory, rejected)
    }

    fn slots_mut(&mut self, category: ItemCategory) -> &mut Vec<InventorySlot> {
        match category {
            ItemCategory::Food => &mut self.food,
            ItemCategory::Gift => &mut self.gifts,
        }
    }
}

/// Parses a single inventory line.
///
/// Accepts `name,category,effect,quantity` and the legacy
/// `name,category,effect`. Legacy effect text may contain bare commas; a
/// trailing field is only treated as the quantity when it is numeric.
pub fn parse_line(line: &str) -> Result<(ItemDefinition, u32), InventoryLineError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(InventoryLineError::MissingFields {
            line: 0,
            content: line.to_string(),
        });
    }

    let category = fields[1]
        .trim()
        .parse::<ItemCategory>()
        .map_err(|_| InventoryLineError::UnknownCategory {
            line: 0,
            category: fields[1].clone(),
        })?;

    let (effect_fields, quantity) = match fields.split_last() {
        Some((last, rest)) if fields.len() > 3 => match last.trim().parse::<u32>() {
            Ok(quantity) => (&rest[2..], quantity),
            Err(_) => (&fields[2..], 1),
        },
        _ => (&fields[2..], 1),
    };

    if quantity == 0 {
        return Err(InventoryLineError::ZeroQuantity {
            line: 0,
            content: line.to_string(),
        });
    }

    let item = ItemDefinition::new(fields[0].as_str(), category, effect_fields.join(","));
    Ok((item, quantity))
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Splits on unescaped commas and resolves escapes within each field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => current.push(other),
                None => current.push('\\'),
            },
            ',' => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}
