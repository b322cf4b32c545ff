//! Plain-text save format.
//!
//! ```text
//! <score>
//! <happiness>
//! <health>
//! <sleep>
//! <hunger>
//! <petId>
//! <name>,<category>,<effect>,<quantity>
//! ...
//! ```
//!
//! Commas, line breaks and backslashes in names and effects are
//! backslash-escaped. Inventory lines without a quantity (older saves) count
//! as one unit each.

use pet_core::{Inventory, PetId, PetState};

use super::error::DecodeError;

const HEADER_LINES: usize = 6;

/// A pet and its belongings, as stored in one save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveRecord {
    pub state: PetState,
    pub inventory: Inventory,
}

impl SaveRecord {
    pub fn new(state: PetState, inventory: Inventory) -> Self {
        Self { state, inventory }
    }
}

/// Renders a record as save text.
pub fn encode(record: &SaveRecord) -> String {
    let state = &record.state;
    let mut lines = vec![
        state.score.to_string(),
        state.happiness.to_string(),
        state.health.to_string(),
        state.sleep.to_string(),
        state.hunger.to_string(),
        state.pet_id.0.to_string(),
    ];
    lines.extend(record.inventory.to_lines());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Parses save text.
///
/// The six header lines must all be integers. Stats outside `[0, 100]` are
/// clamped. Inventory lines that cannot be parsed are skipped with a warning.
pub fn decode(text: &str) -> Result<SaveRecord, DecodeError> {
    if text.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut lines = text.lines();
    let mut header = [0i64; HEADER_LINES];
    for (index, value) in header.iter_mut().enumerate() {
        let line = index + 1;
        let raw = lines.next().ok_or(DecodeError::MissingLine { line })?.trim();
        *value = raw.parse().map_err(|_| DecodeError::Invalid {
            line,
            value: raw.to_string(),
            expected: "an integer",
        })?;
    }

    let [score, happiness, health, sleep, hunger, pet_id] = header;
    let pet_id = u32::try_from(pet_id).map_err(|_| DecodeError::Invalid {
        line: HEADER_LINES,
        value: pet_id.to_string(),
        expected: "a pet id",
    })?;

    let stat = |value: i64| value.clamp(0, i64::from(u8::MAX)) as i32;
    let state = PetState::new(
        score,
        stat(happiness),
        stat(health),
        stat(sleep),
        stat(hunger),
        PetId(pet_id),
    );
    if [happiness, health, sleep, hunger]
        .iter()
        .any(|value| !(0..=100).contains(value))
    {
        tracing::debug!(happiness, health, sleep, hunger, "clamped out-of-range stats in save");
    }

    let (inventory, rejected) = Inventory::from_lines(lines);
    for err in rejected {
        tracing::warn!(line = err.line() + HEADER_LINES, error = %err, "skipping inventory line");
    }

    Ok(SaveRecord { state, inventory })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::{ItemCatalog, ItemCategory, ItemDefinition};

    #[test]
    fn round_trip_keeps_stats_and_counts() {
        let mut inventory = Inventory::starter(&ItemCatalog::standard());
        inventory.add(ItemDefinition::food("Apple", "Restores 10 hunger"), 2);
        let record = SaveRecord::new(PetState::new(140, 33, 87, 0, 100, PetId(2)), inventory);

        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded.state, record.state);
        assert_eq!(decoded.inventory.total_count(), 12);
        assert_eq!(decoded.inventory.quantity("Apple"), 3);
        assert_eq!(decoded, record);
    }

    #[test]
    fn round_trip_keeps_items_with_separators_in_their_text() {
        let mut inventory = Inventory::empty();
        inventory.add(ItemDefinition::food("Mac, Cheese", "Some effect"), 2);
        inventory.add(ItemDefinition::food("Hot\nDog", "Restores 5,\nthen naps"), 1);
        inventory.add(ItemDefinition::gift("Back\\slash", "Increases happiness +3"), 4);
        let record = SaveRecord::new(PetState::new(7, 50, 50, 50, 50, PetId(1)), inventory);

        let text = encode(&record);
        assert_eq!(text.lines().count(), 6 + 3);

        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.inventory.total_count(), 7);
        assert_eq!(decoded.inventory.quantity("Mac, Cheese"), 2);
        assert_eq!(decoded.inventory.quantity("Hot\nDog"), 1);
        assert_eq!(decoded, record);
    }

    #[test]
    fn configured_starter_items_survive_a_save() {
        let settings = pet_content::GameSettings::from_text(
            r#"{"inventory":[{"itemId":"FOOD_1","itemName":"Mac, Cheese","quantity":2},
                {"itemId":"TOY_1","itemName":"Hot\nDog","quantity":1}]}"#,
        );
        let record = SaveRecord::new(PetState::default(), settings.starter_inventory);

        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded.inventory.total_count(), 3);
        assert_eq!(decoded.inventory.quantity("Mac, Cheese"), 2);
        assert_eq!(decoded.inventory.quantity("Hot\nDog"), 1);
    }

    #[test]
    fn encodes_header_in_fixed_order() {
        let record = SaveRecord::new(PetState::new(-5, 1, 2, 3, 4, PetId(1)), Inventory::empty());
        assert_eq!(encode(&record), "-5\n1\n2\n3\n4\n1\n");
    }

    #[test]
    fn legacy_save_without_quantities() {
        let text = "40\n50\n60\n70\n80\n0\n\
                    Apple,food,Restores 10 hunger\n\
                    Apple,food,Restores 10 hunger\n\
                    Ball,gift,Increases happiness +9\n";
        let record = decode(text).unwrap();

        assert_eq!(record.state, PetState::new(40, 50, 60, 70, 80, PetId(0)));
        assert_eq!(record.inventory.quantity("Apple"), 2);
        assert_eq!(record.inventory.slots(ItemCategory::Gift).len(), 1);
    }

    #[test]
    fn short_or_non_numeric_header_is_rejected() {
        assert_eq!(decode(""), Err(DecodeError::Empty));
        assert_eq!(decode("  \n\n"), Err(DecodeError::Empty));
        assert_eq!(decode("1\n2\n3\n"), Err(DecodeError::MissingLine { line: 4 }));
        assert_eq!(
            decode("1\n2\nthree\n4\n5\n6\n"),
            Err(DecodeError::Invalid {
                line: 3,
                value: "three".into(),
                expected: "an integer",
            })
        );
        assert!(matches!(
            decode("1\n2\n3\n4\n5\n-1\n"),
            Err(DecodeError::Invalid { line: 6, .. })
        ));
    }

    #[test]
    fn out_of_range_stats_are_clamped() {
        let record = decode("0\n250\n-7\n100\n101\n1\r\n").unwrap();
        assert_eq!(record.state.happiness, 100);
        assert_eq!(record.state.health, 0);
        assert_eq!(record.state.hunger, 100);
        assert!(record.state.stats_in_bounds());
    }

    #[test]
    fn malformed_inventory_lines_are_skipped() {
        let text = "0\n50\n50\n50\n50\n0\nnonsense\nApple,food,Restores 10 hunger,2\n";
        let record = decode(text).unwrap();
        assert_eq!(record.inventory.total_count(), 2);
    }
}
