//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::codec::{self, SaveRecord};
use super::error::{RepositoryError, Result};
use super::file::DEFAULT_SLOT_COUNT;
use super::traits::SaveRepository;

/// In-memory implementation of SaveRepository.
///
/// Keeps the encoded save text per slot, so loads go through the same codec
/// as file saves.
pub struct InMemorySaveRepository {
    saves: RwLock<BTreeMap<u32, String>>,
    slot_count: u32,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_SLOT_COUNT)
    }

    pub fn with_slots(slot_count: u32) -> Self {
        Self {
            saves: RwLock::new(BTreeMap::new()),
            slot_count,
        }
    }

    /// Stores raw save text in a slot, bypassing the encoder.
    pub fn insert_raw(&self, slot: u32, text: impl Into<String>) -> Result<()> {
        self.check_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot, text.into());
        Ok(())
    }

    fn check_slot(&self, slot: u32) -> Result<()> {
        if slot == 0 || slot > self.slot_count {
            return Err(RepositoryError::InvalidSlot {
                slot,
                max: self.slot_count,
            });
        }
        Ok(())
    }
}

impl Default for InMemorySaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, slot: u32, record: &SaveRecord) -> Result<()> {
        self.insert_raw(slot, codec::encode(record))
    }

    fn load(&self, slot: u32) -> Result<SaveRecord> {
        self.check_slot(slot)?;
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let location = format!("memory slot {slot}");
        let text = saves
            .get(&slot)
            .ok_or_else(|| RepositoryError::MissingOrEmpty {
                location: location.clone(),
            })?;
        codec::decode(text).map_err(|err| RepositoryError::from_decode(err, location))
    }

    fn is_occupied(&self, slot: u32) -> bool {
        self.saves
            .read()
            .map(|saves| saves.get(&slot).is_some_and(|text| !text.is_empty()))
            .unwrap_or(false)
    }

    fn delete(&self, slot: u32) -> Result<()> {
        self.check_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(&slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<u32>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(slot, _)| *slot)
            .collect())
    }

    fn slot_count(&self) -> u32 {
        self.slot_count
    }
}
