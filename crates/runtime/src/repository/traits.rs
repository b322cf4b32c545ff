//! Repository contract for numbered save slots.

use super::codec::SaveRecord;
use super::error::Result;

/// Repository for save slot persistence and loading.
///
/// Slots are numbered from 1. `save` overwrites unconditionally; callers
/// that want to confirm an overwrite check [`SaveRepository::is_occupied`]
/// first.
pub trait SaveRepository: Send + Sync {
    /// Save a record into a slot
    fn save(&self, slot: u32, record: &SaveRecord) -> Result<()>;

    /// Load the record in a slot
    ///
    /// An empty or never-written slot is `RepositoryError::MissingOrEmpty`.
    fn load(&self, slot: u32) -> Result<SaveRecord>;

    /// Check whether a slot holds any save data
    fn is_occupied(&self, slot: u32) -> bool;

    /// Delete a slot's data; deleting an empty slot is not an error
    fn delete(&self, slot: u32) -> Result<()>;

    /// List occupied slots in ascending order
    fn list_slots(&self) -> Result<Vec<u32>>;

    /// Number of slots this repository offers
    fn slot_count(&self) -> u32;
}
