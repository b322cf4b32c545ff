//! File-based SaveRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::codec::{self, SaveRecord};
use super::error::{RepositoryError, Result};
use super::traits::SaveRepository;

/// Default number of save slots.
pub const DEFAULT_SLOT_COUNT: u32 = 3;

/// File-based implementation of SaveRepository.
///
/// Stores each slot as a plain-text file `save{slot}.txt` under `base_dir`.
pub struct FileSaveRepository {
    base_dir: PathBuf,
    slot_count: u32,
}

impl FileSaveRepository {
    /// Create a new file-based save repository with the default slot count.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_slots(base_dir, DEFAULT_SLOT_COUNT)
    }

    pub fn with_slots(base_dir: impl AsRef<Path>, slot_count: u32) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            slot_count,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a slot's file.
    pub fn slot_path(&self, slot: u32) -> Result<PathBuf> {
        if slot == 0 || slot > self.slot_count {
            return Err(RepositoryError::InvalidSlot {
                slot,
                max: self.slot_count,
            });
        }
        Ok(self.base_dir.join(format!("save{slot}.txt")))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: u32, record: &SaveRecord) -> Result<()> {
        write_save_file(&self.slot_path(slot)?, record)
    }

    fn load(&self, slot: u32) -> Result<SaveRecord> {
        read_save_file(&self.slot_path(slot)?)
    }

    fn is_occupied(&self, slot: u32) -> bool {
        self.slot_path(slot)
            .ok()
            .and_then(|path| fs::metadata(path).ok())
            .is_some_and(|meta| meta.is_file() && meta.len() > 0)
    }

    fn delete(&self, slot: u32) -> Result<()> {
        let path = self.slot_path(slot)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Deleted save slot {}", slot);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn list_slots(&self) -> Result<Vec<u32>> {
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot_str) = filename
                    .strip_prefix("save")
                    .and_then(|s| s.strip_suffix(".txt"))
                && let Ok(slot) = slot_str.parse::<u32>()
                && (1..=self.slot_count).contains(&slot)
                && self.is_occupied(slot)
            {
                slots.push(slot);
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }

    fn slot_count(&self) -> u32 {
        self.slot_count
    }
}

/// Writes a save file via a temp file and rename, so a crash mid-write never
/// leaves a truncated save behind.
pub fn write_save_file(path: &Path, record: &SaveRecord) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("txt.tmp");
    fs::write(&temp_path, codec::encode(record))?;
    fs::rename(&temp_path, path)?;

    tracing::debug!("Saved {} to {}", record.state.pet_id, path.display());
    Ok(())
}

/// Reads and decodes a save file. A missing file is `MissingOrEmpty`.
pub fn read_save_file(path: &Path) -> Result<SaveRecord> {
    let location = path.display().to_string();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(RepositoryError::MissingOrEmpty { location });
        }
        Err(err) => return Err(err.into()),
    };

    let record =
        codec::decode(&text).map_err(|err| RepositoryError::from_decode(err, location))?;

    tracing::debug!("Loaded {} from {}", record.state.pet_id, path.display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::{Inventory, ItemCatalog, PetId, PetState};

    fn record() -> SaveRecord {
        SaveRecord::new(
            PetState::new(60, 70, 80, 90, 50, PetId(1)),
            Inventory::starter(&ItemCatalog::standard()),
        )
    }

    #[test]
    fn slots_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        assert!(!repo.is_occupied(2));
        repo.save(2, &record()).unwrap();
        assert!(repo.is_occupied(2));
        assert!(dir.path().join("save2.txt").exists());
        assert!(!dir.path().join("save2.txt.tmp").exists());

        assert_eq!(repo.load(2).unwrap(), record());
        assert_eq!(repo.list_slots().unwrap(), vec![2]);

        repo.delete(2).unwrap();
        repo.delete(2).unwrap();
        assert!(repo.list_slots().unwrap().is_empty());
    }

    #[test]
    fn missing_and_empty_slots() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        assert!(matches!(repo.load(1), Err(RepositoryError::MissingOrEmpty { .. })));

        fs::write(dir.path().join("save1.txt"), "").unwrap();
        assert!(!repo.is_occupied(1));
        assert!(matches!(repo.load(1), Err(RepositoryError::MissingOrEmpty { .. })));
    }

    #[test]
    fn corrupt_slot_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        fs::write(dir.path().join("save3.txt"), "1\n2\n3\nx\n5\n6\n").unwrap();

        match repo.load(3) {
            Err(RepositoryError::Corrupt { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected corrupt save, got {other:?}"),
        }
    }

    #[test]
    fn slot_range_is_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        assert!(matches!(
            repo.save(4, &record()),
            Err(RepositoryError::InvalidSlot { slot: 4, max: 3 })
        ));
        assert!(matches!(repo.load(0), Err(RepositoryError::InvalidSlot { .. })));
        assert!(!repo.is_occupied(9));
    }
}
