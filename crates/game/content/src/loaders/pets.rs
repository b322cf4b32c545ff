//! Starter pet roster loader.

use std::fmt;
use std::path::Path;

use arrayvec::ArrayVec;

use crate::ConfigDocument;
use crate::loaders::{LoadResult, load_document};

const NAME_KEY: &str = "petName";
const DESCRIPTION_KEY: &str = "petDescription";
const UNKNOWN: &str = "Unknown";
const ROSTER_SIZE: usize = 3;
const DEFAULT_NAMES: [&str; ROSTER_SIZE] = ["Luka", "Anthony", "Sam"];

/// One adoptable pet as presented on the selection screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetProfile {
    pub name: String,
    pub description: String,
}

impl PetProfile {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for PetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// The three pets offered at the start of a new game.
///
/// Index `i` corresponds to pet id `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetRoster {
    pets: ArrayVec<PetProfile, ROSTER_SIZE>,
}

impl PetRoster {
    pub const CAPACITY: usize = ROSTER_SIZE;

    /// Roster used when there is no configuration to read.
    pub fn defaults() -> Self {
        let pets = DEFAULT_NAMES
            .iter()
            .map(|name| PetProfile::new(*name, format!("Default description for {name}")))
            .collect();
        Self { pets }
    }

    /// Reads names and descriptions by position; absent entries read as "Unknown".
    pub fn from_document(document: &ConfigDocument) -> Self {
        let read = |key: &str, index: usize| {
            document
                .array_element(key, index)
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        let pets = (0..Self::CAPACITY)
            .map(|index| PetProfile::new(read(NAME_KEY, index), read(DESCRIPTION_KEY, index)))
            .collect();
        Self { pets }
    }

    /// Load the roster from a configuration file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        Ok(Self::from_document(&load_document(path)?))
    }

    pub fn get(&self, index: usize) -> Option<&PetProfile> {
        self.pets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PetProfile> {
        self.pets.iter()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for PetRoster {
    fn default() -> Self {
        Self::defaults()
    }
}
