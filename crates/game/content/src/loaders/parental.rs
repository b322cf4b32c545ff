//! Parental control settings.

use std::path::Path;

use crate::ConfigDocument;
use crate::loaders::{LoadResult, load_document};

/// Password and playtime limits managed from the parental screen.
///
/// Playtime values are minutes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentalSettings {
    pub parent_password: Option<String>,
    pub total_play_time: u32,
    pub average_play_time: u32,
    pub reset_play_time: u32,
    pub pet_revival: bool,
}

impl ParentalSettings {
    /// Reads the five parental keys; unreadable values keep their defaults.
    pub fn from_document(document: &ConfigDocument) -> Self {
        let minutes = |key: &str| {
            let raw = document.scalar(key)?;
            match raw.trim().parse::<u32>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::debug!(key, value = %raw, "ignoring non-numeric playtime");
                    None
                }
            }
        };

        Self {
            parent_password: document.scalar("parentPassword"),
            total_play_time: minutes("totalPlayTime").unwrap_or_default(),
            average_play_time: minutes("averagePlayTime").unwrap_or_default(),
            reset_play_time: minutes("resetPlayTime").unwrap_or_default(),
            pet_revival: document
                .scalar("petRevival")
                .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true")),
        }
    }

    /// Load parental settings from a configuration file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        Ok(Self::from_document(&load_document(path)?))
    }

    /// True when a password is configured and `entered` matches it exactly.
    pub fn verify_password(&self, entered: &str) -> bool {
        self.parent_password
            .as_deref()
            .is_some_and(|password| password == entered)
    }

    /// Adds a finished session's minutes to the running totals.
    ///
    /// The average tracks the total; there is no session count to divide by.
    pub fn record_playtime(&mut self, minutes: u32) {
        self.total_play_time = self.total_play_time.saturating_add(minutes);
        self.average_play_time = self.total_play_time;
    }
}
