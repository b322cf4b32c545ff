//! Cooldown table loader.

use std::path::Path;

use pet_core::{ActionKind, CooldownTable, PetConfig};

use crate::ConfigDocument;
use crate::loaders::{LoadResult, load_document};

const ACTIONS_KEY: &str = "availableActions";
const COOLDOWN_KEY: &str = "cooldown";

/// Loader for per-action cooldowns from the `availableActions` block.
///
/// Each action falls back to the default on its own: a missing entry,
/// a malformed object or a negative/non-numeric value only affects that
/// action.
pub struct CooldownLoader;

impl CooldownLoader {
    /// Load cooldowns from configuration text.
    pub fn from_text(text: &str) -> CooldownTable {
        Self::from_document(&ConfigDocument::parse(text))
    }

    /// Load cooldowns from a parsed document.
    pub fn from_document(document: &ConfigDocument) -> CooldownTable {
        match document.block(ACTIONS_KEY) {
            Some(actions) => Self::from_actions_block(&actions),
            None => {
                tracing::debug!("no {ACTIONS_KEY} block; using default cooldowns");
                CooldownTable::default()
            }
        }
    }

    /// Load cooldowns from the contents of an `availableActions` object.
    pub fn from_actions_block(actions: &ConfigDocument) -> CooldownTable {
        let mut table = CooldownTable::default();
        for kind in ActionKind::ALL {
            if let Some(seconds) = Self::read_cooldown(actions, kind) {
                table.set(kind, seconds);
            }
        }
        table
    }

    /// Load cooldowns from a file.
    pub fn load(path: &Path) -> LoadResult<CooldownTable> {
        Ok(Self::from_document(&load_document(path)?))
    }

    fn read_cooldown(actions: &ConfigDocument, kind: ActionKind) -> Option<u32> {
        let raw = actions.block(kind.as_ref())?.scalar(COOLDOWN_KEY)?;
        match raw.parse::<u32>() {
            Ok(seconds) => Some(seconds),
            Err(_) => {
                tracing::debug!(
                    action = %kind,
                    value = %raw,
                    fallback = PetConfig::DEFAULT_COOLDOWN_SECS,
                    "unusable cooldown"
                );
                None
            }
        }
    }
}
