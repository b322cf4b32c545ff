//! Per-action cooldown durations.

use crate::action::ActionKind;
use crate::config::PetConfig;

/// Cooldown seconds for each action kind.
///
/// Every lookup yields a value; kinds that were never configured and
/// unrecognized names both read as [`PetConfig::DEFAULT_COOLDOWN_SECS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownTable {
    seconds: [u32; ActionKind::COUNT],
}

impl CooldownTable {
    /// Table with every action at the default duration.
    pub const fn uniform(seconds: u32) -> Self {
        Self {
            seconds: [seconds; ActionKind::COUNT],
        }
    }

    /// Builds a table from explicit entries; kinds not listed keep the default.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ActionKind, u32)>) -> Self {
        let mut table = Self::default();
        for (kind, seconds) in pairs {
            table.set(kind, seconds);
        }
        table
    }

    pub fn set(&mut self, kind: ActionKind, seconds: u32) {
        self.seconds[kind.index()] = seconds;
    }

    pub fn for_kind(&self, kind: ActionKind) -> u32 {
        self.seconds[kind.index()]
    }

    /// Looks up by canonical action name (`feed`, `goToSleep`, ...).
    pub fn get(&self, action_name: &str) -> u32 {
        action_name
            .parse::<ActionKind>()
            .map_or(PetConfig::DEFAULT_COOLDOWN_SECS, |kind| self.for_kind(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, u32)> + '_ {
        ActionKind::ALL
            .iter()
            .map(|&kind| (kind, self.for_kind(kind)))
    }
}

impl Default for CooldownTable {
    fn default() -> Self {
        Self::uniform(PetConfig::DEFAULT_COOLDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back() {
        let table = CooldownTable::from_pairs([(ActionKind::Feed, 8)]);
        assert_eq!(table.get("feed"), 8);
        assert_eq!(table.get("takeToVet"), 5);
        assert_eq!(table.get("dance"), 5);
        assert_eq!(table.get(""), 5);
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        let table = CooldownTable::from_pairs([(ActionKind::GoToSleep, 12)]);
        assert_eq!(table.get("gotosleep"), 12);
        assert_eq!(table.get("goToSleep"), 12);
    }

    #[test]
    fn iter_covers_every_kind() {
        let table = CooldownTable::default();
        let kinds: Vec<_> = table.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ActionKind::ALL.to_vec());
        assert!(table.iter().all(|(_, secs)| secs == 5));
    }
}
