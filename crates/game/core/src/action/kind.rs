//! Action kind enumeration.

use crate::inventory::ItemCategory;

/// The four things a player can do to their pet.
///
/// String forms are the configuration keys (`feed`, `goToSleep`, `play`,
/// `takeToVet`) and parse case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ActionKind {
    #[strum(serialize = "feed")]
    Feed,

    #[strum(serialize = "goToSleep")]
    GoToSleep,

    /// Minigame; its stat changes are supplied by the caller.
    #[strum(serialize = "play")]
    Play,

    #[strum(serialize = "takeToVet")]
    TakeToVet,
}

impl ActionKind {
    pub const COUNT: usize = 4;

    pub const ALL: [ActionKind; Self::COUNT] = [
        ActionKind::Feed,
        ActionKind::GoToSleep,
        ActionKind::Play,
        ActionKind::TakeToVet,
    ];

    /// Catalog section a reward is drawn from when the pet comes home.
    pub const fn reward_category(self) -> Option<ItemCategory> {
        match self {
            ActionKind::Feed | ActionKind::GoToSleep => Some(ItemCategory::Food),
            ActionKind::TakeToVet => Some(ItemCategory::Gift),
            ActionKind::Play => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_configuration_keys() {
        let names: Vec<String> = ActionKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["feed", "goToSleep", "play", "takeToVet"]);
        assert_eq!("TAKETOVET".parse::<ActionKind>(), Ok(ActionKind::TakeToVet));
        assert!("walk".parse::<ActionKind>().is_err());
    }

    #[test]
    fn reward_routing() {
        assert_eq!(ActionKind::Feed.reward_category(), Some(ItemCategory::Food));
        assert_eq!(ActionKind::GoToSleep.reward_category(), Some(ItemCategory::Food));
        assert_eq!(ActionKind::TakeToVet.reward_category(), Some(ItemCategory::Gift));
        assert_eq!(ActionKind::Play.reward_category(), None);
    }
}
