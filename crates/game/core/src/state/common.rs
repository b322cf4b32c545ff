use std::fmt;

use crate::config::PetConfig;

/// Cosmetic variant of the pet (selects its artwork).
///
/// The rules never look at the value; it only travels with the save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetId(pub u32);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pet#{}", self.0)
    }
}

/// The four bounded vitals.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Health,
    Hunger,
    Sleep,
    Happiness,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Health, Stat::Hunger, Stat::Sleep, Stat::Happiness];

    /// Clamps a raw value into the stat range.
    #[inline]
    pub fn clamp(value: i32) -> u8 {
        value.clamp(PetConfig::STAT_MIN as i32, PetConfig::STAT_MAX as i32) as u8
    }
}
