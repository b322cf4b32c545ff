//! Authoritative pet state representation.
//!
//! `PetState` is a plain value: transitions in [`crate::engine`] take a state
//! and return the next one. Runtime layers hold the current value and replace
//! it wholesale after every action.
mod common;

pub use common::{PetId, Stat};

use crate::config::PetConfig;

/// Canonical snapshot of one pet's condition.
///
/// Stats are kept in `[STAT_MIN, STAT_MAX]` by every constructor and
/// transition; the score is unbounded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetState {
    pub score: i64,
    pub health: u8,
    pub hunger: u8,
    pub sleep: u8,
    pub happiness: u8,
    pub pet_id: PetId,
}

impl PetState {
    /// Creates a state from raw values, clamping every stat into bounds.
    pub fn new(
        score: i64,
        happiness: i32,
        health: i32,
        sleep: i32,
        hunger: i32,
        pet_id: PetId,
    ) -> Self {
        Self {
            score,
            health: Stat::clamp(health),
            hunger: Stat::clamp(hunger),
            sleep: Stat::clamp(sleep),
            happiness: Stat::clamp(happiness),
            pet_id,
        }
    }

    /// Starting condition for a freshly adopted pet.
    pub fn new_game(pet_id: PetId) -> Self {
        Self {
            score: PetConfig::NEW_GAME_SCORE,
            health: PetConfig::NEW_GAME_HEALTH,
            hunger: PetConfig::NEW_GAME_HUNGER,
            sleep: PetConfig::NEW_GAME_SLEEP,
            happiness: PetConfig::NEW_GAME_HAPPINESS,
            pet_id,
        }
    }

    /// Reads a single stat.
    pub fn stat(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Health => self.health,
            Stat::Hunger => self.hunger,
            Stat::Sleep => self.sleep,
            Stat::Happiness => self.happiness,
        }
    }

    /// Returns true when every stat is within bounds.
    pub fn stats_in_bounds(&self) -> bool {
        Stat::ALL
            .iter()
            .all(|&stat| self.stat(stat) <= PetConfig::STAT_MAX)
    }

    /// Returns true once health has reached zero.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new_game(PetId::default())
    }
}
