//! Signed stat adjustments and the clamp-then-penalize rule shared by every
//! action transition.

use crate::config::PetConfig;
use crate::state::{PetState, Stat};

/// Signed change applied to each vital in a single transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub happiness: i32,
    pub health: i32,
    pub sleep: i32,
    pub hunger: i32,
}

impl StatDelta {
    pub const ZERO: Self = Self {
        happiness: 0,
        health: 0,
        sleep: 0,
        hunger: 0,
    };

    pub const fn new(happiness: i32, health: i32, sleep: i32, hunger: i32) -> Self {
        Self {
            happiness,
            health,
            sleep,
            hunger,
        }
    }

    /// Returns the component for a single stat.
    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Health => self.health,
            Stat::Hunger => self.hunger,
            Stat::Sleep => self.sleep,
            Stat::Happiness => self.happiness,
        }
    }
}

/// Vitals after their primary adjustment, before the neglect check.
///
/// Values are already clamped into bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Adjusted {
    pub happiness: u8,
    pub health: u8,
    pub sleep: u8,
    pub hunger: u8,
}

impl Adjusted {
    /// Clamps `state + delta` component-wise.
    pub fn from_delta(state: &PetState, delta: StatDelta) -> Self {
        Self {
            happiness: Stat::clamp(state.happiness as i32 + delta.happiness),
            health: Stat::clamp(state.health as i32 + delta.health),
            sleep: Stat::clamp(state.sleep as i32 + delta.sleep),
            hunger: Stat::clamp(state.hunger as i32 + delta.hunger),
        }
    }

    /// Applies the neglect penalty and writes the result into a copy of `state`.
    ///
    /// When any of hunger, sleep or happiness has bottomed out, health loses
    /// an extra `NEGLECT_PENALTY`, floored at zero.
    pub fn settle(self, state: &PetState) -> PetState {
        let neglected = self.hunger == 0 || self.sleep == 0 || self.happiness == 0;
        let health = if neglected {
            Stat::clamp(self.health as i32 - PetConfig::NEGLECT_PENALTY)
        } else {
            self.health
        };

        PetState {
            score: state.score,
            health,
            hunger: self.hunger,
            sleep: self.sleep,
            happiness: self.happiness,
            pet_id: state.pet_id,
        }
    }
}
