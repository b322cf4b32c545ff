use crate::config::PetConfig;
use crate::engine::{self, StatDelta};
use crate::state::{PetState, Stat};

use super::{ActionError, ActionKind};

/// Defines how a concrete action mutates pet state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. Hooks only read
/// the state and config and must stay side-effect free.
pub trait ActionTransition {
    type Error;

    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations may assume `pre_validate` passed.
    fn apply(&self, state: &mut PetState, config: &PetConfig) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Feed the pet from its bowl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedAction;

/// Put the pet to bed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepAction;

/// Take the pet to the vet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VetAction;

/// Outcome of a minigame round, reported by the minigame itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayAction {
    pub delta: StatDelta,
    pub score: i64,
}

impl PlayAction {
    pub fn new(delta: StatDelta, score: i64) -> Self {
        Self { delta, score }
    }
}

impl ActionTransition for FeedAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Feed
    }

    fn pre_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_alive(state, self.kind())
    }

    fn apply(&self, state: &mut PetState, config: &PetConfig) -> Result<(), Self::Error> {
        *state = engine::add_score(&engine::apply_feed(state), config.action_score);
        Ok(())
    }

    fn post_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_in_bounds(state, self.kind())
    }
}

impl ActionTransition for SleepAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::GoToSleep
    }

    fn pre_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_alive(state, self.kind())
    }

    fn apply(&self, state: &mut PetState, config: &PetConfig) -> Result<(), Self::Error> {
        *state = engine::add_score(&engine::apply_sleep(state), config.action_score);
        Ok(())
    }

    fn post_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_in_bounds(state, self.kind())
    }
}

impl ActionTransition for VetAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::TakeToVet
    }

    fn pre_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_alive(state, self.kind())
    }

    fn apply(&self, state: &mut PetState, config: &PetConfig) -> Result<(), Self::Error> {
        *state = engine::add_score(&engine::apply_vet(state), config.action_score);
        Ok(())
    }

    fn post_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_in_bounds(state, self.kind())
    }
}

impl ActionTransition for PlayAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Play
    }

    fn pre_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_alive(state, self.kind())
    }

    fn apply(&self, state: &mut PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        *state = engine::add_score(&engine::apply_delta(state, self.delta), self.score);
        Ok(())
    }

    fn post_validate(&self, state: &PetState, _config: &PetConfig) -> Result<(), Self::Error> {
        ensure_in_bounds(state, self.kind())
    }
}

fn ensure_alive(state: &PetState, kind: ActionKind) -> Result<(), ActionError> {
    if state.is_dead() {
        return Err(ActionError::PetDead { kind });
    }
    Ok(())
}

fn ensure_in_bounds(state: &PetState, kind: ActionKind) -> Result<(), ActionError> {
    match Stat::ALL
        .into_iter()
        .find(|&stat| state.stat(stat) > PetConfig::STAT_MAX)
    {
        Some(stat) => Err(ActionError::InvariantViolation {
            kind,
            stat,
            value: state.stat(stat),
        }),
        None => Ok(()),
    }
}
