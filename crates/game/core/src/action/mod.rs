//! Player actions and their validation pipeline.
//!
//! Each action kind implements [`ActionTransition`]; [`Action`] is the closed
//! set callers pass around, and [`Action::execute`] runs the
//! pre-validate / apply / post-validate sequence on a state value.
mod error;
mod kind;
mod transition;

pub use error::ActionError;
pub use kind::ActionKind;
pub use transition::{ActionTransition, FeedAction, PlayAction, SleepAction, VetAction};

use crate::config::PetConfig;
use crate::engine::StatDelta;
use crate::state::PetState;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Feed(FeedAction),
    GoToSleep(SleepAction),
    Play(PlayAction),
    TakeToVet(VetAction),
}

impl Action {
    pub fn feed() -> Self {
        Self::Feed(FeedAction)
    }

    pub fn sleep() -> Self {
        Self::GoToSleep(SleepAction)
    }

    pub fn vet() -> Self {
        Self::TakeToVet(VetAction)
    }

    pub fn play(delta: StatDelta, score: i64) -> Self {
        Self::Play(PlayAction::new(delta, score))
    }

    /// Builds the parameterless form of `kind`; play gets a zero delta.
    pub fn from_kind(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Feed => Self::feed(),
            ActionKind::GoToSleep => Self::sleep(),
            ActionKind::Play => Self::play(StatDelta::ZERO, 0),
            ActionKind::TakeToVet => Self::vet(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Feed(action) => action.kind(),
            Self::GoToSleep(action) => action.kind(),
            Self::Play(action) => action.kind(),
            Self::TakeToVet(action) => action.kind(),
        }
    }

    /// Runs the action against `state`, returning the next state.
    ///
    /// `state` is left untouched on error.
    pub fn execute(&self, state: &PetState, config: &PetConfig) -> Result<PetState, ActionError> {
        match self {
            Self::Feed(action) => run(action, state, config),
            Self::GoToSleep(action) => run(action, state, config),
            Self::Play(action) => run(action, state, config),
            Self::TakeToVet(action) => run(action, state, config),
        }
    }
}

fn run<T>(action: &T, state: &PetState, config: &PetConfig) -> Result<PetState, ActionError>
where
    T: ActionTransition<Error = ActionError>,
{
    action.pre_validate(state, config)?;
    let mut next = state.clone();
    action.apply(&mut next, config)?;
    action.post_validate(&next, config)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::PetId;

    #[test]
    fn completed_actions_award_score() {
        let config = PetConfig::default();
        let mut state = PetState::new_game(PetId(2));

        for kind in [ActionKind::Feed, ActionKind::GoToSleep, ActionKind::TakeToVet] {
            state = Action::from_kind(kind).execute(&state, &config).unwrap();
        }
        assert_eq!(state.score, 60);
        assert_eq!(state.pet_id, PetId(2));
    }

    #[test]
    fn dead_pet_rejects_every_action() {
        let config = PetConfig::default();
        let state = PetState::new(40, 50, 0, 50, 50, PetId(0));

        for kind in ActionKind::ALL {
            let err = Action::from_kind(kind).execute(&state, &config).unwrap_err();
            assert_eq!(err, ActionError::PetDead { kind });
            assert_eq!(err.severity(), ErrorSeverity::Validation);
        }
    }

    #[test]
    fn feed_scenario() {
        let state = PetState::new(0, 5, 10, 0, 95, PetId(0));
        let next = Action::feed().execute(&state, &PetConfig::default()).unwrap();

        assert_eq!(next.hunger, 100);
        assert_eq!(next.sleep, 0);
        assert_eq!(next.happiness, 7);
        assert_eq!(next.health, 8);
        assert_eq!(next.score, 20);
    }

    #[test]
    fn action_can_kill() {
        let state = PetState::new(0, 1, 8, 50, 50, PetId(0));
        let next = Action::sleep().execute(&state, &PetConfig::default()).unwrap();
        assert!(next.is_dead());
    }

    #[test]
    fn custom_action_score() {
        let config = PetConfig::with_action_score(5);
        let next = Action::vet()
            .execute(&PetState::default(), &config)
            .unwrap();
        assert_eq!(next.score, 5);
    }
}
