//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Stat;

use super::ActionKind;

/// Errors that can occur while executing a pet action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Health is zero; the session is over.
    #[error("cannot {kind}: pet is dead")]
    PetDead { kind: ActionKind },

    /// A stat left `[0, 100]` after the transition.
    #[error("{kind} left {stat} at {value}, outside [0, 100]")]
    InvariantViolation {
        kind: ActionKind,
        stat: Stat,
        value: u8,
    },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PetDead { .. } => ErrorSeverity::Validation,
            Self::InvariantViolation { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PetDead { .. } => "ACTION_PET_DEAD",
            Self::InvariantViolation { .. } => "ACTION_INVARIANT_VIOLATION",
        }
    }
}
