use pet_core::{ActionError, ErrorSeverity, GameError};

use crate::repository::RepositoryError;

/// Errors surfaced by [`crate::Session`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(err) => err.severity(),
            Self::Repository(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
