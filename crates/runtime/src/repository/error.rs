//! Error types raised by save repositories and the save codec.

use pet_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no save data at {location}")]
    MissingOrEmpty { location: String },

    #[error("corrupt save at {location}, line {line}: {reason}")]
    Corrupt {
        location: String,
        line: usize,
        reason: String,
    },

    #[error("save slot {slot} is outside 1..={max}")]
    InvalidSlot { slot: u32, max: u32 },
}

impl RepositoryError {
    pub(crate) fn from_decode(err: DecodeError, location: impl Into<String>) -> Self {
        let location = location.into();
        match err {
            DecodeError::Empty => Self::MissingOrEmpty { location },
            DecodeError::MissingLine { line } => Self::Corrupt {
                location,
                line,
                reason: "expected six numeric header lines".to_string(),
            },
            DecodeError::Invalid {
                line,
                value,
                expected,
            } => Self::Corrupt {
                location,
                line,
                reason: format!("{value:?} is not {expected}"),
            },
        }
    }
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOrEmpty { .. } | Self::Io(_) => ErrorSeverity::Recoverable,
            Self::Corrupt { .. } | Self::InvalidSlot { .. } => ErrorSeverity::Validation,
            Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPO_LOCK_POISONED",
            Self::Io(_) => "REPO_IO",
            Self::MissingOrEmpty { .. } => "REPO_MISSING_OR_EMPTY",
            Self::Corrupt { .. } => "REPO_CORRUPT",
            Self::InvalidSlot { .. } => "REPO_INVALID_SLOT",
        }
    }
}

/// Reasons save text could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("save text is empty")]
    Empty,

    #[error("line {line}: missing header value")]
    MissingLine { line: usize },

    #[error("line {line}: {value:?} is not {expected}")]
    Invalid {
        line: usize,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
