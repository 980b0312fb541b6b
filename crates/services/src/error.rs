//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, SummaryError};

/// Broad classification of a rejected quiz event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidState,
}

/// Why a transition was illegal in the session's current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("quiz has not been started")]
    NotStarted,
    #[error("quiz is already finished")]
    Finished,
    #[error("question has already been answered")]
    AlreadyAnswered,
    #[error("no option selected")]
    NothingSelected,
    #[error("option {index} does not exist (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("answer the current question before moving on")]
    Unanswered,
    #[error("already at the first question")]
    AtFirstQuestion,
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid question bank: {0}")]
    InvalidInput(#[from] BankError),
    #[error(transparent)]
    InvalidState(#[from] StateError),
    /// The final summary could not be built. `finish` clamps the completion
    /// time to the start time and banks are never empty, so a session driven
    /// through its public events does not produce this.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl SessionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidInput(_) => ErrorKind::InvalidInput,
            SessionError::InvalidState(_) | SessionError::Summary(_) => ErrorKind::InvalidState,
        }
    }

    /// The rejected transition, if this is a state error.
    #[must_use]
    pub fn state(&self) -> Option<&StateError> {
        match self {
            SessionError::InvalidState(err) => Some(err),
            SessionError::InvalidInput(_) | SessionError::Summary(_) => None,
        }
    }
}
