use thiserror::Error;

use crate::model::{BankError, QuestionError, ScoreBandsError, SummaryError};

/// Umbrella error for callers that do not care which domain check failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    ScoreBands(#[from] ScoreBandsError),
}
