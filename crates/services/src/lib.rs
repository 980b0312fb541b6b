#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{ErrorKind, SessionError, StateError};
pub use quiz::{
    Advance, AnswerRecord, QuestionView, QuizProgress, QuizSession, ReviewItem, SubmitOutcome,
};
