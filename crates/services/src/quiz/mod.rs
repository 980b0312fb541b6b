mod progress;
mod service;
mod state;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::QuizSession;
pub use state::AnswerRecord;
pub use view::{Advance, QuestionView, ReviewItem, SubmitOutcome};
