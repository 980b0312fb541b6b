mod bands;
mod bank;
mod question;
mod summary;

pub use bands::{Performance, ScoreBands, ScoreBandsDraft, ScoreBandsError};
pub use bank::{BankError, QuestionBank};
pub use question::{MIN_OPTIONS, Question, QuestionDraft, QuestionError};
pub use summary::{QuizSummary, SummaryError};
