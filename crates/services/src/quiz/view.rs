use quiz_core::model::{Question, QuizSummary};

/// Read-only snapshot of the active question for a display layer.
///
/// Borrowed from the session; take a fresh one after every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// Zero-based position in the bank.
    pub index: usize,
    pub question: &'a Question,
    pub selected_option: Option<usize>,
    pub answered: bool,
    pub can_submit: bool,
    /// Only known once the question is answered.
    pub is_correct: Option<bool>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Advancing from the last question finishes the quiz.
    pub is_last: bool,
}

/// What the user sees right after locking in an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub question_index: usize,
    pub selected: usize,
    pub correct_index: usize,
    pub correct_option: String,
    pub is_correct: bool,
    pub explanation: String,
    pub reference: String,
    pub score: u32,
}

/// One question of the post-quiz review: what was chosen against the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub index: usize,
    pub title: String,
    pub prompt: String,
    pub selected: Option<usize>,
    pub selected_option: Option<String>,
    pub correct_index: usize,
    pub correct_option: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Result of a successful `go_next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved { index: usize },
    Finished(QuizSummary),
}

impl Advance {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Advance::Finished(_))
    }
}
