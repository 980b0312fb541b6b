use serde::Deserialize;
use thiserror::Error;

use super::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("question {} is invalid: {source}", .index + 1)]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepted top-level shapes for a JSON bank.
#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    List(Vec<QuestionDraft>),
    Wrapped { questions: Vec<QuestionDraft> },
}

/// Ordered, non-empty set of questions fixed for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// Validate every draft in order, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Question` carrying the zero-based position of the
    /// first invalid draft, or `BankError::Empty`.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Parse a bank from JSON: either a bare array of questions or an object
    /// with a `questions` array.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` for malformed input, otherwise the errors of
    /// [`QuestionBank::from_drafts`].
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let drafts = match serde_json::from_str::<BankFile>(raw)? {
            BankFile::List(drafts) | BankFile::Wrapped { questions: drafts } => drafts,
        };
        Self::from_drafts(drafts)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<QuestionDraft>> for QuestionBank {
    type Error = BankError;

    fn try_from(drafts: Vec<QuestionDraft>) -> Result<Self, Self::Error> {
        Self::from_drafts(drafts)
    }
}
