use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of options a multiple-choice question must offer.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt must not be empty")]
    BlankPrompt,

    #[error("question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} must not be empty")]
    BlankOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question record as it appears in a question bank file.
///
/// Accepts the legacy field names (`question`, `correct`, `caselaw`) next to
/// the canonical ones so older banks load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correct")]
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default, alias = "caselaw")]
    pub reference: String,
}

impl QuestionDraft {
    /// Check structural invariants and freeze the record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, fewer than
    /// [`MIN_OPTIONS`] options are given, or `correct_index` does not point at
    /// an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::BlankPrompt);
        }

        let len = self.options.len();
        if len < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions { len });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if self.correct_index >= len {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len,
            });
        }

        Ok(Question {
            title: self.title.trim().to_string(),
            prompt: self.prompt,
            options: self.options,
            correct_index: self.correct_index,
            explanation: self.explanation,
            hint: self.hint,
            reference: self.reference,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    title: String,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
    hint: String,
    reference: String,
}

impl Question {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        // validate() guarantees correct_index < options.len()
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            title: "  Theft vs. Breach of Trust ".into(),
            prompt: "Which section applies?".into(),
            options: vec!["378".into(), "408".into(), "405".into()],
            correct_index: 1,
            explanation: "Entrusted as a servant.".into(),
            hint: "Look at 405-409.".into(),
            reference: "Jaswant Singh".into(),
        }
    }

    #[test]
    fn valid_draft_builds_question() {
        let q = draft().validate().unwrap();
        assert_eq!(q.title(), "Theft vs. Breach of Trust");
        assert_eq!(q.option_count(), 3);
        assert_eq!(q.correct_option(), "408");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let mut d = draft();
        d.prompt = "   ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::BlankPrompt);
    }

    #[test]
    fn single_option_is_rejected() {
        let mut d = draft();
        d.options.truncate(1);
        d.correct_index = 0;
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::TooFewOptions { len: 1 }
        );
    }

    #[test]
    fn blank_option_is_rejected() {
        let mut d = draft();
        d.options[2] = String::new();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::BlankOption { index: 2 }
        );
    }

    #[test]
    fn correct_index_must_point_at_an_option() {
        let mut d = draft();
        d.correct_index = 3;
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::CorrectIndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn legacy_field_names_deserialize() {
        let raw = r#"{
            "title": "Culpable Homicide",
            "question": "What is the charge?",
            "options": ["300", "304"],
            "correct": 1,
            "caselaw": "Reg vs. Govinda"
        }"#;
        let d: QuestionDraft = serde_json::from_str(raw).unwrap();
        assert_eq!(d.prompt, "What is the charge?");
        assert_eq!(d.correct_index, 1);
        assert_eq!(d.reference, "Reg vs. Govinda");
        assert!(d.hint.is_empty());
    }
}
