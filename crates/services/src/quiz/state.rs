use chrono::{DateTime, Utc};

use quiz_core::model::{Question, QuestionBank};

use crate::error::StateError;
use super::progress::QuizProgress;
use super::view::{QuestionView, ReviewItem, SubmitOutcome};

/// Locked-in answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected: usize,
    pub is_correct: bool,
}

/// Outcome of stepping forward inside a running attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Moved(usize),
    PastLast,
}

/// Mutable state of one quiz attempt.
///
/// `current < bank.len()` always holds; `selected`/`answered` always describe
/// the question at `current`.
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    bank: QuestionBank,
    current: usize,
    selected: Option<usize>,
    answered: bool,
    score: u32,
    started_at: DateTime<Utc>,
    results: Vec<Option<AnswerRecord>>,
}

impl SessionState {
    pub(crate) fn new(bank: QuestionBank, started_at: DateTime<Utc>) -> Self {
        let results = vec![None; bank.len()];
        Self {
            bank,
            current: 0,
            selected: None,
            answered: false,
            score: 0,
            started_at,
            results,
        }
    }

    pub(crate) fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn total(&self) -> usize {
        self.bank.len()
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn results(&self) -> &[Option<AnswerRecord>] {
        &self.results
    }

    pub(crate) fn answered_count(&self) -> usize {
        self.results.iter().flatten().count()
    }

    pub(crate) fn review(&self) -> Vec<ReviewItem> {
        self.bank
            .iter()
            .zip(&self.results)
            .enumerate()
            .map(|(index, (question, &record))| {
                let selected = record.map(|r| r.selected);
                ReviewItem {
                    index,
                    title: question.title().to_string(),
                    prompt: question.prompt().to_string(),
                    selected,
                    selected_option: selected
                        .and_then(|i| question.options().get(i))
                        .cloned(),
                    correct_index: question.correct_index(),
                    correct_option: question.correct_option().to_string(),
                    is_correct: record.is_some_and(|r| r.is_correct),
                    explanation: question.explanation().to_string(),
                }
            })
            .collect()
    }

    fn is_last(&self) -> bool {
        self.current + 1 == self.bank.len()
    }

    pub(crate) fn current_question(&self) -> &Question {
        &self.bank.questions()[self.current]
    }

    pub(crate) fn view(&self) -> QuestionView<'_> {
        QuestionView {
            index: self.current,
            question: self.current_question(),
            selected_option: self.selected,
            answered: self.answered,
            can_submit: self.selected.is_some() && !self.answered,
            is_correct: self.results[self.current].map(|r| r.is_correct),
            can_go_previous: self.current > 0,
            can_go_next: self.answered,
            is_last: self.is_last(),
        }
    }

    pub(crate) fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.current + 1,
            total: self.bank.len(),
            answered: self.answered_count(),
        }
    }

    pub(crate) fn select(&mut self, index: usize) -> Result<(), StateError> {
        if self.answered {
            return Err(StateError::AlreadyAnswered);
        }
        let len = self.current_question().option_count();
        if index >= len {
            return Err(StateError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub(crate) fn submit(&mut self) -> Result<SubmitOutcome, StateError> {
        if self.answered {
            return Err(StateError::AlreadyAnswered);
        }
        let Some(selected) = self.selected else {
            return Err(StateError::NothingSelected);
        };

        let question = self.current_question();
        let is_correct = question.is_correct(selected);
        let correct_index = question.correct_index();
        let correct_option = question.correct_option().to_string();
        let explanation = question.explanation().to_string();
        let reference = question.reference().to_string();

        self.answered = true;
        self.results[self.current] = Some(AnswerRecord {
            selected,
            is_correct,
        });
        if is_correct {
            self.score = self.score.saturating_add(1);
        }

        Ok(SubmitOutcome {
            question_index: self.current,
            selected,
            correct_index,
            correct_option,
            is_correct,
            explanation,
            reference,
            score: self.score,
        })
    }

    pub(crate) fn next(&mut self) -> Result<Step, StateError> {
        if !self.answered {
            return Err(StateError::Unanswered);
        }
        if self.is_last() {
            return Ok(Step::PastLast);
        }
        self.enter(self.current + 1);
        Ok(Step::Moved(self.current))
    }

    pub(crate) fn previous(&mut self) -> Result<usize, StateError> {
        if self.current == 0 {
            return Err(StateError::AtFirstQuestion);
        }
        self.enter(self.current - 1);
        Ok(self.current)
    }

    /// Move to `index`, restoring whatever that question already resolved to.
    fn enter(&mut self, index: usize) {
        self.current = index;
        match self.results[index] {
            Some(record) => {
                self.selected = Some(record.selected);
                self.answered = true;
            }
            None => {
                self.selected = None;
                self.answered = false;
            }
        }
    }
}
