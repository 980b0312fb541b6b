use chrono::{DateTime, Duration, Utc};
use std::fmt;

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionBank, QuestionDraft, QuizSummary};

use crate::error::{SessionError, StateError};
use super::progress::QuizProgress;
use super::state::{AnswerRecord, SessionState, Step};
use super::view::{Advance, QuestionView, ReviewItem, SubmitOutcome};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

enum Phase {
    NotStarted,
    InProgress(SessionState),
    Finished {
        state: SessionState,
        summary: QuizSummary,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::InProgress(_) => "in_progress",
            Phase::Finished { .. } => "finished",
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Single-attempt quiz controller.
///
/// Walks a fixed question bank in order: the user selects an option, submits
/// it, and may then move on. Answers are locked once submitted, so navigating
/// back and forth shows the recorded outcome and never scores a question
/// twice. Every rejected event leaves the session exactly as it was.
pub struct QuizSession {
    clock: Clock,
    phase: Phase,
}

impl QuizSession {
    /// A session that has not been started, timed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Clock::default_clock())
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            phase: Phase::NotStarted,
        }
    }

    /// Mutable access to the session clock, e.g. to advance a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Start a fresh attempt over `questions`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if `questions` is empty. The
    /// session keeps its previous state in that case.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        let bank = QuestionBank::new(questions)
            .inspect_err(|err| log::debug!("quiz start rejected: {err}"))?;
        self.start_bank(bank);
        Ok(())
    }

    /// Start from unvalidated records.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if the bank is empty or any
    /// record violates the question invariants.
    pub fn start_drafts(&mut self, drafts: Vec<QuestionDraft>) -> Result<(), SessionError> {
        let bank = QuestionBank::from_drafts(drafts)
            .inspect_err(|err| log::debug!("quiz start rejected: {err}"))?;
        self.start_bank(bank);
        Ok(())
    }

    /// Start from an already validated bank. Cannot fail.
    pub fn start_bank(&mut self, bank: QuestionBank) {
        let started_at = self.clock.now();
        log::info!("quiz started: {} questions", bank.len());
        self.phase = Phase::InProgress(SessionState::new(bank, started_at));
    }

    /// Discard the current attempt and return to the not-started state.
    pub fn restart(&mut self) {
        log::info!("quiz restarted from {}", self.phase.name());
        self.phase = Phase::NotStarted;
    }

    /// Tentatively choose option `index` of the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if the question is already
    /// answered, `index` is out of range, or no attempt is in progress.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        let state = self.in_progress_mut()?;
        state
            .select(index)
            .inspect_err(|err| log::debug!("select {index} rejected: {err}"))?;
        log::debug!(
            "question {} selected option {index}",
            state.current_index() + 1
        );
        Ok(())
    }

    /// Lock in the selected option and score it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if nothing is selected, the
    /// question is already answered, or no attempt is in progress.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let state = self.in_progress_mut()?;
        let outcome = state
            .submit()
            .inspect_err(|err| log::debug!("submit rejected: {err}"))?;
        log::debug!(
            "question {} answered: option {} ({}), score {}",
            outcome.question_index + 1,
            outcome.selected,
            if outcome.is_correct { "correct" } else { "incorrect" },
            outcome.score
        );
        Ok(outcome)
    }

    /// Move to the next question, or finish the quiz from the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if the current question has not
    /// been answered or no attempt is in progress.
    pub fn go_next(&mut self) -> Result<Advance, SessionError> {
        let state = self.in_progress_mut()?;
        let step = state
            .next()
            .inspect_err(|err| log::debug!("next rejected: {err}"))?;

        match step {
            Step::Moved(index) => {
                log::debug!("moved to question {}", index + 1);
                Ok(Advance::Moved { index })
            }
            Step::PastLast => self.finish().map(Advance::Finished),
        }
    }

    /// Move back to the previous question, showing its recorded answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` at the first question or when no
    /// attempt is in progress.
    pub fn go_previous(&mut self) -> Result<usize, SessionError> {
        let state = self.in_progress_mut()?;
        let index = state
            .previous()
            .inspect_err(|err| log::debug!("previous rejected: {err}"))?;
        log::debug!("moved back to question {}", index + 1);
        Ok(index)
    }

    fn finish(&mut self) -> Result<QuizSummary, SessionError> {
        let summary = {
            let Phase::InProgress(state) = &self.phase else {
                return Err(StateError::NotStarted.into());
            };
            let started_at = state.started_at();
            let completed_at = self.clock.now().max(started_at);
            let total = u32::try_from(state.total()).unwrap_or(u32::MAX);
            QuizSummary::new(started_at, completed_at, state.score(), total)?
        };

        self.phase = match std::mem::replace(&mut self.phase, Phase::NotStarted) {
            Phase::InProgress(state) => Phase::Finished {
                state,
                summary: summary.clone(),
            },
            other => other,
        };
        log::info!(
            "quiz finished: {}/{} ({}%) in {}s",
            summary.score(),
            summary.total(),
            summary.percentage(),
            summary.elapsed().num_seconds()
        );
        Ok(summary)
    }

    fn in_progress_mut(&mut self) -> Result<&mut SessionState, SessionError> {
        match &mut self.phase {
            Phase::InProgress(state) => Ok(state),
            Phase::NotStarted => Err(StateError::NotStarted.into()),
            Phase::Finished { .. } => Err(StateError::Finished.into()),
        }
    }

    fn state(&self) -> Option<&SessionState> {
        match &self.phase {
            Phase::NotStarted => None,
            Phase::InProgress(state) | Phase::Finished { state, .. } => Some(state),
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn is_started(&self) -> bool {
        !matches!(self.phase, Phase::NotStarted)
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// The active question; `None` before start and after finishing.
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView<'_>> {
        match &self.phase {
            Phase::InProgress(state) => Some(state.view()),
            _ => None,
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.current_question().is_some_and(|view| view.can_submit)
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        match &self.phase {
            Phase::InProgress(state) => Some(state.progress()),
            _ => None,
        }
    }

    /// Correct answers so far, or the final score once finished.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state().map_or(0, SessionState::score)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.state().map_or(0, SessionState::answered_count)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.state().map_or(0, SessionState::total)
    }

    /// Per-question answer records, indexed like the bank.
    #[must_use]
    pub fn results(&self) -> &[Option<AnswerRecord>] {
        match self.state() {
            Some(state) => state.results(),
            None => &[],
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.state().map(SessionState::started_at)
    }

    /// Time spent on the attempt. Zero before start, frozen once finished.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match &self.phase {
            Phase::NotStarted => Duration::zero(),
            Phase::InProgress(state) => self.clock.since(state.started_at()),
            Phase::Finished { summary, .. } => summary.elapsed(),
        }
    }

    /// Question-by-question breakdown of a finished attempt; empty otherwise.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        match &self.phase {
            Phase::Finished { state, .. } => state.review(),
            _ => Vec::new(),
        }
    }

    /// Final score snapshot; only available once finished.
    #[must_use]
    pub fn final_summary(&self) -> Option<&QuizSummary> {
        match &self.phase {
            Phase::Finished { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase.name())
            .field("current", &self.state().map(SessionState::current_index))
            .field("total", &self.total_questions())
            .field("score", &self.score())
            .field("started_at", &self.started_at())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
