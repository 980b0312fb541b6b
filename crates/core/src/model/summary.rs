use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use super::bands::{Performance, ScoreBands};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds the number of questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("a quiz summary needs at least one question")]
    EmptyQuiz,
}

/// Final result of a finished quiz attempt. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    total: u32,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`,
    /// `SummaryError::EmptyQuiz` for a zero total, and
    /// `SummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: u32,
        total: u32,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(SummaryError::EmptyQuiz);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            started_at,
            completed_at,
            score,
            total,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Score as a whole percentage, halves rounded up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        let rounded = (score * 200 + total) / (total * 2);
        // score <= total keeps this at or below 100
        u32::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn performance(&self, bands: &ScoreBands) -> Performance {
        bands.classify(self.percentage())
    }

    /// `(score, total, percentage)`
    #[must_use]
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.score, self.total, self.percentage())
    }
}
