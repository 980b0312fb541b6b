use std::fmt;

use thiserror::Error;

/// Performance category of a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Performance {
    Excellent,
    Good,
    KeepStudying,
}

impl Performance {
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent!",
            Performance::Good => "Good Job!",
            Performance::KeepStudying => "Keep Studying!",
        }
    }

    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Performance::Excellent => "You have a strong understanding of the material.",
            Performance::Good => {
                "Solid foundation. Review the questions you missed to strengthen your knowledge."
            }
            Performance::KeepStudying => {
                "You need more practice. Focus on the core principles and revisit the explanations."
            }
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreBandsError {
    #[error("threshold {0}% is above 100%")]
    OutOfRange(u32),
    #[error("good threshold ({good_at}%) is above excellent threshold ({excellent_at}%)")]
    Inverted { good_at: u32, excellent_at: u32 },
}

/// Percentage thresholds used to classify a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBands {
    excellent_at: u32,
    good_at: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBandsDraft {
    pub excellent_at: Option<u32>,
    pub good_at: Option<u32>,
}

impl ScoreBandsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset thresholds from the defaults and check ordering.
    ///
    /// # Errors
    ///
    /// Returns `ScoreBandsError` if a threshold is above 100 or `good_at`
    /// exceeds `excellent_at`.
    pub fn validate(self) -> Result<ScoreBands, ScoreBandsError> {
        let defaults = ScoreBands::default();
        let excellent_at = self.excellent_at.unwrap_or(defaults.excellent_at);
        let good_at = self.good_at.unwrap_or(defaults.good_at);

        for value in [excellent_at, good_at] {
            if value > 100 {
                return Err(ScoreBandsError::OutOfRange(value));
            }
        }
        if good_at > excellent_at {
            return Err(ScoreBandsError::Inverted {
                good_at,
                excellent_at,
            });
        }

        Ok(ScoreBands {
            excellent_at,
            good_at,
        })
    }
}

impl ScoreBands {
    #[must_use]
    pub fn excellent_at(&self) -> u32 {
        self.excellent_at
    }

    #[must_use]
    pub fn good_at(&self) -> u32 {
        self.good_at
    }

    #[must_use]
    pub fn classify(&self, percentage: u32) -> Performance {
        if percentage >= self.excellent_at {
            Performance::Excellent
        } else if percentage >= self.good_at {
            Performance::Good
        } else {
            Performance::KeepStudying
        }
    }
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            excellent_at: 80,
            good_at: 60,
        }
    }
}
