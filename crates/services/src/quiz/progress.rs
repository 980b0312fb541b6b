/// Position within the quiz, useful for "Question 3 of 10" and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
}

impl QuizProgress {
    /// Share of the quiz reached so far, in `(0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }

    #[must_use]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.position, self.total)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position == self.total
    }
}
