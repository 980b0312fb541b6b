use std::io::{self, Write};

use chrono::Duration;

use quiz_core::model::{QuizSummary, ScoreBands};
use services::{QuestionView, QuizProgress, ReviewItem, SubmitOutcome};

/// `MM:SS`; minutes keep growing past 59.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn start_screen(out: &mut impl Write, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Quiz ===")?;
    writeln!(out, "{total} questions. Press Enter to start, q to quit.")
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  1-9  select an option")?;
    writeln!(out, "  s    submit the selected option")?;
    writeln!(out, "  n    next question (or results on the last one)")?;
    writeln!(out, "  p    previous question")?;
    writeln!(out, "  t    show the timer")?;
    writeln!(out, "  r    restart")?;
    writeln!(out, "  q    quit")
}

pub fn question(
    out: &mut impl Write,
    view: &QuestionView<'_>,
    progress: QuizProgress,
    elapsed: Duration,
) -> io::Result<()> {
    let q = view.question;
    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {}  [{:>3.0}%]  {}",
        progress.position,
        progress.total,
        progress.fraction() * 100.0,
        format_elapsed(elapsed)
    )?;
    if !q.title().is_empty() {
        writeln!(out, "{}", q.title())?;
    }
    writeln!(out, "{}", q.prompt())?;
    if !q.hint().is_empty() {
        writeln!(out, "Hint: {}", q.hint())?;
    }

    for (i, option) in q.options().iter().enumerate() {
        let marker = if view.answered && i == q.correct_index() {
            "+"
        } else if view.selected_option == Some(i) {
            if view.answered { "x" } else { ">" }
        } else {
            " "
        };
        writeln!(out, " {marker} {}. {option}", i + 1)?;
    }

    match view.is_correct {
        Some(true) => writeln!(out, "Answered correctly.")?,
        Some(false) => writeln!(out, "Answered incorrectly.")?,
        None if view.can_submit => writeln!(out, "Press s to submit.")?,
        None => {}
    }
    if view.answered {
        let next = if view.is_last { "n: view results" } else { "n: next" };
        writeln!(out, "({next})")?;
    }
    Ok(())
}

pub fn outcome(out: &mut impl Write, outcome: &SubmitOutcome) -> io::Result<()> {
    writeln!(out)?;
    if outcome.is_correct {
        writeln!(out, "Correct!")?;
    } else {
        writeln!(out, "Incorrect.")?;
    }
    writeln!(out, "Correct answer: {}", outcome.correct_option)?;
    if !outcome.explanation.is_empty() {
        writeln!(out, "Explanation: {}", outcome.explanation)?;
    }
    if !outcome.reference.is_empty() {
        writeln!(out, "Reference: {}", outcome.reference)?;
    }
    writeln!(out, "Score so far: {}", outcome.score)
}

pub fn summary(out: &mut impl Write, summary: &QuizSummary, bands: &ScoreBands) -> io::Result<()> {
    let performance = summary.performance(bands);
    writeln!(out)?;
    writeln!(out, "=== Results ===")?;
    writeln!(
        out,
        "Score: {}/{} ({}%)",
        summary.score(),
        summary.total(),
        summary.percentage()
    )?;
    writeln!(out, "Time: {}", format_elapsed(summary.elapsed()))?;
    writeln!(out, "{performance}")?;
    writeln!(out, "{}", performance.advice())
}

pub fn review(out: &mut impl Write, items: &[ReviewItem]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Review ---")?;
    for item in items {
        let status = if item.is_correct { "correct" } else { "incorrect" };
        writeln!(out, "Q{}. {} [{status}]", item.index + 1, item.title)?;
        writeln!(
            out,
            "  Your answer: {}",
            item.selected_option.as_deref().unwrap_or("(none)")
        )?;
        writeln!(out, "  Correct answer: {}", item.correct_option)?;
        if !item.explanation.is_empty() {
            writeln!(out, "  Explanation: {}", item.explanation)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "r: restart, q: quit")
}
