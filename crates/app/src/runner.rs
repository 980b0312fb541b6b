use std::io::{self, BufRead, Write};

use quiz_core::model::{QuestionBank, ScoreBands};
use services::{Advance, QuizSession};

use crate::command::Command;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives a `QuizSession` from line-based input and renders each state.
pub struct Runner {
    session: QuizSession,
    bank: QuestionBank,
    bands: ScoreBands,
}

impl Runner {
    #[must_use]
    pub fn new(session: QuizSession, bank: QuestionBank, bands: ScoreBands) -> Self {
        Self {
            session,
            bank,
            bands,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from reading `input` or writing `out`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        render::start_screen(out, self.bank.len())?;
        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(cmd) => self.handle(cmd, out)?,
                Err(unknown) => {
                    writeln!(out, "! unknown command: {}", unknown.0)?;
                    render::help(out)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        log::debug!("quiz runner stopped: {:?}", self.session);
        Ok(())
    }

    fn handle(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        match cmd {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => render::help(out)?,
            Command::Restart => {
                self.session.restart();
                render::start_screen(out, self.bank.len())?;
            }
            Command::Continue if !self.session.is_started() => {
                self.session.start_bank(self.bank.clone());
                self.show_question(out)?;
            }
            _ if !self.session.is_started() => {
                writeln!(out, "Press Enter to start, q to quit.")?;
            }
            _ if self.session.is_finished() => {
                writeln!(out, "Quiz finished. r: restart, q: quit")?;
            }
            Command::Continue => self.show_question(out)?,
            Command::Select(index) => match self.session.select_option(index) {
                Ok(()) => self.show_question(out)?,
                Err(err) => writeln!(out, "! {err}")?,
            },
            Command::Submit => match self.session.submit() {
                Ok(outcome) => render::outcome(out, &outcome)?,
                Err(err) => writeln!(out, "! {err}")?,
            },
            Command::Next => match self.session.go_next() {
                Ok(Advance::Moved { .. }) => self.show_question(out)?,
                Ok(Advance::Finished(summary)) => {
                    render::summary(out, &summary, &self.bands)?;
                    render::review(out, &self.session.review())?;
                }
                Err(err) => writeln!(out, "! {err}")?,
            },
            Command::Previous => match self.session.go_previous() {
                Ok(_) => self.show_question(out)?,
                Err(err) => writeln!(out, "! {err}")?,
            },
            Command::Time => {
                writeln!(out, "Time: {}", render::format_elapsed(self.session.elapsed()))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_question(&self, out: &mut impl Write) -> io::Result<()> {
        if let (Some(view), Some(progress)) =
            (self.session.current_question(), self.session.progress())
        {
            render::question(out, &view, progress, self.session.elapsed())?;
        }
        Ok(())
    }
}
