use std::io::{BufRead, Write};

use anyhow::Context;
use parts_session::{SentenceSession, SessionError};
use serde_json::json;
use tracing::{debug, info};

use crate::command::{parse_command, Command, WordRef, HELP};
use crate::render::{BankText, FrameText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One `SessionView` JSON object per line.
    Json,
}

/// Feeds learner commands into a session and redraws after each change.
pub struct Driver<W: Write> {
    session: SentenceSession,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Driver<W> {
    pub fn new(session: SentenceSession, out: W, format: OutputFormat) -> Self {
        Self { session, out, format }
    }

    pub fn into_inner(self) -> (SentenceSession, W) {
        (self.session, self.out)
    }

    pub fn draw(&mut self) -> anyhow::Result<()> {
        let view = self.session.view();
        match self.format {
            OutputFormat::Text => write!(self.out, "{}", FrameText(&view))?,
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(&view)?)?,
        }
        Ok(())
    }

    fn notice(&mut self, message: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", message)?,
            OutputFormat::Json => writeln!(self.out, "{}", json!({ "notice": message }))?,
        }
        Ok(())
    }

    fn error(&mut self, message: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "error: {}", message)?,
            OutputFormat::Json => writeln!(self.out, "{}", json!({ "error": message }))?,
        }
        Ok(())
    }

    fn add(&mut self, word: WordRef) -> Result<(), SessionError> {
        let selected = match word {
            WordRef::Id(id) => self.session.select_by_id(id),
            WordRef::Text(text) => self.session.select_by_text(&text),
        };
        selected.map(|_| ())
    }

    /// Apply one command. Returns `false` once the learner quits.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<bool> {
        debug!(?command, "executing");
        let redraw = command.redraws();
        match command {
            Command::Add(word) => {
                if let Err(e) = self.add(word) {
                    return self.error(&e.to_string()).map(|_| true);
                }
            }
            Command::Remove(index) => {
                if self.session.remove_word_at(index).is_none() {
                    return self.notice(&format!("no word at position {}", index)).map(|_| true);
                }
            }
            Command::Check => {
                self.session.check_sentence();
            }
            Command::Clear => self.session.clear(),
            Command::Show => {}
            Command::Bank => {
                match self.format {
                    OutputFormat::Text => write!(self.out, "{}", BankText(&self.session.view()))?,
                    OutputFormat::Json => {
                        writeln!(self.out, "{}", serde_json::to_string(&self.session.view().panels)?)?
                    }
                }
            }
            Command::Help => self.notice(HELP)?,
            Command::Quit => return Ok(false),
        }
        if redraw {
            self.draw()?;
        }
        Ok(true)
    }

    /// Parse and apply one input line. Returns `false` once the learner quits.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        match parse_command(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(true),
            Err(e) => self.error(&e.to_string()).map(|_| true),
        }
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> anyhow::Result<()> {
        self.draw()?;
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("failed to read command")?;
            if !self.handle_line(&line)? {
                break;
            }
        }
        info!(revision = self.session.revision(), words = self.session.len(), "session finished");
        Ok(())
    }
}
