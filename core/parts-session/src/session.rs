use parts_grammar::{assess, Verdict};
use parts_protocol::{WordEntry, WordId, WORD_BANK};
use tracing::debug;

use crate::config::{FeedbackPolicy, SessionConfig};
use crate::error::SessionError;
use crate::view::SessionView;

/// Shown in the display line while the sentence is empty.
pub const EMPTY_DISPLAY_LINE: &str = "No sentence yet.";

/// One learner's exercise: the sentence being built and the last feedback.
///
/// Every mutation bumps `revision`, so a host can redraw by pulling
/// [`SentenceSession::view`] whenever the counter moves.
#[derive(Debug, Clone, Default)]
pub struct SentenceSession {
    sentence: Vec<WordEntry>,
    feedback: Option<Verdict>,
    config: SessionConfig,
    revision: u64,
}

impl SentenceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Append a word bank entry to the end of the sentence.
    ///
    /// The entry must match the bank's copy for its id; anything else is
    /// refused and the sentence is left as it was.
    pub fn select_word(&mut self, entry: &WordEntry) -> Result<WordEntry, SessionError> {
        match WORD_BANK.find(entry.id) {
            Some(banked) if banked == entry => {
                self.append(banked);
                Ok(*banked)
            }
            Some(_) => Err(SessionError::ForeignEntry { id: entry.id, text: entry.text.to_string() }),
            None => Err(SessionError::UnknownWord(entry.id)),
        }
    }

    pub fn select_by_id(&mut self, id: WordId) -> Result<WordEntry, SessionError> {
        let entry = WORD_BANK.find(id).ok_or(SessionError::UnknownWord(id))?;
        self.append(entry);
        Ok(*entry)
    }

    /// Accepts the textual id a surface hands over ("8").
    pub fn select_by_id_str(&mut self, id: &str) -> Result<WordEntry, SessionError> {
        let id: WordId = id.parse()?;
        self.select_by_id(id)
    }

    pub fn select_by_text(&mut self, text: &str) -> Result<WordEntry, SessionError> {
        let entry = WORD_BANK
            .find_text(text)
            .ok_or_else(|| SessionError::UnknownText(text.to_string()))?;
        self.append(entry);
        Ok(*entry)
    }

    fn append(&mut self, entry: &'static WordEntry) {
        self.sentence.push(*entry);
        debug!(id = %entry.id, text = entry.text, len = self.sentence.len(), "word selected");
        self.edited();
    }

    /// Remove the word at `index`, shifting later words left.
    /// An index past the end leaves the session untouched.
    pub fn remove_word_at(&mut self, index: usize) -> Option<WordEntry> {
        if index >= self.sentence.len() {
            debug!(index, len = self.sentence.len(), "ignoring removal past end of sentence");
            return None;
        }
        let removed = self.sentence.remove(index);
        debug!(index, text = removed.text, len = self.sentence.len(), "word removed");
        self.edited();
        Some(removed)
    }

    /// Empty the sentence. No-op when it is already empty.
    pub fn clear(&mut self) {
        if self.sentence.is_empty() {
            return;
        }
        self.sentence.clear();
        debug!("sentence cleared");
        self.edited();
    }

    /// Run the grammar check and record its verdict as the feedback.
    pub fn check_sentence(&mut self) -> Verdict {
        let assessment = assess(&self.texts());
        let verdict = assessment.verdict;
        debug!(
            verdict = verdict.message(),
            reason = ?assessment.rejection,
            len = self.sentence.len(),
            "sentence checked"
        );
        self.feedback = Some(verdict);
        self.revision += 1;
        verdict
    }

    pub fn sentence(&self) -> &[WordEntry] {
        &self.sentence
    }

    pub fn texts(&self) -> Vec<&'static str> {
        self.sentence.iter().map(|e| e.text).collect()
    }

    pub fn feedback(&self) -> Option<Verdict> {
        self.feedback
    }

    pub fn feedback_message(&self) -> Option<&'static str> {
        self.feedback.map(Verdict::message)
    }

    pub fn len(&self) -> usize {
        self.sentence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentence.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Space-joined sentence, or the empty placeholder.
    pub fn display_line(&self) -> String {
        if self.sentence.is_empty() {
            EMPTY_DISPLAY_LINE.to_string()
        } else {
            self.texts().join(" ")
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    fn edited(&mut self) {
        if self.config.feedback_policy == FeedbackPolicy::ClearOnEdit && self.feedback.take().is_some() {
            debug!("feedback cleared by edit");
        }
        self.revision += 1;
    }
}
