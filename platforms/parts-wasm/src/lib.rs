use parts_session::{SentenceSession, SessionConfig, SessionError, FeedbackPolicy, WordEntry};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returned to JavaScript after a successful selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedWord {
    pub id: String,
    pub text: String,
    pub position: usize,
}

/// The exercise instance running in the browser.
///
/// The host calls a mutating method from its click handler, then calls
/// `render()` (or compares `revision()`) and redraws from the returned view.
#[wasm_bindgen]
pub struct SentenceBuilder {
    session: SentenceSession,
}

impl Default for SentenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SentenceBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { session: SentenceSession::new() }
    }

    /// Variant whose feedback line disappears as soon as the sentence is edited.
    #[wasm_bindgen(js_name = withClearOnEdit)]
    pub fn with_clear_on_edit() -> Self {
        let config = SessionConfig::default().with_feedback_policy(FeedbackPolicy::ClearOnEdit);
        Self { session: SentenceSession::with_config(config) }
    }

    /// Word bank button handler. `id` is the identifier from the rendered panel.
    #[wasm_bindgen(js_name = selectWord)]
    pub fn select_word(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let selected = self.select(id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&selected).map_err(JsValue::from)
    }

    /// Sentence token handler. Returns false when `index` no longer exists.
    #[wasm_bindgen(js_name = removeWordAt)]
    pub fn remove_word_at(&mut self, index: usize) -> bool {
        self.session.remove_word_at(index).is_some()
    }

    /// Submit handler. Returns the feedback message.
    #[wasm_bindgen(js_name = checkSentence)]
    pub fn check_sentence(&mut self) -> String {
        self.session.check_sentence().message().to_string()
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Current view model. Absent placeholder/feedback arrive as `undefined`.
    pub fn render(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.view()).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = displayLine)]
    pub fn display_line(&self) -> String {
        self.session.display_line()
    }

    pub fn revision(&self) -> u64 {
        self.session.revision()
    }
}

impl SentenceBuilder {
    fn select(&mut self, id: &str) -> Result<SelectedWord, SessionError> {
        let entry: WordEntry = self.session.select_by_id_str(id)?;
        tracing::debug!(id, "selected from browser");
        Ok(SelectedWord {
            id: entry.id.to_string(),
            text: entry.text.to_string(),
            position: self.session.len() - 1,
        })
    }

    pub fn session(&self) -> &SentenceSession {
        &self.session
    }
}
