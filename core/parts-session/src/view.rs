//! Serializable snapshot of everything a surface draws.
//!
//! Hosts never read session internals: after any mutation they pull a fresh
//! [`SessionView`] and redraw from it.

use parts_protocol::{Category, WordEntry, WORD_BANK};
use serde::Serialize;

use crate::session::SentenceSession;

pub const TITLE: &str = "Build a Sentence (To Be - Simple Present)";
pub const PLACEHOLDER: &str = "Click on the words to form a sentence";
pub const SENTENCE_HEADING: &str = "Your Sentence:";
pub const CHECK_LABEL: &str = "Check Sentence";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    pub id: String,
    pub text: &'static str,
}

impl From<&WordEntry> for WordView {
    fn from(entry: &WordEntry) -> Self {
        Self { id: entry.id.to_string(), text: entry.text }
    }
}

/// One category column of the word bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub category: Category,
    pub heading: &'static str,
    pub swatch: &'static str,
    pub words: Vec<WordView>,
}

/// A placed word. Clicking it removes position `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub index: usize,
    pub id: String,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub title: &'static str,
    pub panels: Vec<PanelView>,
    pub tokens: Vec<TokenView>,
    /// Present only while the sentence is empty.
    pub placeholder: Option<&'static str>,
    pub sentence_heading: &'static str,
    pub display_line: String,
    pub check_label: &'static str,
    /// Present only once a check has run.
    pub feedback: Option<&'static str>,
    pub revision: u64,
}

impl SessionView {
    pub fn from_session(session: &SentenceSession) -> Self {
        let tokens: Vec<TokenView> = session
            .sentence()
            .iter()
            .enumerate()
            .map(|(index, entry)| TokenView { index, id: entry.id.to_string(), text: entry.text })
            .collect();

        Self {
            title: TITLE,
            panels: panels(),
            placeholder: tokens.is_empty().then_some(PLACEHOLDER),
            tokens,
            sentence_heading: SENTENCE_HEADING,
            display_line: session.display_line(),
            check_label: CHECK_LABEL,
            feedback: session.feedback_message(),
            revision: session.revision(),
        }
    }
}

pub fn panels() -> Vec<PanelView> {
    Category::ALL
        .iter()
        .map(|&category| PanelView {
            category,
            heading: category.heading(),
            swatch: category.swatch(),
            words: WORD_BANK.entries(category).iter().map(WordView::from).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_view() {
        let view = SentenceSession::new().view();
        assert_eq!(view.title, "Build a Sentence (To Be - Simple Present)");
        assert_eq!(view.panels.len(), 6);
        assert!(view.tokens.is_empty());
        assert_eq!(view.placeholder, Some("Click on the words to form a sentence"));
        assert_eq!(view.display_line, "No sentence yet.");
        assert_eq!(view.feedback, None);
    }

    #[test]
    fn test_view_tracks_session() {
        let mut session = SentenceSession::new();
        session.select_by_text("I").unwrap();
        session.select_by_text("am").unwrap();
        session.select_by_text("happy").unwrap();
        session.check_sentence();

        let view = session.view();
        assert_eq!(view.placeholder, None);
        assert_eq!(view.display_line, "I am happy");
        assert_eq!(view.feedback, Some("Correct sentence!"));
        assert_eq!(view.revision, 4);
        assert_eq!(
            view.tokens,
            vec![
                TokenView { index: 0, id: "1".into(), text: "I" },
                TokenView { index: 1, id: "8".into(), text: "am" },
                TokenView { index: 2, id: "19".into(), text: "happy" },
            ]
        );
    }

    #[test]
    fn test_duplicate_words_get_distinct_positions() {
        let mut session = SentenceSession::new();
        session.select_by_text("a").unwrap();
        session.select_by_text("a").unwrap();
        let indices: Vec<usize> = session.view().tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn test_json_shape() {
        let mut session = SentenceSession::new();
        session.select_by_text("We").unwrap();
        let value = serde_json::to_value(session.view()).unwrap();

        assert_eq!(value["displayLine"], json!("We"));
        assert_eq!(value["sentenceHeading"], json!("Your Sentence:"));
        assert_eq!(value["checkLabel"], json!("Check Sentence"));
        assert_eq!(value["placeholder"], json!(null));
        assert_eq!(value["tokens"][0], json!({ "index": 0, "id": "6", "text": "We" }));
        assert_eq!(value["panels"][1]["category"], json!("verb"));
        assert_eq!(value["panels"][1]["heading"], json!("Verbs (To Be)"));
        assert_eq!(value["panels"][5]["words"], json!([{ "id": "30", "text": "at" }]));
    }
}
