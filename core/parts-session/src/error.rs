use parts_protocol::{WordId, WordIdParseError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no word with id {0} in the word bank")]
    UnknownWord(WordId),
    #[error("'{text}' does not match word bank entry {id}")]
    ForeignEntry { id: WordId, text: String },
    #[error("'{0}' is not in the word bank")]
    UnknownText(String),
    #[error(transparent)]
    InvalidId(#[from] WordIdParseError),
}
