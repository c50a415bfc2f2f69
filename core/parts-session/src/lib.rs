pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use config::{FeedbackPolicy, SessionConfig};
pub use error::SessionError;
pub use session::{SentenceSession, EMPTY_DISPLAY_LINE};
pub use view::{PanelView, SessionView, TokenView, WordView};

// Surfaces only need this crate
pub use parts_grammar::Verdict;
pub use parts_protocol::{Category, WordEntry, WordId, WORD_BANK};
