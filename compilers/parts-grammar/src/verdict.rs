use std::fmt;

pub const CORRECT_MESSAGE: &str = "Correct sentence!";
pub const INCORRECT_MESSAGE: &str = "Incorrect grammar. Try again.";

/// Outcome of a grammar check. `Incorrect` is an ordinary answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// The learner-facing feedback line.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => CORRECT_MESSAGE,
            Verdict::Incorrect => INCORRECT_MESSAGE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why a sentence was rejected. Diagnostics only: the learner always sees
/// the same incorrect message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort { words: usize },
    UnknownSubject(String),
    UnknownVerb(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooShort { words } => write!(f, "need at least 2 words, got {}", words),
            Rejection::UnknownSubject(w) => write!(f, "'{}' is not a subject pronoun", w),
            Rejection::UnknownVerb(w) => write!(f, "'{}' is not a form of 'to be'", w),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub rejection: Option<Rejection>,
}

impl Assessment {
    pub(crate) fn accepted() -> Self {
        Self { verdict: Verdict::Correct, rejection: None }
    }

    pub(crate) fn rejected(reason: Rejection) -> Self {
        Self { verdict: Verdict::Incorrect, rejection: Some(reason) }
    }
}
