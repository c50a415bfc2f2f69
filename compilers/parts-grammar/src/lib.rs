pub mod rules;
pub mod verdict;

pub use rules::{SUBJECT_PRONOUNS, TO_BE_FORMS};
pub use verdict::{Assessment, Rejection, Verdict, CORRECT_MESSAGE, INCORRECT_MESSAGE};

use tracing::trace;

/// Full assessment of a word sequence, including the rejection reason.
pub fn assess<S: AsRef<str>>(words: &[S]) -> Assessment {
    let assessment = rules::to_be_simple_present(words);
    if let Some(reason) = &assessment.rejection {
        trace!(%reason, "sentence rejected");
    }
    assessment
}

/// Grammar check over the literal texts of a sentence, in order.
pub fn check<S: AsRef<str>>(words: &[S]) -> Verdict {
    assess(words).verdict
}
