use crate::verdict::{Assessment, Rejection};

/// Subject pronouns accepted in first position. Case-sensitive.
pub const SUBJECT_PRONOUNS: [&str; 7] = ["I", "You", "He", "She", "It", "We", "They"];

/// Present-tense forms of "to be" accepted in second position. Case-sensitive.
pub const TO_BE_FORMS: [&str; 3] = ["am", "is", "are"];

pub fn is_subject_pronoun(word: &str) -> bool {
    SUBJECT_PRONOUNS.contains(&word)
}

pub fn is_to_be_form(word: &str) -> bool {
    TO_BE_FORMS.contains(&word)
}

/// "To Be - Simple Present": pronoun followed by a form of "to be".
///
/// Only the first two words are inspected; anything after them is ignored.
/// Membership is all that is checked, so "They am" passes.
pub fn to_be_simple_present<S: AsRef<str>>(words: &[S]) -> Assessment {
    let (subject, verb) = match words {
        [subject, verb, ..] => (subject.as_ref(), verb.as_ref()),
        _ => return Assessment::rejected(Rejection::TooShort { words: words.len() }),
    };

    if !is_subject_pronoun(subject) {
        return Assessment::rejected(Rejection::UnknownSubject(subject.to_string()));
    }
    if !is_to_be_form(verb) {
        return Assessment::rejected(Rejection::UnknownVerb(verb.to_string()));
    }

    Assessment::accepted()
}
