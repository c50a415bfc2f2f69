use core::fmt;
use crate::ids::WordId;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A selectable word. Entries only ever live in the static bank; a sentence
/// holds copies of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub id: WordId,
    pub text: &'static str,
}

impl WordEntry {
    pub const fn new(id: u32, text: &'static str) -> Self {
        Self { id: WordId::new(id), text }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Category {
    Pronoun = 0,
    Verb = 1,
    Noun = 2,
    Adjective = 3,
    Article = 4,
    Preposition = 5,
}

impl Category {
    /// Display order of the panels.
    pub const ALL: [Category; 6] = [
        Category::Pronoun,
        Category::Verb,
        Category::Noun,
        Category::Adjective,
        Category::Article,
        Category::Preposition,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Pronoun => "pronoun",
            Category::Verb => "verb",
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Article => "article",
            Category::Preposition => "preposition",
        }
    }

    /// Panel heading shown above the word controls.
    pub const fn heading(self) -> &'static str {
        match self {
            Category::Pronoun => "Pronouns",
            Category::Verb => "Verbs (To Be)",
            Category::Noun => "Nouns",
            Category::Adjective => "Adjectives",
            Category::Article => "Articles",
            Category::Preposition => "Prepositions",
        }
    }

    /// Cosmetic color hint. Carries no meaning.
    pub const fn swatch(self) -> &'static str {
        match self {
            Category::Pronoun => "blue",
            Category::Verb => "yellow",
            Category::Noun => "green",
            Category::Adjective => "pink",
            Category::Article => "indigo",
            Category::Preposition => "red",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
