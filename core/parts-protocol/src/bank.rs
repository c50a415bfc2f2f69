use crate::ids::WordId;
use crate::model::{Category, WordEntry};

const PRONOUNS: [WordEntry; 7] = [
    WordEntry::new(1, "I"),
    WordEntry::new(2, "You"),
    WordEntry::new(3, "He"),
    WordEntry::new(4, "She"),
    WordEntry::new(5, "It"),
    WordEntry::new(6, "We"),
    WordEntry::new(7, "They"),
];

const VERBS: [WordEntry; 3] = [
    WordEntry::new(8, "am"),
    WordEntry::new(9, "is"),
    WordEntry::new(10, "are"),
];

const NOUNS: [WordEntry; 8] = [
    WordEntry::new(11, "student"),
    WordEntry::new(12, "teacher"),
    WordEntry::new(13, "school"),
    WordEntry::new(14, "pilot"),
    WordEntry::new(15, "nurse"),
    WordEntry::new(16, "cat"),
    WordEntry::new(17, "home"),
    WordEntry::new(18, "hospital"),
];

const ADJECTIVES: [WordEntry; 9] = [
    WordEntry::new(19, "happy"),
    WordEntry::new(20, "sad"),
    WordEntry::new(21, "hungry"),
    WordEntry::new(22, "thirsty"),
    WordEntry::new(23, "quiet"),
    WordEntry::new(24, "noisy"),
    WordEntry::new(25, "early"),
    WordEntry::new(26, "rich"),
    WordEntry::new(27, "big"),
];

const ARTICLES: [WordEntry; 2] = [WordEntry::new(28, "a"), WordEntry::new(29, "an")];

const PREPOSITIONS: [WordEntry; 1] = [WordEntry::new(30, "at")];

/// Read-only catalogue of selectable words, grouped by category.
#[derive(Debug)]
pub struct WordBank {
    pronouns: &'static [WordEntry],
    verbs: &'static [WordEntry],
    nouns: &'static [WordEntry],
    adjectives: &'static [WordEntry],
    articles: &'static [WordEntry],
    prepositions: &'static [WordEntry],
}

/// The process-wide word bank.
pub static WORD_BANK: WordBank = WordBank {
    pronouns: &PRONOUNS,
    verbs: &VERBS,
    nouns: &NOUNS,
    adjectives: &ADJECTIVES,
    articles: &ARTICLES,
    prepositions: &PREPOSITIONS,
};

impl WordBank {
    pub fn entries(&self, category: Category) -> &'static [WordEntry] {
        match category {
            Category::Pronoun => self.pronouns,
            Category::Verb => self.verbs,
            Category::Noun => self.nouns,
            Category::Adjective => self.adjectives,
            Category::Article => self.articles,
            Category::Preposition => self.prepositions,
        }
    }

    /// Every entry with its category, in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &'static WordEntry)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.entries(category).iter().map(move |e| (category, e)))
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear scan; the bank holds thirty entries.
    pub fn find(&self, id: WordId) -> Option<&'static WordEntry> {
        self.iter().map(|(_, e)| e).find(|e| e.id == id)
    }

    /// Case-sensitive exact match on the literal text.
    pub fn find_text(&self, text: &str) -> Option<&'static WordEntry> {
        self.iter().map(|(_, e)| e).find(|e| e.text == text)
    }
}
