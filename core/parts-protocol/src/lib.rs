pub mod ids;
pub mod model;
pub mod bank;

// Re-export core types for convenience
pub use ids::{WordId, WordIdParseError};
pub use model::{Category, WordEntry};
pub use bank::{WordBank, WORD_BANK};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bank_shape() {
        assert_eq!(WORD_BANK.len(), 30);
        assert_eq!(WORD_BANK.entries(Category::Pronoun).len(), 7);
        assert_eq!(WORD_BANK.entries(Category::Verb).len(), 3);
        assert_eq!(WORD_BANK.entries(Category::Noun).len(), 8);
        assert_eq!(WORD_BANK.entries(Category::Adjective).len(), 9);
        assert_eq!(WORD_BANK.entries(Category::Article).len(), 2);
        assert_eq!(WORD_BANK.entries(Category::Preposition).len(), 1);
    }

    #[test]
    fn test_ids_and_texts_are_unique() {
        let ids: HashSet<WordId> = WORD_BANK.iter().map(|(_, e)| e.id).collect();
        let texts: HashSet<&str> = WORD_BANK.iter().map(|(_, e)| e.text).collect();
        assert_eq!(ids.len(), WORD_BANK.len());
        assert_eq!(texts.len(), WORD_BANK.len());
    }

    #[test]
    fn test_iteration_follows_panel_order() {
        let order: Vec<u32> = WORD_BANK.iter().map(|(_, e)| e.id.0).collect();
        assert_eq!(order, (1..=30).collect::<Vec<u32>>());

        let (first_cat, first) = WORD_BANK.iter().next().unwrap();
        assert_eq!(first_cat, Category::Pronoun);
        assert_eq!(first.text, "I");
    }

    #[test]
    fn test_lookup() {
        let am = WORD_BANK.find(WordId(8)).expect("id 8 is in the bank");
        assert_eq!(am.text, "am");
        assert!(WORD_BANK.entries(Category::Verb).contains(am));

        assert_eq!(WORD_BANK.find_text("hospital").map(|e| e.id), Some(WordId(18)));
        assert!(WORD_BANK.find_text("i").is_none()); // case-sensitive
        assert!(WORD_BANK.find(WordId(0)).is_none());
        assert!(WORD_BANK.find(WordId(31)).is_none());
    }

    #[test]
    fn test_headings() {
        let headings: Vec<&str> = Category::ALL.iter().map(|c| c.heading()).collect();
        assert_eq!(
            headings,
            ["Pronouns", "Verbs (To Be)", "Nouns", "Adjectives", "Articles", "Prepositions"]
        );
    }
}
