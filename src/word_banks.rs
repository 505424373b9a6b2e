// Word banks: the set of words a card of each language may use.
//
// Banks are built once at startup (from files or in code) and then shared
// read-only, usually behind an `Arc`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::enums::Language;
use crate::errors::{InfrastructureError, InfrastructureResult};

#[derive(Debug, Clone, Default)]
pub struct WordBanks {
    banks: HashMap<Language, HashSet<String>>,
}

impl WordBanks {
    pub fn new(banks: HashMap<Language, HashSet<String>>) -> Self {
        WordBanks { banks }
    }

    /// Adds (or replaces) the bank for `language`.
    pub fn with_bank<I, S>(mut self, language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banks
            .insert(language, words.into_iter().map(Into::into).collect());
        self
    }

    /// Loads `banco_<CODE>.txt` for every language from `dir`.
    ///
    /// A missing file leaves that language without a bank.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> InfrastructureResult<Self> {
        let dir = dir.as_ref();
        let mut banks = HashMap::new();

        for language in Language::ALL {
            let path = dir.join(format!("banco_{}.txt", language.code()));
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    let words = parse_bank_contents(&contents);
                    log::info!("Loaded bank {}: {} words", language, words.len());
                    banks.insert(language, words);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::warn!("No word bank for {} at {}", language, path.display());
                    banks.insert(language, HashSet::new());
                }
                Err(e) => {
                    return Err(InfrastructureError::word_bank(
                        path.display().to_string(),
                        e,
                    ));
                }
            }
        }

        Ok(WordBanks { banks })
    }

    pub fn bank(&self, language: Language) -> Option<&HashSet<String>> {
        self.banks.get(&language)
    }

    /// A bank counts as loaded once it holds at least one word.
    pub fn is_loaded(&self, language: Language) -> bool {
        self.bank(language).is_some_and(|bank| !bank.is_empty())
    }

    pub fn contains(&self, language: Language, word: &str) -> bool {
        self.bank(language).is_some_and(|bank| bank.contains(word))
    }

    /// The bank of `language` in ascending order; empty if not loaded.
    pub fn sorted_words(&self, language: Language) -> Vec<String> {
        let mut words: Vec<String> = self
            .bank(language)
            .map(|bank| bank.iter().cloned().collect())
            .unwrap_or_default();
        words.sort();
        words
    }

    /// Every language that has a bank entry, with its words sorted.
    pub fn listing(&self) -> BTreeMap<Language, Vec<String>> {
        self.banks
            .keys()
            .map(|&language| (language, self.sorted_words(language)))
            .collect()
    }
}

/// Parses the bank file format `['word1', 'word2', ...]`.
pub fn parse_bank_contents(contents: &str) -> HashSet<String> {
    contents
        .replace(['[', ']', '\''], "")
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bank_contents() {
        let words = parse_bank_contents("['gato', 'perro',\n 'casa']\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("gato"));
        assert!(words.contains("perro"));
        assert!(words.contains("casa"));
    }

    #[test]
    fn test_parse_empty_bank() {
        assert!(parse_bank_contents("").is_empty());
        assert!(parse_bank_contents("[]").is_empty());
    }

    #[test]
    fn test_builder_and_queries() {
        let banks = WordBanks::default()
            .with_bank(Language::Spanish, ["gato", "perro"])
            .with_bank(Language::English, Vec::<String>::new());

        assert!(banks.is_loaded(Language::Spanish));
        assert!(!banks.is_loaded(Language::English));
        assert!(!banks.is_loaded(Language::German));
        assert!(banks.contains(Language::Spanish, "gato"));
        assert!(!banks.contains(Language::Spanish, "cat"));
        assert!(!banks.contains(Language::German, "gato"));
        assert_eq!(banks.sorted_words(Language::Spanish), vec!["gato", "perro"]);
        assert!(banks.sorted_words(Language::Portuguese).is_empty());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("banco_SP.txt"),
            "['gato', 'perro', 'zorro']",
        )
        .unwrap();
        fs::write(dir.path().join("banco_EN.txt"), "['cat', 'dog']").unwrap();

        let banks = WordBanks::load_from_dir(dir.path()).unwrap();

        assert_eq!(banks.bank(Language::Spanish).map(HashSet::len), Some(3));
        assert_eq!(banks.bank(Language::English).map(HashSet::len), Some(2));
        assert!(!banks.is_loaded(Language::Portuguese));
        assert!(!banks.is_loaded(Language::German));

        let listing = banks.listing();
        assert_eq!(listing.len(), 4);
        assert_eq!(listing[&Language::English], vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_from_missing_dir_yields_empty_banks() {
        let dir = tempfile::tempdir().unwrap();
        let banks = WordBanks::load_from_dir(dir.path().join("nope")).unwrap();
        for language in Language::ALL {
            assert!(!banks.is_loaded(language));
        }
    }

    #[test]
    fn test_unreadable_bank_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where a file is expected
        fs::create_dir(dir.path().join("banco_PT.txt")).unwrap();
        let err = WordBanks::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::WordBank { .. }));
    }
}
