use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use tokio::sync::Mutex;

use crate::card::Card;
use crate::enums::Language;
use crate::parser::{parse_cards, ParseOutcome};
use crate::rounds::shuffle_rounds;
use crate::winners::detect_winners;
use crate::word_banks::WordBanks;

/// Result of calling one word against a card collection
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub cards: Vec<Card>,
    pub found_in_any: bool,
}

/// Core application service.
///
/// Holds the word banks (read-only after startup) and the random source used for
/// round order. Card collections are owned by the caller and passed in on every call.
pub struct BingoService {
    banks: Arc<WordBanks>,
    rng: Mutex<XorShiftRng>,
}

impl BingoService {
    pub fn new(banks: Arc<WordBanks>) -> Self {
        Self {
            banks,
            rng: Mutex::new(XorShiftRng::from_entropy()),
        }
    }

    /// Same as [`BingoService::new`] but with a fixed round-order seed.
    pub fn with_seed(banks: Arc<WordBanks>, seed: u64) -> Self {
        Self {
            banks,
            rng: Mutex::new(XorShiftRng::seed_from_u64(seed)),
        }
    }

    pub fn banks(&self) -> &WordBanks {
        &self.banks
    }

    pub fn process_cards(&self, text: &str, existing_ids: &HashSet<String>) -> ParseOutcome {
        parse_cards(text, &self.banks, existing_ids)
    }

    /// Marks `word` on every card of `language` that has not won yet.
    pub fn call_word(&self, mut cards: Vec<Card>, word: &str, language: Language) -> CallOutcome {
        let mut found_in_any = false;

        for card in cards
            .iter_mut()
            .filter(|card| card.language() == language && !card.won())
        {
            if card.mark_word(word) {
                found_in_any = true;
            }
        }

        log::info!(
            "Called '{}' in {}: found on at least one card: {}",
            word,
            language,
            found_in_any
        );

        CallOutcome {
            cards,
            found_in_any,
        }
    }

    /// Complete cards among those that have not won before.
    pub fn check_winners(&self, cards: &[Card]) -> Vec<Card> {
        let winners: Vec<Card> = detect_winners(cards.iter().filter(|card| !card.won()))
            .into_iter()
            .cloned()
            .collect();

        log::info!(
            "Winner check over {} cards: {} winners",
            cards.len(),
            winners.len()
        );

        winners
    }

    pub async fn generate_rounds(&self, languages: &[Language]) -> Vec<Language> {
        let mut rng = self.rng.lock().await;
        shuffle_rounds(languages, &mut *rng)
    }

    pub fn validate_word(&self, word: &str, language: Language) -> bool {
        self.banks.contains(language, word)
    }

    pub fn word_limits(&self) -> BTreeMap<Language, usize> {
        Language::ALL
            .iter()
            .map(|&language| (language, language.word_limit()))
            .collect()
    }

    pub fn word_banks(&self) -> BTreeMap<Language, Vec<String>> {
        self.banks.listing()
    }
}
