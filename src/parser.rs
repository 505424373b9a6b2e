// Card loading from the line-oriented text format:
//
//   J1
//   SP123456 gato perro casa
//   EN654321 cat dog
//   J2
//   PT111111 gato cao
//
// A player marker line sets the owner for the card lines that follow it.
// Every card line either yields a card or exactly one error; a bad line never
// stops the rest of the load.

use std::collections::{BTreeSet, HashSet};

use crate::card::Card;
use crate::enums::Language;
use crate::errors::CardLineError;
use crate::word_banks::WordBanks;

const ID_DIGITS: usize = 6;

/// Cards accepted from a load, plus one error per rejected line in line order
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub cards: Vec<Card>,
    pub errors: Vec<CardLineError>,
}

impl ParseOutcome {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// `J` followed by up to eight more characters, no spaces.
fn is_player_marker(line: &str) -> bool {
    let len = line.chars().count();
    line.starts_with('J') && len > 1 && len < 10 && !line.contains(' ')
}

/// Parses and validates every card in `text`.
///
/// `existing_ids` holds ids from earlier loads; reusing one of them is an error,
/// as is repeating an id within `text`.
pub fn parse_cards(text: &str, banks: &WordBanks, existing_ids: &HashSet<String>) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut ids_in_load: HashSet<String> = HashSet::new();
    let mut current_player: Option<&str> = None;

    for (index, raw_line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if is_player_marker(line) {
            current_player = Some(line);
            continue;
        }

        let Some(player) = current_player else {
            outcome
                .errors
                .push(CardLineError::MissingPlayer { line: line_number });
            continue;
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        // a lone token is ignored rather than reported
        if tokens.len() < 2 {
            continue;
        }

        match validate_card_line(line_number, &tokens, banks, existing_ids, &ids_in_load) {
            Ok((language, words)) => {
                let card_id = tokens[0];
                let card = Card::new(card_id, player, language, &words);
                log::debug!(
                    "Line {}: accepted card {} for {} ({} words)",
                    line_number,
                    card_id,
                    player,
                    card.limit()
                );
                ids_in_load.insert(card_id.to_string());
                outcome.cards.push(card);
            }
            Err(error) => {
                log::debug!("Line {}: rejected: {}", line_number, error);
                outcome.errors.push(error);
            }
        }
    }

    log::info!(
        "Parsed {} cards with {} errors",
        outcome.cards.len(),
        outcome.errors.len()
    );

    outcome
}

/// Runs the card checks in order and stops at the first failure.
fn validate_card_line(
    line: usize,
    tokens: &[&str],
    banks: &WordBanks,
    existing_ids: &HashSet<String>,
    ids_in_load: &HashSet<String>,
) -> Result<(Language, Vec<String>), CardLineError> {
    let card_id = tokens[0];
    let prefix: String = card_id.chars().take(2).collect();
    let digits: String = card_id.chars().skip(2).collect();

    let language = Language::from_code(&prefix).ok_or_else(|| CardLineError::UnknownLanguage {
        line,
        card_id: card_id.to_string(),
    })?;

    if digits.len() != ID_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardLineError::InvalidId {
            line,
            card_id: card_id.to_string(),
            prefix,
        });
    }

    if existing_ids.contains(card_id) {
        return Err(CardLineError::AlreadyLoaded {
            line,
            card_id: card_id.to_string(),
        });
    }

    if ids_in_load.contains(card_id) {
        return Err(CardLineError::DuplicateInLoad {
            line,
            card_id: card_id.to_string(),
        });
    }

    let words: Vec<String> = tokens[1..].iter().map(|w| w.to_string()).collect();

    let mut seen = HashSet::new();
    let repeated: BTreeSet<&String> = words.iter().filter(|w| !seen.insert(*w)).collect();
    if !repeated.is_empty() {
        return Err(CardLineError::RepeatedWords {
            line,
            card_id: card_id.to_string(),
            words: repeated.into_iter().cloned().collect(),
        });
    }

    let limit = language.word_limit();
    if words.len() > limit {
        return Err(CardLineError::TooManyWords {
            line,
            card_id: card_id.to_string(),
            limit,
        });
    }

    if !banks.is_loaded(language) {
        return Err(CardLineError::BankNotLoaded { line, language });
    }

    let unknown: Vec<String> = words
        .iter()
        .filter(|w| !banks.contains(language, w))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(CardLineError::WordsNotInBank {
            line,
            card_id: card_id.to_string(),
            words: unknown,
        });
    }

    Ok((language, words))
}
