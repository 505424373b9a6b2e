use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::enums::Language;
use crate::errors::CardStateError;
use crate::ordering::order_words;

/// A player's bingo card.
///
/// `words` is sorted ascending when the card is built and never re-sorted;
/// `marked[i]` belongs to `words[i]`. The fields are private so that marks and
/// the hit counter can only change together through [`Card::mark_word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    id: String,
    #[serde(rename = "jugador")]
    owner: String,
    #[serde(rename = "idioma")]
    language: Language,
    #[serde(rename = "palabras")]
    words: Vec<String>,
    #[serde(rename = "marcadas")]
    marked: Vec<bool>,
    #[serde(rename = "total_aciertos")]
    hits: usize,
    #[serde(rename = "limite_palabras")]
    limit: usize,
    #[serde(rename = "ya_gano")]
    won: bool,
}

impl Card {
    /// Builds a fresh card. `words` must not contain repeats; they are ordered here.
    pub(crate) fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        language: Language,
        words: &[String],
    ) -> Self {
        let words = order_words(words);
        let limit = words.len();
        Card {
            id: id.into(),
            owner: owner.into(),
            language,
            marked: vec![false; limit],
            words,
            hits: 0,
            limit,
            won: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn marked(&self) -> &[bool] {
        &self.marked
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Words still missing before this card completes.
    pub fn deficit(&self) -> usize {
        self.limit - self.hits
    }

    pub fn is_complete(&self) -> bool {
        self.hits == self.limit
    }

    /// Flags the card as a past winner so later winner checks skip it.
    pub fn mark_won(&mut self) {
        self.won = true;
    }

    /// Marks `word` on this card if present.
    ///
    /// Binary search over the ordered word list with a closed `[low, high]` range.
    /// Returns `true` when the word is on the card, whether or not it was already
    /// marked; the hit counter only moves on the first mark.
    pub fn mark_word(&mut self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }

        let mut low = 0usize;
        let mut high = self.words.len() - 1;

        while low <= high {
            let mid = low + (high - low) / 2;

            match self.words[mid].as_str().cmp(word) {
                Ordering::Equal => {
                    if !self.marked[mid] {
                        self.marked[mid] = true;
                        self.hits += 1;
                    }
                    return true;
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => {
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }

        false
    }
}

/// Wire shape of a card as sent by clients; validated into a [`Card`].
#[derive(Debug, Deserialize)]
struct CardRecord {
    id: String,
    jugador: String,
    idioma: Language,
    palabras: Vec<String>,
    marcadas: Vec<bool>,
    total_aciertos: usize,
    limite_palabras: usize,
    #[serde(default)]
    ya_gano: bool,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardStateError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let card_id = record.id;

        if !record.palabras.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(CardStateError::UnorderedWords { card_id });
        }
        if record.marcadas.len() != record.palabras.len() {
            return Err(CardStateError::MarkCountMismatch {
                card_id,
                words: record.palabras.len(),
                marked: record.marcadas.len(),
            });
        }
        let counted = record.marcadas.iter().filter(|&&m| m).count();
        if counted != record.total_aciertos {
            return Err(CardStateError::HitCountMismatch {
                card_id,
                hits: record.total_aciertos,
                counted,
            });
        }
        if record.limite_palabras != record.palabras.len() {
            return Err(CardStateError::LimitMismatch {
                card_id,
                limit: record.limite_palabras,
                words: record.palabras.len(),
            });
        }

        Ok(Card {
            id: card_id,
            owner: record.jugador,
            language: record.idioma,
            words: record.palabras,
            marked: record.marcadas,
            hits: record.total_aciertos,
            limit: record.limite_palabras,
            won: record.ya_gano,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(words: &[&str]) -> Card {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Card::new("SP123456", "J1", Language::Spanish, &words)
    }

    #[test]
    fn test_new_card_is_ordered_and_unmarked() {
        let card = card(&["perro", "gato", "oso"]);
        assert_eq!(card.words(), &["gato", "oso", "perro"]);
        assert_eq!(card.marked(), &[false, false, false]);
        assert_eq!(card.hits(), 0);
        assert_eq!(card.limit(), 3);
        assert!(!card.won());
    }

    #[test]
    fn test_mark_word_first_and_repeat() {
        let mut card = card(&["gato", "perro"]);

        assert!(card.mark_word("gato"));
        assert_eq!(card.marked(), &[true, false]);
        assert_eq!(card.hits(), 1);

        assert!(card.mark_word("gato"));
        assert_eq!(card.marked(), &[true, false]);
        assert_eq!(card.hits(), 1);
    }

    #[test]
    fn test_mark_absent_word_leaves_card_unchanged() {
        let mut card = card(&["gato", "perro", "zorro"]);
        let before = card.clone();

        // below the first, between entries, above the last
        assert!(!card.mark_word("abeja"));
        assert!(!card.mark_word("loro"));
        assert!(!card.mark_word("zzz"));
        assert!(!card.mark_word("Gato"));
        assert_eq!(card, before);
    }

    #[test]
    fn test_mark_every_position() {
        let words: Vec<String> = (0..24).map(|i| format!("palabra{:02}", i)).collect();
        let mut card = Card::new("SP000001", "J1", Language::Spanish, &words);

        for (i, word) in words.iter().enumerate().rev() {
            assert!(card.mark_word(word));
            assert_eq!(card.hits(), words.len() - i);
        }
        assert!(card.is_complete());
        assert_eq!(card.deficit(), 0);
        assert!(card.marked().iter().all(|&m| m));
    }

    #[test]
    fn test_mark_on_empty_card() {
        let mut card = card(&[]);
        assert!(!card.mark_word("gato"));
        assert_eq!(card.hits(), 0);
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let mut card = card(&["gato", "perro"]);
        card.mark_word("perro");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], "SP123456");
        assert_eq!(json["jugador"], "J1");
        assert_eq!(json["idioma"], "SP");
        assert_eq!(json["palabras"], serde_json::json!(["gato", "perro"]));
        assert_eq!(json["marcadas"], serde_json::json!([false, true]));
        assert_eq!(json["total_aciertos"], 1);
        assert_eq!(json["limite_palabras"], 2);
        assert_eq!(json["ya_gano"], false);

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_deserialize_defaults_won() {
        let json = serde_json::json!({
            "id": "EN123456",
            "jugador": "J2",
            "idioma": "EN",
            "palabras": ["cat", "dog"],
            "marcadas": [false, false],
            "total_aciertos": 0,
            "limite_palabras": 2
        });
        let card: Card = serde_json::from_value(json).unwrap();
        assert!(!card.won());
        assert_eq!(card.language(), Language::English);
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        let base = serde_json::json!({
            "id": "EN123456",
            "jugador": "J2",
            "idioma": "EN",
            "palabras": ["cat", "dog"],
            "marcadas": [true, false],
            "total_aciertos": 1,
            "limite_palabras": 2,
            "ya_gano": false
        });

        let mut unordered = base.clone();
        unordered["palabras"] = serde_json::json!(["dog", "cat"]);
        assert!(serde_json::from_value::<Card>(unordered).is_err());

        let mut short_marks = base.clone();
        short_marks["marcadas"] = serde_json::json!([true]);
        assert!(serde_json::from_value::<Card>(short_marks).is_err());

        let mut wrong_hits = base.clone();
        wrong_hits["total_aciertos"] = serde_json::json!(2);
        assert!(serde_json::from_value::<Card>(wrong_hits).is_err());

        let mut wrong_limit = base.clone();
        wrong_limit["limite_palabras"] = serde_json::json!(3);
        assert!(serde_json::from_value::<Card>(wrong_limit).is_err());

        assert!(serde_json::from_value::<Card>(base).is_ok());
    }

    #[test]
    fn test_record_errors_name_the_card() {
        let record = CardRecord {
            id: "DT654321".to_string(),
            jugador: "J1".to_string(),
            idioma: Language::German,
            palabras: vec!["a".to_string(), "b".to_string()],
            marcadas: vec![true, true],
            total_aciertos: 1,
            limite_palabras: 2,
            ya_gano: false,
        };
        let err = Card::try_from(record).unwrap_err();
        assert_eq!(
            err,
            CardStateError::HitCountMismatch {
                card_id: "DT654321".to_string(),
                hits: 1,
                counted: 2,
            }
        );
    }
}
