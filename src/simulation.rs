use rand::Rng;
use serde::Serialize;

use crate::card::Card;
use crate::enums::Language;
use crate::rounds::fisher_yates;
use crate::winners::detect_winners;
use crate::word_banks::WordBanks;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub card_id: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub language: Language,
    pub calls: Vec<String>,
    pub winners: Vec<Winner>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GameReport {
    pub rounds: Vec<RoundReport>,
}

impl GameReport {
    pub fn winners(&self) -> impl Iterator<Item = &Winner> {
        self.rounds.iter().flat_map(|round| round.winners.iter())
    }
}

/// Plays the rounds in the given order.
///
/// Each round calls the bank words of its language in random order. After each
/// call the round's cards that have not won are marked and checked; winners are
/// flagged `won` and the round ends. A round with no cards or no bank calls
/// nothing.
pub fn play_game<R: Rng + ?Sized>(
    cards: &mut [Card],
    banks: &WordBanks,
    rounds: &[Language],
    rng: &mut R,
) -> GameReport {
    let mut report = GameReport::default();

    for &language in rounds {
        let round = play_round(cards, banks, language, rng);
        log::debug!(
            "Round {} ended after {} calls with {} winners",
            language,
            round.calls.len(),
            round.winners.len()
        );
        report.rounds.push(round);
    }

    report
}

fn play_round<R: Rng + ?Sized>(
    cards: &mut [Card],
    banks: &WordBanks,
    language: Language,
    rng: &mut R,
) -> RoundReport {
    let mut round = RoundReport {
        language,
        calls: Vec::new(),
        winners: Vec::new(),
    };

    let in_play = |card: &Card| card.language() == language && !card.won();
    if !cards.iter().any(in_play) {
        return round;
    }

    let call_order = fisher_yates(&banks.sorted_words(language), rng);

    for word in call_order {
        for card in cards.iter_mut().filter(|card| in_play(card)) {
            card.mark_word(&word);
        }
        round.calls.push(word);

        let winner_ids: Vec<String> = detect_winners(cards.iter().filter(|card| in_play(card)))
            .into_iter()
            .map(|card| card.id().to_string())
            .collect();

        if winner_ids.is_empty() {
            continue;
        }

        for card in cards.iter_mut() {
            if winner_ids.iter().any(|id| id == card.id()) {
                card.mark_won();
                round.winners.push(Winner {
                    card_id: card.id().to_string(),
                    owner: card.owner().to_string(),
                });
            }
        }
        break;
    }

    round
}
