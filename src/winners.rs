use crate::card::Card;

/// Returns the cards that have every word marked.
///
/// Candidates are ordered by deficit (words still missing), so the scan can stop
/// at the first card that still needs a word: everything after it needs at least
/// as many. Cards that already won should be filtered out by the caller; this
/// function does not touch the cards and never sets `won`.
pub fn detect_winners<'a, I>(cards: I) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut candidates: Vec<&Card> = cards.into_iter().collect();
    candidates.sort_by_key(|card| card.deficit());

    candidates
        .into_iter()
        .take_while(|card| card.deficit() == 0)
        .collect()
}
