use rand::Rng;

use crate::enums::Language;

/// Uniformly random permutation of `items` (Fisher–Yates, walking from the back).
///
/// The input is not modified; the caller supplies the random source so that
/// tests and simulations can seed it.
pub fn fisher_yates<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Random order in which the rounds are played.
pub fn shuffle_rounds<R: Rng + ?Sized>(languages: &[Language], rng: &mut R) -> Vec<Language> {
    fisher_yates(languages, rng)
}
