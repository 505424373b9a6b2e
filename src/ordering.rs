// Canonical word order for cards.
//
// Cards keep their words sorted ascending so that a called word can be found
// with a binary search. The order is produced once, when the card is built.

/// Returns a new, ascending copy of `items` using a top-down merge sort.
///
/// Equal elements keep their relative order. The input is left untouched.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);

    merge(left, right)
}

fn merge<T: Ord + Clone>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // `<=` keeps the left element first on ties
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Orders a card's word list.
pub fn order_words(words: &[String]) -> Vec<String> {
    merge_sort(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_orders_words() {
        let input = words(&["casa", "auto", "barco"]);
        assert_eq!(order_words(&input), words(&["auto", "barco", "casa"]));
        // input untouched
        assert_eq!(input, words(&["casa", "auto", "barco"]));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(order_words(&[]).is_empty());
        assert_eq!(order_words(&words(&["gato"])), words(&["gato"]));
    }

    #[test]
    fn test_is_permutation_and_non_descending() {
        let input = words(&[
            "perro", "gato", "zorro", "abeja", "gato", "Zeta", "árbol", "oso", "ballena",
        ]);
        let ordered = order_words(&input);

        assert!(ordered.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(ordered, expected);
    }

    #[test]
    fn test_idempotent() {
        let input = words(&["d", "b", "a", "c", "e", "f", "a"]);
        let once = order_words(&input);
        let twice = order_words(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stable_on_ties() {
        // compare by key only; payload shows which element came first
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Keyed(u8, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let input = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        let ordered = merge_sort(&input);
        let payload: Vec<char> = ordered.iter().map(|k| k.1).collect();
        assert_eq!(payload, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_larger_input() {
        let input: Vec<String> = (0..200).rev().map(|i| format!("w{:03}", i)).collect();
        let ordered = order_words(&input);
        assert_eq!(ordered.first().map(String::as_str), Some("w000"));
        assert_eq!(ordered.last().map(String::as_str), Some("w199"));
        assert_eq!(ordered.len(), 200);
    }
}
