//! Property tests for the algebraic laws of the combinator layer.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lazyseq::List;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Strategy for short element vectors; list laws do not need big inputs.
fn items() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..40)
}

fn pairs() -> impl Strategy<Value = Vec<(u8, u16)>> {
    prop::collection::vec((0u8..4, any::<u16>()), 0..40)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Laws
// ============================================================================

proptest! {
    #[test]
    fn reverse_twice_is_identity(items in items()) {
        let list = List::from(items);
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn append_empty_is_identity(items in items()) {
        let list = List::from(items);
        prop_assert_eq!(list.append(&List::empty()), list.clone());
        prop_assert_eq!(List::empty().append(&list), list);
    }

    #[test]
    fn append_length_is_sum(left in items(), right in items()) {
        let (m, n) = (left.len(), right.len());
        let joined = List::from(left).append(&List::from(right));
        prop_assert_eq!(joined.len(), m + n);
    }

    #[test]
    fn equal_lists_hash_equal(items in items()) {
        // Build the same contents by two unrelated construction paths.
        let eager = List::from(items.clone());
        let consed = items.iter().rev().fold(List::empty(), |l, i| l.cons(*i));
        prop_assert_eq!(&eager, &consed);
        prop_assert_eq!(hash_of(&eager), hash_of(&consed));
    }

    #[test]
    fn take_and_skip_partition_the_list(items in items(), at in 0usize..50) {
        let list = List::from(items);
        let (front, back) = list.split_at(at);
        prop_assert_eq!(front.append(&back), list);
    }

    #[test]
    fn filter_and_remove_partition_the_list(items in items()) {
        let list = List::from(items);
        let even = |n: &i64| n % 2 == 0;
        prop_assert_eq!(
            list.filter(even).len() + list.remove(even).len(),
            list.len()
        );
    }

    #[test]
    fn map_preserves_length(items in items()) {
        let list = List::from(items);
        prop_assert_eq!(list.map(|n| n.wrapping_mul(3)).len(), list.len());
    }

    #[test]
    fn sort_is_stable_on_equal_keys(items in pairs()) {
        let sorted = List::from(items.clone()).sort_by(|a, b| a.0.cmp(&b.0));

        let mut expected = items;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn uniq_keeps_first_occurrences_in_order(items in items()) {
        let deduped = List::from(items.clone()).uniq().to_vec();

        let mut seen = std::collections::HashSet::new();
        let expected: Vec<i64> = items.into_iter().filter(|i| seen.insert(*i)).collect();
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn zip_truncates_to_shorter(left in items(), right in items()) {
        let zipped = List::from(left.clone()).zip(&List::from(right.clone()));
        prop_assert_eq!(zipped.len(), left.len().min(right.len()));
    }

    #[test]
    fn tails_and_inits_count_length_plus_one(items in items()) {
        let list = List::from(items);
        prop_assert_eq!(list.tails().len(), list.len() + 1);
        prop_assert_eq!(list.inits().len(), list.len() + 1);
    }
}
