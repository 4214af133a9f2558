//! Strict combinators: walk the list to completion and produce a scalar or
//! collection.
//!
//! Every operation here is an explicit iterative walk over
//! `head`/`tail`/`is_empty` (directly or through [`List::iter`]), so stack
//! depth is independent of list length. All of them diverge on unbounded
//! input; bounding an infinite source first is the caller's contract.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use im::{HashMap, HashSet};
use num_traits::{One, Zero};

use crate::list::List;

impl<T: Clone> List<T> {
    /// Left fold with an explicit seed.
    pub fn fold<B, F>(&self, seed: B, mut combine: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        let mut accumulator = seed;
        let mut node = self.clone();
        while let Some((head, tail)) = node.uncons() {
            accumulator = combine(accumulator, head);
            node = tail;
        }
        accumulator
    }

    /// Left fold seeded with the first element; `None` on the empty list.
    pub fn reduce<F>(&self, combine: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let (seed, rest) = self.uncons()?;
        Some(rest.fold(seed, combine))
    }

    /// Materialize into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.fold(Vec::new(), |mut items, item| {
            items.push(item);
            items
        })
    }

    /// The final element, or `None` on the empty list.
    pub fn last(&self) -> Option<T> {
        let mut latest = None;
        let mut node = self.clone();
        while let Some((head, tail)) = node.uncons() {
            latest = Some(head);
            node = tail;
        }
        latest
    }

    /// The element at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<T> {
        self.iter().nth(index)
    }

    /// First element satisfying the predicate.
    pub fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    /// Index of the first element satisfying the predicate.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().position(|item| predicate(&item))
    }

    /// True if any element satisfies the predicate.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// True if every element satisfies the predicate (vacuously true on the
    /// empty list).
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// True if no element satisfies the predicate.
    pub fn none<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// True if exactly one element satisfies the predicate: scan to the
    /// first match, then verify the remaining suffix holds no other.
    pub fn one<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut node = self.clone();
        while let Some((head, tail)) = node.uncons() {
            if predicate(&head) {
                return tail.none(predicate);
            }
            node = tail;
        }
        false
    }

    /// Number of elements satisfying the predicate.
    pub fn count_by<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// Smallest element by the comparator; `None` on the empty list. On
    /// ties the earlier element wins.
    pub fn minimum_by<F>(&self, compare: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.reduce(|best, item| {
            if compare(&item, &best) == Ordering::Less {
                item
            } else {
                best
            }
        })
    }

    /// Largest element by the comparator; `None` on the empty list. On
    /// ties the earlier element wins.
    pub fn maximum_by<F>(&self, compare: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.reduce(|best, item| {
            if compare(&item, &best) == Ordering::Greater {
                item
            } else {
                best
            }
        })
    }

    /// Group elements into a persistent map keyed by `key`.
    ///
    /// Groups are built by prepending during a single left-to-right scan,
    /// so elements within a group appear in reverse encounter order:
    /// `list![1, 2, 3, 4].group_by(|n| n % 2)` maps `1 => [3, 1]` and
    /// `0 => [4, 2]`.
    pub fn group_by<K, F>(&self, key: F) -> HashMap<K, List<T>>
    where
        K: Hash + Eq + Clone,
        F: Fn(&T) -> K,
    {
        self.fold(HashMap::new(), |groups, item| {
            let group = key(&item);
            let members = groups.get(&group).cloned().unwrap_or_else(List::empty);
            groups.update(group, members.cons(item))
        })
    }

    /// Render the elements separated by `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut rendered = String::new();
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                rendered.push_str(separator);
            }
            rendered.push_str(&item.to_string());
        }
        rendered
    }
}

impl<T: Clone + PartialEq> List<T> {
    /// True if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.any(|candidate| candidate == item)
    }

    /// Index of the first element equal to `item`.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.position(|candidate| candidate == item)
    }
}

impl<T: Clone + Ord> List<T> {
    /// Smallest element, or `None` on the empty list.
    pub fn minimum(&self) -> Option<T> {
        self.minimum_by(Ord::cmp)
    }

    /// Largest element, or `None` on the empty list.
    pub fn maximum(&self) -> Option<T> {
        self.maximum_by(Ord::cmp)
    }
}

impl<T: Clone + Hash + Eq> List<T> {
    /// Materialize into a persistent set; duplicates collapse.
    pub fn to_set(&self) -> HashSet<T> {
        self.fold(HashSet::new(), |set, item| set.update(item))
    }
}

impl<T: Clone + Zero> List<T> {
    /// Sum of the elements; zero on the empty list.
    pub fn sum(&self) -> T {
        self.fold(T::zero(), |total, item| total + item)
    }
}

impl<T: Clone + One> List<T> {
    /// Product of the elements; one on the empty list.
    pub fn product(&self) -> T {
        self.fold(T::one(), |total, item| total * item)
    }
}
