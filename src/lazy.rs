//! Deferred combinators: each returns a stream whose computation performs
//! one unit of work and yields either a terminal node or another lazy
//! continuation.
//!
//! Because no more of the source is consumed than a downstream strict
//! consumer actually forces, every operation here is safe over unbounded
//! sources such as [`repeat`](crate::build::repeat) or
//! [`iterate`](crate::build::iterate).
//!
//! Closures are held behind `Arc` so each recursive step can capture its own
//! handle; `skip` is the `drop` of other lazy-list vocabularies, renamed
//! because an inherent `drop` would shadow the destructor vocabulary of
//! `std`.

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::Arc;

use im::HashSet;

use crate::list::List;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

impl<T: Clone + Send + Sync + 'static> List<T> {
    /// Transform every element. `list![1, 2].map(|n| n * 10)` is `[10, 20]`.
    pub fn map<U, F>(&self, transform: F) -> List<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(transform))
    }

    fn map_shared<U>(&self, transform: Arc<dyn Fn(&T) -> U + Send + Sync>) -> List<U>
    where
        U: Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((head, tail)) => {
                let mapped = transform(&head);
                tail.map_shared(transform).cons(mapped)
            }
        })
    }

    /// Keep the elements satisfying the predicate.
    pub fn filter<F>(&self, predicate: F) -> List<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter_shared(Arc::new(predicate))
    }

    fn filter_shared(&self, predicate: Predicate<T>) -> List<T> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            loop {
                match node.uncons() {
                    None => return List::empty(),
                    Some((head, tail)) => {
                        if predicate(&head) {
                            return tail.filter_shared(predicate).cons(head);
                        }
                        node = tail;
                    }
                }
            }
        })
    }

    /// Drop the elements satisfying the predicate; dual of
    /// [`filter`](List::filter).
    pub fn remove<F>(&self, predicate: F) -> List<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter(move |item| !predicate(item))
    }

    /// The first `count` elements; fewer if the list runs out first.
    /// Taking nothing touches nothing: the source is only consumed one
    /// element per element actually yielded.
    pub fn take(&self, count: usize) -> List<T> {
        if count == 0 {
            return List::empty();
        }
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            Some((head, tail)) => tail.take(count - 1).cons(head),
            None => List::empty(),
        })
    }

    /// Everything after the first `count` elements.
    pub fn skip(&self, count: usize) -> List<T> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            let mut remaining = count;
            while remaining > 0 {
                match node.uncons() {
                    Some((_, tail)) => {
                        node = tail;
                        remaining -= 1;
                    }
                    None => return List::empty(),
                }
            }
            node
        })
    }

    /// The longest prefix whose elements all satisfy the predicate.
    pub fn take_while<F>(&self, predicate: F) -> List<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.take_while_shared(Arc::new(predicate))
    }

    fn take_while_shared(&self, predicate: Predicate<T>) -> List<T> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            Some((head, tail)) if predicate(&head) => {
                tail.take_while_shared(predicate).cons(head)
            }
            _ => List::empty(),
        })
    }

    /// Everything after the longest prefix satisfying the predicate.
    pub fn skip_while<F>(&self, predicate: F) -> List<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.skip_while_shared(Arc::new(predicate))
    }

    fn skip_while_shared(&self, predicate: Predicate<T>) -> List<T> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            while let Some((head, tail)) = node.uncons() {
                if !predicate(&head) {
                    break;
                }
                node = tail;
            }
            node
        })
    }

    /// This list followed by `other`. The empty list is the neutral element
    /// on either side.
    pub fn append(&self, other: &List<T>) -> List<T> {
        let left = self.clone();
        let right = other.clone();
        List::deferred(move || match left.uncons() {
            None => right,
            Some((head, tail)) => tail.append(&right).cons(head),
        })
    }

    /// The elements back to front, deferred as a single unit of work.
    pub fn reverse(&self) -> List<T> {
        let source = self.clone();
        List::deferred(move || source.fold(List::empty(), |reversed, item| reversed.cons(item)))
    }

    /// Pair elements positionally, truncating at the shorter input.
    pub fn zip<U>(&self, other: &List<U>) -> List<(T, U)>
    where
        U: Clone + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        List::deferred(move || match (left.uncons(), right.uncons()) {
            (Some((x, xs)), Some((y, ys))) => xs.zip(&ys).cons((x, y)),
            _ => List::empty(),
        })
    }

    /// The list repeated end-to-end forever; the empty list cycles to
    /// itself.
    pub fn cycle(&self) -> List<T> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((head, tail)) => tail.append(&source.cycle()).cons(head),
        })
    }

    /// `separator` between every pair of adjacent elements; none after the
    /// last.
    pub fn intersperse(&self, separator: T) -> List<T> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((head, tail)) => {
                if tail.is_empty() {
                    List::empty().cons(head)
                } else {
                    tail.intersperse(separator.clone())
                        .cons(separator)
                        .cons(head)
                }
            }
        })
    }

    /// Every element except the last; empty for lists shorter than two.
    pub fn init(&self) -> List<T> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((head, tail)) => {
                if tail.is_empty() {
                    List::empty()
                } else {
                    tail.init().cons(head)
                }
            }
        })
    }

    /// Every suffix, from the whole list down to the empty list. The tails
    /// of the empty list are the one-element list holding the empty list.
    pub fn tails(&self) -> List<List<T>> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty().cons(List::empty()),
            Some((_, tail)) => tail.tails().cons(source.clone()),
        })
    }

    /// Every prefix, from the empty list up to the whole list.
    pub fn inits(&self) -> List<List<T>> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty().cons(List::empty()),
            Some((head, tail)) => tail
                .inits()
                .map(move |prefix| prefix.cons(head.clone()))
                .cons(List::empty()),
        })
    }

    /// All `size`-element combinations in source order: each either keeps
    /// the head (joined with the smaller combinations of the tail) or skips
    /// it. `size` of zero yields exactly one empty combination.
    pub fn combinations(&self, size: usize) -> List<List<T>> {
        if size == 0 {
            return List::empty().cons(List::empty());
        }
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((head, tail)) => tail
                .combinations(size - 1)
                .map(move |chosen| chosen.cons(head.clone()))
                .append(&tail.combinations(size)),
        })
    }

    /// Consecutive runs of up to `size` elements; the last run may be
    /// short. A zero `size` yields the empty list.
    pub fn chunk(&self, size: usize) -> List<List<T>> {
        if size == 0 {
            return List::empty();
        }
        let source = self.clone();
        List::deferred(move || {
            if source.is_empty() {
                return List::empty();
            }
            let (run, rest) = source.split_at(size);
            rest.chunk(size).cons(run)
        })
    }

    /// Call `action` on each run of up to `size` elements.
    pub fn each_chunk<F>(&self, size: usize, mut action: F)
    where
        F: FnMut(List<T>),
    {
        for run in self.chunk(size).iter() {
            action(run);
        }
    }

    /// Indices of the elements satisfying the predicate, lazily.
    pub fn find_indices<F>(&self, predicate: F) -> List<usize>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.find_indices_from(0, Arc::new(predicate))
    }

    fn find_indices_from(&self, start: usize, predicate: Predicate<T>) -> List<usize> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            let mut index = start;
            loop {
                match node.uncons() {
                    None => return List::empty(),
                    Some((head, tail)) => {
                        if predicate(&head) {
                            return tail.find_indices_from(index + 1, predicate).cons(index);
                        }
                        node = tail;
                        index += 1;
                    }
                }
            }
        })
    }

    /// Fully materialize, sort stably by `compare`, and rebuild; deferred
    /// so sorting a lazily-produced source costs nothing until forced.
    pub fn sort_by<F>(&self, compare: F) -> List<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let source = self.clone();
        List::deferred(move || {
            let mut items = source.to_vec();
            items.sort_by(|a, b| compare(a, b));
            List::from(items)
        })
    }

    /// Lazy window of `length` elements starting at `from`.
    pub fn slice(&self, from: usize, length: usize) -> List<T> {
        self.skip(from).take(length)
    }

    // ========================================================================
    // Tuple-returning splits
    // ========================================================================

    /// The first `index` elements and the rest, both lazy.
    pub fn split_at(&self, index: usize) -> (List<T>, List<T>) {
        (self.take(index), self.skip(index))
    }

    /// The longest satisfying prefix and the rest, both lazy.
    pub fn span<F>(&self, predicate: F) -> (List<T>, List<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate: Predicate<T> = Arc::new(predicate);
        (
            self.take_while_shared(Arc::clone(&predicate)),
            self.skip_while_shared(predicate),
        )
    }

    /// [`span`](List::span) with the predicate inverted: the prefix runs up
    /// to the first satisfying element.
    pub fn break_on<F>(&self, predicate: F) -> (List<T>, List<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.span(move |item| !predicate(item))
    }

    /// The satisfying elements and the rest, in encounter order, both lazy.
    pub fn partition<F>(&self, predicate: F) -> (List<T>, List<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let keep: Predicate<T> = Arc::new(predicate);
        let discard = Arc::clone(&keep);
        (
            self.filter_shared(keep),
            self.filter_shared(Arc::new(move |item: &T| !discard(item))),
        )
    }
}

impl<T: Clone + Send + Sync + PartialEq + 'static> List<T> {
    /// Indices of the elements equal to `item`, lazily;
    /// [`find_indices`](List::find_indices) specialized to equality.
    pub fn indices_of(&self, item: &T) -> List<usize> {
        let item = item.clone();
        self.find_indices(move |candidate| *candidate == item)
    }
}

impl<T: Clone + Send + Sync + Ord + 'static> List<T> {
    /// [`sort_by`](List::sort_by) with the element type's natural order.
    pub fn sort(&self) -> List<T> {
        self.sort_by(Ord::cmp)
    }
}

impl<T: Clone + Send + Sync + Hash + Eq + 'static> List<T> {
    /// Drop duplicates, keeping each element's first occurrence.
    ///
    /// A persistent set accumulator is threaded immutably through the lazy
    /// recursion: each step captures its own snapshot, so sharing a
    /// partially-forced `uniq` across threads needs no extra locking.
    pub fn uniq(&self) -> List<T> {
        self.uniq_seen(HashSet::new())
    }

    fn uniq_seen(&self, seen: HashSet<T>) -> List<T> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            loop {
                match node.uncons() {
                    None => return List::empty(),
                    Some((head, tail)) => {
                        if seen.contains(&head) {
                            node = tail;
                            continue;
                        }
                        let seen = seen.update(head.clone());
                        return tail.uniq_seen(seen).cons(head);
                    }
                }
            }
        })
    }

    /// This list followed by the elements of `other` not already present.
    pub fn union(&self, other: &List<T>) -> List<T> {
        self.append(other).uniq()
    }
}

impl<T: Clone + Send + Sync + 'static> List<Option<T>> {
    /// Drop the `None`s, unwrapping what remains.
    pub fn compact(&self) -> List<T> {
        let source = self.clone();
        List::deferred(move || {
            let mut node = source;
            loop {
                match node.uncons() {
                    None => return List::empty(),
                    Some((Some(item), tail)) => return tail.compact().cons(item),
                    Some((None, tail)) => node = tail,
                }
            }
        })
    }
}
