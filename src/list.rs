//! The three-variant persistent list.
//!
//! A [`List`] is one of three nodes behind a single value type:
//!
//! - **Empty**: the terminal node. `head` is `None`, `tail` is itself.
//! - **Cons**: a realized head plus a shared reference to a tail.
//! - **Stream**: a deferred computation that forces to one of the other
//!   two, exactly once, safely under concurrent access.
//!
//! Nothing is ever mutated in place: every producing operation returns a new
//! node that shares unchanged substructure by reference. Cloning a list is a
//! reference-count bump, not a copy, so lists can be handed across threads
//! and reused as the tail of many other lists at once.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use crate::stream::{Cell, Stream};

/// An eager pair node: a realized head and a shared tail.
pub(crate) struct Sequence<T> {
    pub(crate) head: T,
    pub(crate) tail: List<T>,
}

pub(crate) enum Repr<T> {
    Empty,
    Cons(Arc<Sequence<T>>),
    Stream(Arc<Stream<T>>),
}

/// A persistent, immutable, singly-linked sequence with lazy tails.
///
/// Finite lists are built with [`list!`](crate::list!), [`List::from`] or
/// [`FromIterator`]; unbounded ones with the constructors in
/// [`build`](crate::build). The whole combinator algebra is derived from
/// three primitives: [`head`](List::head), [`tail`](List::tail) and
/// [`is_empty`](List::is_empty).
pub struct List<T>(pub(crate) Repr<T>);

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List(match &self.0 {
            Repr::Empty => Repr::Empty,
            Repr::Cons(node) => Repr::Cons(Arc::clone(node)),
            Repr::Stream(node) => Repr::Stream(Arc::clone(node)),
        })
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T> List<T> {
    /// The terminal node. All empty lists are indistinguishable immutable
    /// values; no allocation happens here.
    pub fn empty() -> List<T> {
        List(Repr::Empty)
    }

    /// Prepend an element, returning a new list whose tail is the receiver.
    ///
    /// O(1); the receiver is shared by reference, never copied.
    pub fn cons(&self, item: T) -> List<T> {
        List(Repr::Cons(Arc::new(Sequence {
            head: item,
            tail: self.clone(),
        })))
    }
}

impl<T: 'static> List<T> {
    /// Wrap a deferred computation as a lazy list node.
    ///
    /// The computation runs at most once, on first forcing, and every
    /// forcer observes the identical result. See [`Stream`].
    pub fn deferred<F>(thunk: F) -> List<T>
    where
        F: FnOnce() -> List<T> + Send + 'static,
    {
        List(Repr::Stream(Arc::new(Stream::new(thunk))))
    }
}

/// Build a finite list from explicit values.
///
/// Usage: `list![1, 2, 3]` builds the list `[1, 2, 3]`; `list![]` is the
/// empty list (an element type must be inferable from context).
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::List::from(::std::vec![$($item),+])
    };
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        let mut list = List::empty();
        for item in items.into_iter().rev() {
            list = list.cons(item);
        }
        list
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::from(iter.into_iter().collect::<Vec<T>>())
    }
}

// ============================================================================
// Primitives
// ============================================================================

impl<T> List<T> {
    /// Force until the current node is concrete (Empty or Cons), never a
    /// stream. Implemented as a loop, not recursion: combinator chains can
    /// stack arbitrarily many nested streams, and resolving them must use
    /// O(1) stack however long the run is.
    pub(crate) fn concrete(&self) -> List<T> {
        let mut node = self.clone();
        loop {
            let stream = match &node.0 {
                Repr::Stream(stream) => Arc::clone(stream),
                _ => return node,
            };
            node = stream.force();
        }
    }

    /// True iff the fully-forced node is the terminal node.
    pub fn is_empty(&self) -> bool {
        matches!(self.concrete().0, Repr::Empty)
    }

    /// The rest of the list after the first element. The tail of the empty
    /// list is the empty list.
    pub fn tail(&self) -> List<T> {
        match &self.concrete().0 {
            Repr::Cons(node) => node.tail.clone(),
            _ => List::empty(),
        }
    }

    /// Node identity (not structural equality): true iff both values are
    /// the same node. The tail handed to [`cons`](List::cons) stays shared,
    /// so `xs.cons(x).tail().ptr_eq(&xs)` holds.
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.0, &other.0) {
            (Repr::Empty, Repr::Empty) => true,
            (Repr::Cons(a), Repr::Cons(b)) => Arc::ptr_eq(a, b),
            (Repr::Stream(a), Repr::Stream(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of elements. Walks the whole list; never returns on an
    /// unbounded one.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut node = self.concrete();
        loop {
            let next = match &node.0 {
                Repr::Cons(cell) => cell.tail.concrete(),
                _ => return count,
            };
            count += 1;
            node = next;
        }
    }
}

impl<T: Clone> List<T> {
    /// The first element, or `None` on the empty list.
    pub fn head(&self) -> Option<T> {
        match &self.concrete().0 {
            Repr::Cons(node) => Some(node.head.clone()),
            _ => None,
        }
    }

    /// Alias for [`head`](List::head).
    pub fn first(&self) -> Option<T> {
        self.head()
    }

    /// Head and tail in one resolution step, or `None` on the empty list.
    /// The workhorse of every combinator thunk.
    pub fn uncons(&self) -> Option<(T, List<T>)> {
        match &self.concrete().0 {
            Repr::Cons(node) => Some((node.head.clone(), node.tail.clone())),
            _ => None,
        }
    }

    /// Iterate the elements front to back. The iterator holds its own
    /// reference into the list, so it forces no more than it yields.
    pub fn iter(&self) -> Iter<T> {
        Iter { node: self.clone() }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// An iterator over the elements of a [`List`], forcing lazily as it goes.
#[derive(Clone)]
pub struct Iter<T> {
    node: List<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (head, tail) = self.node.uncons()?;
        self.node = tail;
        Some(head)
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter { node: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a List<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

// ============================================================================
// Equality, hashing, formatting
// ============================================================================

// Structural: same length and pairwise-equal elements in order, not node
// identity. Shared nodes short-circuit the walk.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.concrete();
        let mut right = other.concrete();
        loop {
            if left.ptr_eq(&right) {
                return true;
            }
            match (&left.0, &right.0) {
                (Repr::Empty, Repr::Empty) => return true,
                (Repr::Cons(a), Repr::Cons(b)) => {
                    if a.head != b.head {
                        return false;
                    }
                    let (next_left, next_right) = (a.tail.concrete(), b.tail.concrete());
                    left = next_left;
                    right = next_right;
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

// Element-by-element, order-sensitive accumulation: equal lists always
// produce equal hashes.
impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length: usize = 0;
        let mut node = self.concrete();
        loop {
            let next = match &node.0 {
                Repr::Cons(cell) => {
                    cell.head.hash(state);
                    length += 1;
                    cell.tail.concrete()
                }
                _ => break,
            };
            node = next;
        }
        state.write_usize(length);
    }
}

// Diagnostics only: forces the whole list.
impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut node = self.concrete();
        loop {
            let next = match &node.0 {
                Repr::Cons(cell) => {
                    entries.entry(&cell.head);
                    cell.tail.concrete()
                }
                _ => break,
            };
            node = next;
        }
        entries.finish()
    }
}

// ============================================================================
// Teardown
// ============================================================================

// Dropping the last reference to a long chain must not recurse per node.
// Uniquely-owned nodes are dismantled in a loop; the walk stops at the first
// node something else still references.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut repr = mem::replace(&mut self.0, Repr::Empty);
        loop {
            repr = match repr {
                Repr::Empty => return,
                Repr::Cons(node) => match Arc::try_unwrap(node) {
                    Ok(node) => {
                        let mut tail = node.tail;
                        mem::replace(&mut tail.0, Repr::Empty)
                    }
                    Err(_) => return,
                },
                Repr::Stream(node) => match Arc::try_unwrap(node) {
                    Ok(node) => match node.into_cell() {
                        Cell::Resolved(mut inner) => mem::replace(&mut inner.0, Repr::Empty),
                        _ => return,
                    },
                    Err(_) => return,
                },
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cons_shares_tail_by_reference() {
        let base = list![2, 3];
        let extended = base.cons(1);
        assert!(extended.tail().ptr_eq(&base));
    }

    #[test]
    fn test_empty_primitives() {
        let empty: List<i64> = List::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.head(), None);
        assert!(empty.tail().is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: List<u64> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_debug_renders_bracketed() {
        assert_eq!(format!("{:?}", list![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i64>::empty()), "[]");
    }
}
