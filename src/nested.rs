//! Arbitrary-depth nesting for `flatten`.
//!
//! A dynamically-typed list can mix elements and sublists freely; a typed
//! one needs the mixture spelled out. [`Nested`] is that spelling: each
//! element of a `List<Nested<T>>` is either a leaf value or another list of
//! the same shape, nested as deep as required.

use crate::list::List;

/// One element of a nestable list: a leaf value or a sublist.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    /// A leaf value.
    Item(T),
    /// A sublist, itself possibly holding further sublists.
    List(List<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}

impl<T: Clone + Send + Sync + 'static> List<Nested<T>> {
    /// Flatten sublists at every nesting depth into a single lazy list of
    /// leaves, preserving left-to-right order.
    pub fn flatten(&self) -> List<T> {
        let source = self.clone();
        List::deferred(move || match source.uncons() {
            None => List::empty(),
            Some((Nested::Item(item), tail)) => tail.flatten().cons(item),
            Some((Nested::List(sublist), tail)) => sublist.flatten().append(&tail.flatten()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_flatten_every_depth() {
        let deep = list![
            Nested::Item(1),
            Nested::List(list![
                Nested::Item(2),
                Nested::List(list![Nested::Item(3), Nested::Item(4)]),
            ]),
            Nested::Item(5),
        ];
        assert_eq!(deep.flatten(), list![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_drops_empty_sublists() {
        let ragged: List<Nested<i64>> =
            list![Nested::List(List::empty()), Nested::Item(7)];
        assert_eq!(ragged.flatten(), list![7]);
    }
}
