//! Construction entry points for unbounded and generated lists.
//!
//! Finite lists come from [`list!`](crate::list!) or `FromIterator`; the
//! builders here produce lazy, potentially infinite sources that consume no
//! work until a downstream operation forces them.

use std::ops::Add;
use std::sync::Arc;

use num_traits::One;

use crate::list::List;

/// An unbounded list built by re-invoking a generator once per element.
///
/// Usage: `generate(|| next_reading())` never terminates on its own; bound
/// it with `take` or a `*_while` combinator.
pub fn generate<T, F>(generator: F) -> List<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    generate_shared(Arc::new(generator))
}

fn generate_shared<T>(generator: Arc<dyn Fn() -> T + Send + Sync>) -> List<T>
where
    T: Clone + Send + Sync + 'static,
{
    List::deferred(move || {
        let head = generator();
        generate_shared(Arc::clone(&generator)).cons(head)
    })
}

/// The inclusive range `from, from + 1, ..., to` as a lazy list; empty when
/// `from > to`.
pub fn interval<T>(from: T, to: T) -> List<T>
where
    T: Clone + Send + Sync + PartialOrd + Add<Output = T> + One + 'static,
{
    List::deferred(move || {
        if from > to {
            return List::empty();
        }
        let next = from.clone() + T::one();
        interval(next, to).cons(from)
    })
}

/// The infinite list `item, item, item, ...`.
pub fn repeat<T>(item: T) -> List<T>
where
    T: Clone + Send + Sync + 'static,
{
    List::deferred(move || repeat(item.clone()).cons(item))
}

/// The first `count` elements of [`repeat`]; zero yields the empty list.
pub fn replicate<T>(count: usize, item: T) -> List<T>
where
    T: Clone + Send + Sync + 'static,
{
    repeat(item).take(count)
}

/// The infinite list `seed, step(seed), step(step(seed)), ...`.
pub fn iterate<T, F>(seed: T, step: F) -> List<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    iterate_shared(seed, Arc::new(step))
}

fn iterate_shared<T>(seed: T, step: Arc<dyn Fn(&T) -> T + Send + Sync>) -> List<T>
where
    T: Clone + Send + Sync + 'static,
{
    List::deferred(move || {
        let next = step(&seed);
        iterate_shared(next, step).cons(seed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_inclusive() {
        assert_eq!(interval(1, 5), crate::list![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_interval_empty_when_reversed() {
        assert!(interval(5, 1).is_empty());
        assert_eq!(interval(3, 3), crate::list![3]);
    }

    #[test]
    fn test_repeat_and_replicate() {
        assert_eq!(repeat('x').take(3), crate::list!['x', 'x', 'x']);
        assert_eq!(replicate(2, 9), crate::list![9, 9]);
        assert!(replicate(0, 9).is_empty());
    }

    #[test]
    fn test_iterate_applies_step() {
        let powers = iterate(1u64, |n| n * 2);
        assert_eq!(powers.take(5), crate::list![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_generate_reinvokes_generator() {
        use std::sync::atomic::{AtomicU64, Ordering};
        let counter = Arc::new(AtomicU64::new(0));
        let source = Arc::clone(&counter);
        let ticks = generate(move || source.fetch_add(1, Ordering::SeqCst));
        assert_eq!(ticks.take(3), crate::list![0, 1, 2]);
    }
}
