//! The lazy evaluation engine.
//!
//! A [`Stream`] holds a deferred computation that produces the next section of
//! a list. The computation runs at most once, no matter how many threads race
//! to force the same node; every forcer observes the identical outcome. Once
//! the computation has fired, it is discarded so its captured environment can
//! be released and it can never re-fire.

use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use crate::list::List;

/// A deferred computation producing the next section of a list.
pub(crate) type Thunk<T> = Box<dyn FnOnce() -> List<T> + Send>;

/// The mutually-exclusive state of a stream node.
pub(crate) enum Cell<T> {
    /// Not yet evaluated.
    Pending(Thunk<T>),
    /// Evaluated; the produced list may itself be another stream.
    Resolved(List<T>),
    /// The computation panicked; the message is replayed to every forcer.
    Failed(Arc<str>),
}

/// A lazy list node: a once-only memoizing slot around a deferred computation.
///
/// `Stream` is the single piece of mutable state in the whole crate. All
/// other nodes are immutable after construction, so lists can be shared
/// freely across threads; blocking happens only when two threads race to
/// force the same node for the first time, and lasts no longer than that
/// node's computation.
pub struct Stream<T> {
    cell: Mutex<Cell<T>>,
}

impl<T> Stream<T> {
    /// Wrap a deferred computation. Nothing runs until the node is forced.
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> List<T> + Send + 'static,
    {
        Stream {
            cell: Mutex::new(Cell::Pending(Box::new(thunk))),
        }
    }

    /// Single-level force: run the deferred computation if it has not run
    /// yet, memoize its outcome, and return the produced list.
    ///
    /// The produced list may itself be a stream; callers that need a
    /// concrete node loop via `List::concrete` rather than recursing, so
    /// stack usage stays flat however long the chain of nested streams is.
    ///
    /// # Panics
    ///
    /// If the deferred computation panicked (now or on any earlier force),
    /// panics with that same message.
    pub(crate) fn force(&self) -> List<T> {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        // Take the state out; the non-pending arms put it straight back.
        let thunk = match mem::replace(&mut *cell, Cell::Resolved(List::empty())) {
            Cell::Resolved(list) => {
                *cell = Cell::Resolved(list.clone());
                return list;
            }
            Cell::Failed(message) => {
                *cell = Cell::Failed(Arc::clone(&message));
                drop(cell);
                panic!("{message}");
            }
            Cell::Pending(thunk) => thunk,
        };
        // The lock is held across the computation so racing forcers block
        // until the memoized outcome is in place.
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(list) => {
                *cell = Cell::Resolved(list.clone());
                list
            }
            Err(payload) => {
                let message: Arc<str> = Arc::from(panic_message(payload.as_ref()));
                *cell = Cell::Failed(Arc::clone(&message));
                // Release the guard before unwinding so the mutex is not
                // poisoned; the failure state itself is the poison.
                drop(cell);
                panic!("{message}");
            }
        }
    }

    /// Consume the node, yielding whatever state it is in. Used by the
    /// iterative `Drop` for lists to dismantle resolved chains without
    /// recursion.
    pub(crate) fn into_cell(self) -> Cell<T> {
        self.cell
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "stream computation panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_force_memoizes_result() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let stream = Stream::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            List::empty().cons(42)
        });

        let first = stream.force();
        let second = stream.force();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_computation_replays_same_panic() {
        let stream: Stream<i64> = Stream::new(|| panic!("boom"));

        let first = panic::catch_unwind(AssertUnwindSafe(|| stream.force()));
        let second = panic::catch_unwind(AssertUnwindSafe(|| stream.force()));

        let first = first.unwrap_err();
        let second = second.unwrap_err();
        assert_eq!(first.downcast_ref::<String>().unwrap(), "boom");
        assert_eq!(second.downcast_ref::<String>().unwrap(), "boom");
    }

    #[test]
    fn test_thunk_is_discarded_after_firing() {
        // The captured Arc must be released once the stream resolves.
        let captured = Arc::new(());
        let witness = Arc::clone(&captured);
        let stream = Stream::new(move || {
            let _keep = &captured;
            List::<i64>::empty()
        });

        assert_eq!(Arc::strong_count(&witness), 2);
        stream.force();
        assert_eq!(Arc::strong_count(&witness), 1);
    }
}
