//! Persistent, immutable cons sequences with lazy, memoized streams.
//!
//! A [`List`] is a singly-linked sequence built from three node kinds behind
//! one value type: the terminal empty node, an eager cons pair, and a lazy
//! [`Stream`](stream::Stream) wrapping a deferred computation that resolves
//! exactly once, safely under concurrent access. Everything else, a
//! combinator algebra of some forty traversal and transformation
//! operations, is derived from the three primitives `head`, `tail` and
//! `is_empty`.
//!
//! Lists are never mutated in place; producing operations return new nodes
//! that share unchanged substructure by reference, so values can be handed
//! freely across threads. Lazy combinators consume no more of their source
//! than a strict consumer actually forces, which makes unbounded lists
//! ([`repeat`](build::repeat), [`iterate`](build::iterate),
//! [`cycle`](List::cycle)) first-class citizens:
//!
//! ```
//! use lazyseq::{build, list};
//!
//! let evens = build::iterate(0u64, |n| n + 1).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(4), list![0, 2, 4, 6]);
//! ```

pub mod accessor;
pub mod build;
pub mod list;
pub mod nested;
pub mod stream;

mod eager;
mod lazy;

// Re-export commonly used items for convenience
pub use accessor::Accessed;
pub use build::{generate, interval, iterate, repeat, replicate};
pub use list::{Iter, List};
pub use nested::Nested;
pub use stream::Stream;
