//! Composed head/tail accessors in the classic `c[ad]+r` spelling.
//!
//! One interpreter covers every composition instead of a method per name:
//! the selectors between `c` and `r` are folded over the receiver in
//! textually-reverse order, `a` taking the head and `d` the tail, so
//! `cadr` reads "head of the tail".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::list::List;

static ACCESSOR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^c([ad]+)r$").expect("accessor pattern is valid"));

/// The result of a composed accessor: an element when the outermost
/// selector was `a`, a list when it was `d`.
#[derive(Clone, Debug, PartialEq)]
pub enum Accessed<T> {
    /// A single element, produced by a final head step.
    Value(T),
    /// A remaining list, produced by a final tail step.
    Rest(List<T>),
}

impl<T: Clone> List<T> {
    /// Interpret a composed accessor name against this list.
    ///
    /// Usage: `list![1, 2, 3].accessor("cadr")` is `Some(Accessed::Value(2))`;
    /// `accessor("cddr")` is the list `[3]`. Returns `None` when the name
    /// does not match `c[ad]+r`, when a head step lands on an empty list,
    /// or when a selector asks for the head of something that is already an
    /// element.
    pub fn accessor(&self, name: &str) -> Option<Accessed<T>> {
        let captures = ACCESSOR_NAME.captures(name)?;
        let mut state = Accessed::Rest(self.clone());
        for selector in captures[1].chars().rev() {
            state = match (selector, state) {
                ('a', Accessed::Rest(list)) => Accessed::Value(list.head()?),
                ('d', Accessed::Rest(list)) => Accessed::Rest(list.tail()),
                _ => return None,
            };
        }
        Some(state)
    }
}
