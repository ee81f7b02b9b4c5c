//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! For `Maybe<T>` where `T` is a semigroup, the absent value is the identity,
//! which turns any semigroup into a monoid.
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Monoid;
//!
//! let words = vec![
//!     Maybe::from_value("a".to_string()),
//!     Maybe::absent(),
//!     Maybe::from_value("b".to_string()),
//! ];
//! assert_eq!(Maybe::combine_all(words), Maybe::from_value("ab".to_string()));
//! assert_eq!(Maybe::<String>::combine_all(Vec::new()), Maybe::absent());
//! ```

use super::semigroup::Semigroup;
use crate::control::Maybe;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::absent()
    }
}
