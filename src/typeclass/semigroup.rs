//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Semigroup;
//!
//! // Present values combine; an absent side is skipped.
//! let fizz = Maybe::from_value("Fizz".to_string());
//! let buzz = Maybe::from_value("Buzz".to_string());
//! assert_eq!(fizz.clone().combine(buzz), Maybe::from_value("FizzBuzz".to_string()));
//! assert_eq!(fizz.clone().combine(Maybe::absent()), fizz);
//! ```

use crate::control::Maybe;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values through references.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all elements of an iterator, or `None` if it is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Unit Implementation
// =============================================================================

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

// =============================================================================
// Maybe Implementation
// =============================================================================

impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self.into_option(), other.into_option()) {
            (Some(left), Some(right)) => Self::from_value(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Self::from_value(value),
            (None, None) => Self::absent(),
        }
    }
}
