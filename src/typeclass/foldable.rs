//! Foldable type class - reducing a structure to a summary value.
//!
//! A `Maybe` folds like a sequence of zero or one element, which is what lets
//! it take part in generic reductions alongside collections.
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Foldable;
//!
//! assert_eq!(Maybe::from_value(5).fold_left(10, |acc, n| acc + n), 15);
//! assert_eq!(Maybe::<i32>::absent().fold_left(10, |acc, n| acc + n), 10);
//! assert_eq!(Maybe::from_value(5).length(), 1);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::control::{Either, Maybe};

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// let shown: String = Maybe::from_value(7).fold_map(|n| n.to_string());
    /// assert_eq!(shown, "7");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure holds no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Counts the elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self.into_option() {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self.into_option() {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.has_value())
    }
}

// =============================================================================
// Either<L, R> Implementation (folds the right value)
// =============================================================================

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_fold_right_present() {
        assert_eq!(Maybe::from_value(3).fold_right(1, |n, acc| n * acc), 3);
    }

    #[rstest]
    #[case(Maybe::from_value(4), true, true)]
    #[case(Maybe::from_value(3), false, false)]
    #[case(Maybe::absent(), false, true)]
    fn maybe_exists_and_for_all(
        #[case] value: Maybe<i32>,
        #[case] exists: bool,
        #[case] for_all: bool,
    ) {
        assert_eq!(value.exists(|n| n % 2 == 0), exists);
        assert_eq!(value.for_all(|n| n % 2 == 0), for_all);
    }

    #[rstest]
    fn maybe_to_list() {
        assert_eq!(Maybe::from_value("a").to_list(), vec!["a"]);
        assert!(Maybe::<&str>::absent().to_list().is_empty());
    }

    #[rstest]
    fn either_folds_right_only() {
        let left: Either<&str, i32> = Either::Left("ignored");
        let right: Either<&str, i32> = Either::Right(2);
        assert_eq!(left.fold_left(1, |acc, n| acc + n), 1);
        assert_eq!(right.fold_left(1, |acc, n| acc + n), 3);
        assert_eq!(left.length(), 0);
        assert_eq!(right.length(), 1);
    }
}
