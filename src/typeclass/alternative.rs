//! Alternative type class - choice between computations.
//!
//! `Alternative` adds an identity for choice (`empty`) and a left-biased
//! choice (`alt`). For `Maybe`, `alt` is the "else" fallback between two
//! optional values, and `guard` turns a condition into presence or absence.
//!
//! # Laws
//!
//! ```text
//! Self::empty().alt(x) == x
//! x.alt(Self::empty()) == x
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Alternative;
//!
//! let primary: Maybe<&str> = Maybe::absent();
//! let fallback = Maybe::from_value("fallback");
//! assert_eq!(primary.alt(fallback), Maybe::from_value("fallback"));
//!
//! let first = <Maybe<i32>>::choice(vec![Maybe::absent(), Maybe::from_value(2), Maybe::from_value(3)]);
//! assert_eq!(first, Maybe::from_value(2));
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for applicatives with a monoidal choice.
pub trait Alternative: Applicative {
    /// The identity for [`Alternative::alt`].
    fn empty<A>() -> Self::WithType<A>;

    /// Returns `self` if it succeeded, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::typeclass::Alternative;
    ///
    /// assert_eq!(<Maybe<()>>::guard(true), Maybe::from_value(()));
    /// assert_eq!(<Maybe<()>>::guard(false), Maybe::absent());
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Makes failure explicit: always succeeds, wrapping the original outcome.
    fn optional(self) -> Self::WithType<Self::WithType<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first successful alternative.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::absent()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Maybe<Self> {
        Maybe::from_value(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::has_value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::from_value(1), Maybe::from_value(2), Maybe::from_value(1))]
    #[case(Maybe::absent(), Maybe::from_value(2), Maybe::from_value(2))]
    #[case(Maybe::from_value(1), Maybe::absent(), Maybe::from_value(1))]
    #[case(Maybe::absent(), Maybe::absent(), Maybe::absent())]
    fn maybe_alt(#[case] first: Maybe<i32>, #[case] second: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn maybe_empty_is_absent() {
        let empty: Maybe<String> = <Maybe<()> as Alternative>::empty();
        assert_eq!(empty, Maybe::absent());
    }

    #[rstest]
    fn maybe_optional_always_present() {
        assert_eq!(Maybe::<i32>::absent().optional(), Maybe::from_value(Maybe::absent()));
        assert_eq!(Maybe::from_value(1).optional(), Maybe::from_value(Maybe::from_value(1)));
    }

    #[rstest]
    fn maybe_choice_of_nothing_is_absent() {
        assert_eq!(<Maybe<i32>>::choice(Vec::new()), Maybe::absent());
    }

    #[rstest]
    fn maybe_guard_filters_in_chains() {
        let keep_even = |n: i32| <Maybe<()>>::guard(n % 2 == 0).map(|()| n);
        assert_eq!(keep_even(4), Maybe::from_value(4));
        assert_eq!(keep_even(3), Maybe::absent());
    }
}
