//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with sequencing where each step can depend
//! on the result of the previous one. For `Maybe`, the first absent step
//! short-circuits the rest of the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_option(s.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::from_value("42")
//!     .and_then(parse_positive)
//!     .and_then(|n| Maybe::from_value(n * 2));
//! assert_eq!(result, Maybe::from_value(84));
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe};

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Sequences a computation that depends on the inner value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        // Delegate to the inherent flat_map
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.flat_map_right(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_then_discards_first_value() {
        assert_eq!(Maybe::from_value(1).then(Maybe::from_value("b")), Maybe::from_value("b"));
        assert_eq!(Maybe::<i32>::absent().then(Maybe::from_value("b")), Maybe::absent());
    }

    #[rstest]
    fn maybe_and_then_short_circuits() {
        let result = Maybe::<i32>::absent().and_then(|_| -> Maybe<i32> { unreachable!() });
        assert!(!result.has_value());
    }

    #[rstest]
    fn either_flat_map_chains_right() {
        let value: Either<String, i32> = Either::Right(4);
        let result = Monad::flat_map(value, |n| {
            if n > 0 {
                Either::Right(n * 2)
            } else {
                Either::Left("negative".to_string())
            }
        });
        assert_eq!(result, Either::Right(8));
    }
}
