//! Either type - a value that is one of two types.
//!
//! This module provides the `Either<L, R>` type, which holds exactly one
//! value: a `Left(L)` or a `Right(R)`. Unlike `Maybe`, there is no empty
//! state.
//!
//! - [`Either::fold`] runs exactly one of two branches and is the way to get
//!   the value out; there is no unchecked unwrap
//! - [`Either::flip`] swaps the sides
//! - [`Either::flat_map_left`] chains on the left value, passing a right value through
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let describe = |either: Either<i32, String>| {
//!     either.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"))
//! };
//! assert_eq!(describe(left), "Number: 42");
//! assert_eq!(describe(right.clone()), "String: hello");
//!
//! assert_eq!(right.flip(), Either::Left("hello".to_string()));
//! ```

use std::fmt;

use super::error::EitherError;
use super::maybe::Maybe;

/// A value that is one of two types.
///
/// `Either<L, R>` is `Left(L)` or `Right(R)`. The two sides are symmetric;
/// by convention `Left` is the primary outcome and `Right` the alternate.
///
/// The variants are public, so `Either::Left(value)` and
/// `Either::Right(value)` are the constructors. When `L` and `R` are the same
/// type the variant name is what disambiguates.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use maybars::control::Either;
///
/// let success: Either<i32, String> = Either::Left(42);
/// let doubled = success.map_left(|x| x * 2);
/// assert_eq!(doubled, Either::Left(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction From Boundary Values
    // =========================================================================

    /// Builds a `Left` from a value that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullLeft`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::{Either, EitherError};
    ///
    /// assert_eq!(Either::<i32, String>::try_left(Some(1)), Ok(Either::Left(1)));
    /// assert_eq!(Either::<i32, String>::try_left(None), Err(EitherError::NullLeft));
    /// ```
    #[inline]
    pub fn try_left(value: Option<L>) -> Result<Self, EitherError> {
        value.map(Self::Left).ok_or(EitherError::NullLeft)
    }

    /// Builds a `Right` from a value that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullRight`] if `value` is `None`.
    #[inline]
    pub fn try_right(value: Option<R>) -> Result<Self, EitherError> {
        value.map(Self::Right).ok_or(EitherError::NullRight)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Projects the left value into a `Maybe`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::from_value(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), Maybe::absent());
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::from_value(value),
            Self::Right(_) => Maybe::absent(),
        }
    }

    /// Projects the right value into a `Maybe`, consuming the either.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::absent(),
            Self::Right(value) => Maybe::from_value(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::from_value(value),
            Self::Right(_) => Maybe::absent(),
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::absent(),
            Self::Right(value) => Maybe::from_value(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the left value.
    ///
    /// If this is `Left(l)`, returns `function(l)`. If this is `Right(r)`,
    /// returns `Right(r)` with the new left type; `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Either;
    ///
    /// let halve = |n: i32| -> Either<i32, String> {
    ///     if n % 2 == 0 { Either::Left(n / 2) } else { Either::Right(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(Either::<i32, String>::Left(8).flat_map_left(halve), Either::Left(4));
    /// assert_eq!(
    ///     Either::<i32, String>::Left(3).flat_map_left(halve),
    ///     Either::Right("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// The mirror image of [`Either::flat_map_left`].
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying exactly one of two functions.
    ///
    /// This is the case analysis for `Either`: `left_function` runs for a
    /// `Left`, `right_function` for a `Right`, and the other is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Flip Operation
    // =========================================================================

    /// Swaps the Left and Right variants, keeping the value.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.clone().flip().flip(), left);
    /// assert_eq!(left.flip(), Either::Right(42));
    /// ```
    #[inline]
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    #[case(Either::<String, i32>::try_left(None), EitherError::NullLeft)]
    #[case(Either::<String, i32>::try_right(None), EitherError::NullRight)]
    fn test_construction_from_none_is_rejected(
        #[case] result: Result<Either<String, i32>, EitherError>,
        #[case] expected: EitherError,
    ) {
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn test_fold_runs_exactly_one_branch() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);
        let value: Either<i32, String> = Either::Left(1);
        let result = value.fold(
            |n| {
                left_calls.set(left_calls.get() + 1);
                n
            },
            |_| {
                right_calls.set(right_calls.get() + 1);
                0
            },
        );
        assert_eq!(result, 1);
        assert_eq!((left_calls.get(), right_calls.get()), (1, 0));
    }

    #[rstest]
    fn test_flat_map_left_passes_right_through() {
        let value: Either<i32, String> = Either::Right("kept".to_string());
        let result: Either<bool, String> = value.flat_map_left(|_| unreachable!());
        assert_eq!(result, Either::Right("kept".to_string()));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
