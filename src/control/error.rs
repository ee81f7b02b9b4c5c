//! Error types for the control types.
//!
//! Absence itself is never an error: `Maybe` propagates it through every
//! combinator. These errors only surface when a caller explicitly demands a
//! value that is not there, when data breaks an "at most one" precondition,
//! or when an `Either` is built from a boundary value that is `None`.

use std::fmt;

/// Represents errors raised when a `Maybe` cannot produce what was asked of it.
///
/// # Examples
///
/// ```rust
/// use maybars::control::{Maybe, MaybeError};
///
/// let absent: Maybe<i32> = Maybe::absent();
/// assert_eq!(absent.into_value(), Err(MaybeError::NoValue));
/// assert_eq!(
///     format!("{}", MaybeError::NoValue),
///     "Maybe has no value."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeError {
    /// A value was demanded from an absent `Maybe`.
    NoValue,
    /// A sequence expected to hold at most one element held two or more.
    MoreThanOneElement,
}

impl fmt::Display for MaybeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValue => write!(formatter, "Maybe has no value."),
            Self::MoreThanOneElement => {
                write!(formatter, "Sequence contains more than one element.")
            }
        }
    }
}

impl std::error::Error for MaybeError {}

/// Represents a rejected `Either` construction.
///
/// `Either` always holds exactly one value, so building one from an
/// `Option` that is `None` is refused rather than producing an empty union.
///
/// # Examples
///
/// ```rust
/// use maybars::control::{Either, EitherError};
///
/// let rejected = Either::<i32, String>::try_left(None);
/// assert_eq!(rejected, Err(EitherError::NullLeft));
/// assert_eq!(
///     format!("{}", EitherError::NullLeft),
///     "left: Either cannot be initialized with a null value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EitherError {
    /// The left value given to the constructor was `None`.
    NullLeft,
    /// The right value given to the constructor was `None`.
    NullRight,
}

impl EitherError {
    /// Returns the name of the side whose value was missing.
    pub const fn side(&self) -> &'static str {
        match self {
            Self::NullLeft => "left",
            Self::NullRight => "right",
        }
    }
}

impl fmt::Display for EitherError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: Either cannot be initialized with a null value",
            self.side()
        )
    }
}

impl std::error::Error for EitherError {}
