//! The untyped absence marker.
//!
//! [`MaybeNot`] stands for "no value" before the element type is known. It
//! converts into an absent `Maybe<T>` for any `T`, which lets functions
//! return absence without naming the type parameter:
//!
//! ```rust
//! use maybars::control::{Maybe, NOT};
//!
//! fn how_lucky_is(number: i32) -> Maybe<&'static str> {
//!     if number == 13 {
//!         return Maybe::from_value("So lucky.");
//!     }
//!     NOT.into()
//! }
//!
//! assert!(!how_lucky_is(1).has_value());
//! ```

use std::fmt;

/// A stateless token meaning "no value, type not yet chosen".
///
/// `MaybeNot` only equals another `MaybeNot`. It has no `PartialEq`
/// implementation against `Maybe<T>`; convert it first if that comparison is
/// what you mean.
///
/// # Examples
///
/// ```rust
/// use maybars::control::{Maybe, MaybeNot};
///
/// let absent: Maybe<i32> = MaybeNot.into();
/// assert_eq!(absent, Maybe::absent());
/// assert_eq!(MaybeNot.to_string(), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaybeNot;

/// The [`MaybeNot`] value.
pub const NOT: MaybeNot = MaybeNot;

impl MaybeNot {
    /// Always `false`: the marker never holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        false
    }
}

impl fmt::Display for MaybeNot {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
