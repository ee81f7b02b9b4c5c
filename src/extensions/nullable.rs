//! Bridging between `Option` and `Maybe`.
//!
//! `From` conversions exist in both directions; this module adds the
//! method-call forms used at the end of `Option`-returning chains.

use crate::control::Maybe;

/// Converts an `Option` into a `Maybe`, collapsing `None` into absence.
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::extensions::OptionExt;
///
/// let digit = "7".chars().next().and_then(|c| c.to_digit(10)).into_maybe();
/// assert_eq!(digit, Maybe::from_value(7));
///
/// let nothing: Option<u32> = None;
/// assert_eq!(nothing.into_maybe(), Maybe::absent());
/// ```
pub trait OptionExt<T> {
    /// Converts into a `Maybe`.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }
}

impl<T> Maybe<Option<T>> {
    /// Collapses a present `None` into absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(Some(1)).flatten_option(), Maybe::from_value(1));
    /// assert_eq!(Maybe::from_value(None::<i32>).flatten_option(), Maybe::absent());
    /// ```
    #[inline]
    pub fn flatten_option(self) -> Maybe<T> {
        self.map_option(|inner| inner)
    }
}
