//! Committing a `Maybe` to an `Either`.

use crate::control::{Either, Maybe};

impl<L> Maybe<L> {
    /// Turns a present value into `Left`, or builds a `Right` from
    /// `right_factory` when absent.
    ///
    /// `right_factory` is only called when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::{Either, Maybe};
    ///
    /// let cached = Maybe::from_value("cached");
    /// assert_eq!(cached.or_either(|| 404), Either::Left("cached"));
    ///
    /// let missing: Maybe<&str> = Maybe::absent();
    /// assert_eq!(missing.or_either(|| 404), Either::Right(404));
    /// ```
    pub fn or_either<R, F>(self, right_factory: F) -> Either<L, R>
    where
        F: FnOnce() -> R,
    {
        match self.into_option() {
            Some(value) => Either::Left(value),
            None => Either::Right(right_factory()),
        }
    }
}
