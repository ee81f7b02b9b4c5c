//! Iterator helpers producing and consuming `Maybe`.

use std::iter::FusedIterator;

use crate::control::{Maybe, MaybeError};

/// Picks the first or the only element of an iterator as a `Maybe`.
///
/// Both methods pull as few elements as they can: `first_maybe` pulls at most
/// one, `single_maybe` at most two, so they are safe on unbounded iterators.
pub trait IteratorMaybeExt: Iterator + Sized {
    /// Returns the first element, or absent if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::extensions::IteratorMaybeExt;
    ///
    /// assert_eq!((1..).first_maybe(), Maybe::from_value(1));
    /// assert_eq!(std::iter::empty::<i32>().first_maybe(), Maybe::absent());
    /// ```
    #[inline]
    fn first_maybe(mut self) -> Maybe<Self::Item> {
        Maybe::from_option(self.next())
    }

    /// Returns the only element, or absent if the iterator is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::MoreThanOneElement`] as soon as a second element
    /// is seen. The rest of the iterator is not consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::{Maybe, MaybeError};
    /// use maybars::extensions::IteratorMaybeExt;
    ///
    /// assert_eq!(vec![7].into_iter().single_maybe(), Ok(Maybe::from_value(7)));
    /// assert_eq!(Vec::<i32>::new().into_iter().single_maybe(), Ok(Maybe::absent()));
    /// assert_eq!((1..).single_maybe(), Err(MaybeError::MoreThanOneElement));
    /// ```
    fn single_maybe(mut self) -> Result<Maybe<Self::Item>, MaybeError> {
        let Some(first) = self.next() else {
            return Ok(Maybe::absent());
        };
        if self.next().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("single_maybe rejected a sequence with a second element");
            return Err(MaybeError::MoreThanOneElement);
        }
        Ok(Maybe::from_value(first))
    }
}

impl<I: Iterator> IteratorMaybeExt for I {}

/// Flattens an iterator of `Maybe` into the present values.
pub trait MaybeValuesExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Yields the value of every present element in order, skipping absent ones.
    fn values(self) -> Values<Self> {
        Values { inner: self }
    }
}

impl<T, I: Iterator<Item = Maybe<T>>> MaybeValuesExt<T> for I {}

/// Iterator returned by [`MaybeValuesExt::values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<I> {
    inner: I,
}

impl<T, I> Iterator for Values<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.by_ref().find_map(Maybe::into_option)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T, I> DoubleEndedIterator for Values<I>
where
    I: DoubleEndedIterator<Item = Maybe<T>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.by_ref().rev().find_map(Maybe::into_option)
    }
}

impl<T, I> FusedIterator for Values<I> where I: FusedIterator<Item = Maybe<T>> {}
