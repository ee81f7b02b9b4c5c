//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either present (holding
//! a `T`) or absent. Absence is part of the type, so it has to be dealt with
//! explicitly before a value can be used:
//!
//! - Construction collapses `None` into an absent `Maybe` ([`Maybe::from_option`])
//! - Combinators (`map`, `filter`, `flat_map`) never call their function on
//!   an absent value
//! - A concrete value is only reached through a fallback
//!   ([`Maybe::get_or_else`]) or a checked unwrap ([`Maybe::into_value`])
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//!
//! let number = Maybe::from_value(21);
//! assert_eq!(number.map(|n| n * 2), Maybe::from_value(42));
//!
//! let nothing: Maybe<i32> = Maybe::absent();
//! assert_eq!(nothing.map(|n| n * 2).get_or_else(0), 0);
//!
//! // Absent values of the same type are equal, and equal to the default.
//! assert_eq!(nothing, Maybe::default());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::error::MaybeError;
use super::maybe_not::MaybeNot;

/// A value that is either present or absent.
///
/// `Maybe<T>` has value semantics: it is immutable after construction, and
/// every combinator returns a new `Maybe`. The default value is always the
/// absent state.
///
/// Equality and hashing are structural: two `Maybe<T>` are equal when both
/// are absent, or both are present with equal values. The presence flag is
/// hashed before the value, so equal instances always hash equally. Values of
/// different element types cannot be compared at all; for a type-erased
/// comparison see [`ErasedMaybe`](super::ErasedMaybe).
///
/// Absent values order before present ones.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
///
/// let present = Maybe::from_value("hi");
/// assert!(present.has_value());
/// assert!(present.is(&"hi"));
///
/// let absent: Maybe<&str> = Maybe::from_option(None);
/// assert!(!absent.has_value());
/// assert_eq!(absent.to_string(), "");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T> {
    value: Option<T>,
}

assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Default, std::hash::Hash, Ord);
assert_impl_all!(Maybe<String>: Send, Sync, Clone, Default, std::hash::Hash);
assert_not_impl_any!(Maybe<String>: Copy);
assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present `Maybe` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert!(Maybe::from_value(1).has_value());
    /// ```
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a `Maybe` from an `Option`, collapsing `None` into absence.
    ///
    /// This is the boundary where "no value" representations from other APIs
    /// enter the crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::from_value(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::absent());
    /// ```
    #[inline]
    pub const fn from_option(option: Option<T>) -> Self {
        Self { value: option }
    }

    /// Creates an absent `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let absent: Maybe<String> = Maybe::absent();
    /// assert!(!absent.has_value());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self { value: None }
    }

    /// Creates an absent `Maybe`; a synonym of [`Maybe::absent`] that reads
    /// naturally at return sites.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// fn lookup(key: &str) -> Maybe<u32> {
    ///     if key == "answer" { Maybe::from_value(42) } else { Maybe::not() }
    /// }
    /// assert_eq!(lookup("question"), Maybe::absent());
    /// ```
    #[inline]
    pub const fn not() -> Self {
        Self::absent()
    }

    /// Returns `value` as a present `Maybe` when `condition` holds, otherwise absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::when(true, "Fizz"), Maybe::from_value("Fizz"));
    /// assert_eq!(Maybe::when(false, "Fizz"), Maybe::absent());
    /// ```
    #[inline]
    pub fn when(condition: bool, value: T) -> Self {
        if condition {
            Self::from_value(value)
        } else {
            Self::absent()
        }
    }

    /// Like [`Maybe::when`], but only calls `factory` when `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let skipped: Maybe<i32> = Maybe::when_with(false, || unreachable!());
    /// assert!(!skipped.has_value());
    /// assert_eq!(Maybe::when_with(true, || 1), Maybe::from_value(1));
    /// ```
    #[inline]
    pub fn when_with<F>(condition: bool, factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if condition {
            Self::from_value(factory())
        } else {
            Self::absent()
        }
    }

    /// Like [`Maybe::when_with`], for factories that may themselves return `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert!(!Maybe::<i32>::when_some(true, || None).has_value());
    /// assert_eq!(Maybe::when_some(true, || Some(1)), Maybe::from_value(1));
    /// ```
    #[inline]
    pub fn when_some<F>(condition: bool, factory: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        if condition {
            Self::from_option(factory())
        } else {
            Self::absent()
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if a value is present and equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let name = Maybe::from_value("hi".to_string());
    /// assert!(name.is("hi"));
    /// assert!(!name.is("bye"));
    /// assert!(!Maybe::<String>::absent().is("hi"));
    /// ```
    #[inline]
    pub fn is<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.value.as_ref().is_some_and(|contained| contained == value)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert!(Maybe::from_value(1).is_and(|n| n % 2 == 1));
    /// assert!(!Maybe::from_value(1).is_and(|n| n % 2 == 0));
    /// ```
    #[inline]
    pub fn is_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value.as_ref().is_some_and(predicate)
    }

    /// Returns a reference to the contained value as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts into an `Option`, consuming the `Maybe`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Borrows the contents, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `function` is never called when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(1).map(|n| n.to_string()), Maybe::from_value("1".to_string()));
    ///
    /// let absent: Maybe<i32> = Maybe::absent();
    /// assert!(!absent.map(|_| -> i32 { panic!("never called") }).has_value());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(function),
        }
    }

    /// Applies a function that may itself produce no value, collapsing `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let chars = Maybe::from_value("hi");
    /// assert_eq!(chars.map_option(|s| s.chars().next()), Maybe::from_value('h'));
    /// assert!(!Maybe::from_value("").map_option(|s| s.chars().next()).has_value());
    /// ```
    #[inline]
    pub fn map_option<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Maybe {
            value: self.value.and_then(function),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(13).filter(|n| *n == 13), Maybe::from_value(13));
    /// assert_eq!(Maybe::from_value(12).filter(|n| *n == 13), Maybe::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Applies a `Maybe`-returning function, returning its result as-is.
    ///
    /// `flat_map(|inner| inner)` unwraps one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let nested = Maybe::from_value(Maybe::from_value("hi"));
    /// assert_eq!(nested.flat_map(|inner| inner), Maybe::from_value("hi"));
    ///
    /// let absent: Maybe<i32> = Maybe::absent();
    /// assert!(!absent.flat_map(|n| Maybe::from_value(n + 1)).has_value());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::absent(),
        }
    }

    /// Joins this value with a second, dependent `Maybe`.
    ///
    /// `other` is called with the contained value; when it is present too,
    /// `combine` merges both values. Absence anywhere short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let joined = Maybe::from_value(1)
    ///     .flat_map_with(|n| Maybe::from_value(n + 1), |first, second| first + second);
    /// assert_eq!(joined, Maybe::from_value(3));
    ///
    /// let short = Maybe::from_value(1).flat_map_with(|_| Maybe::<i32>::absent(), |a, b| a + b);
    /// assert!(!short.has_value());
    /// ```
    #[inline]
    pub fn flat_map_with<V, R, F, C>(self, other: F, combine: C) -> Maybe<R>
    where
        F: FnOnce(&T) -> Maybe<V>,
        C: FnOnce(T, V) -> R,
    {
        let Some(value) = self.value else {
            return Maybe::absent();
        };
        match other(&value).value {
            Some(second) => Maybe::from_value(combine(value, second)),
            None => Maybe::absent(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        Self {
            value: self.value.or(alternative.value),
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    ///
    /// `function` is never called when a value is present.
    #[inline]
    #[must_use]
    pub fn or_else_maybe<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.value {
            Some(_) => self,
            None => function(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or `fallback` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(42).get_or_else(0), 42);
    /// assert_eq!(Maybe::<i32>::absent().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Returns the contained value, or the result of `fallback` when absent.
    ///
    /// `fallback` is never called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(42).get_or_else_with(|| panic!("never called")), 42);
    /// assert_eq!(Maybe::<i32>::absent().get_or_else_with(|| 1), 1);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(fallback)
    }

    /// Returns the contained value, or `T::default()` when absent.
    #[inline]
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NoValue`] if the value is absent.
    #[inline]
    pub const fn value(&self) -> Result<&T, MaybeError> {
        match &self.value {
            Some(value) => Ok(value),
            None => Err(MaybeError::NoValue),
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NoValue`] if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::from_value("hi").into_value(), Ok("hi"));
    /// assert_eq!(Maybe::<&str>::absent().into_value(), Err(MaybeError::NoValue));
    /// ```
    #[inline]
    pub fn into_value(self) -> Result<T, MaybeError> {
        self.value.ok_or(MaybeError::NoValue)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the contained value, if present.
    ///
    /// Returns `self` so it can be chained with [`Maybe::else_do`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::from_value(1).for_each(|n| seen.push(*n));
    /// Maybe::<i32>::absent().for_each(|n| seen.push(*n));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn for_each<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    /// Runs `action` only if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let mut missing = 0;
    /// Maybe::<i32>::absent()
    ///     .for_each(|_| unreachable!())
    ///     .else_do(|| missing += 1);
    /// assert_eq!(missing, 1);
    /// ```
    #[inline]
    pub fn else_do<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            action();
        }
        self
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the zero or one contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let total: i32 = [Maybe::from_value(1), Maybe::absent(), Maybe::from_value(2)]
    ///     .iter()
    ///     .flat_map(Maybe::iter)
    ///     .sum();
    /// assert_eq!(total, 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value.iter(),
        }
    }
}

// =============================================================================
// Nested and Borrowed Contents
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let inner_absent = Maybe::from_value(Maybe::<String>::absent());
    /// assert!(!inner_absent.flatten().has_value());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the borrowed contents.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|value| *value)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the borrowed contents.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<MaybeNot> for Maybe<T> {
    /// Turns the untyped absence marker into an absent `Maybe<T>`.
    #[inline]
    fn from(_: MaybeNot) -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Collapses `None` into absence; see [`Maybe::from_option`].
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Formats the contained value, or nothing at all when absent.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => value.fmt(formatter),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Maybe").field(value).finish(),
            None => formatter.write_str("Maybe::Not"),
        }
    }
}

impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    /// Collects an iterator of `Maybe`s, yielding absence if any element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    ///
    /// let all: Maybe<Vec<i32>> = vec![Maybe::from_value(1), Maybe::from_value(2)].into_iter().collect();
    /// assert_eq!(all, Maybe::from_value(vec![1, 2]));
    ///
    /// let gap: Maybe<Vec<i32>> = vec![Maybe::from_value(1), Maybe::absent()].into_iter().collect();
    /// assert!(!gap.has_value());
    /// ```
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iterable: I) -> Self {
        Self {
            value: iterable.into_iter().map(Maybe::into_option).collect(),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over a reference to the value of a [`Maybe`].
///
/// Created by [`Maybe::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::option::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the value of a [`Maybe`].
///
/// Created by the [`IntoIterator`] implementation of `Maybe<T>`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.value.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
