//! Capabilities shared by `Maybe<T>` and `MaybeNot`.
//!
//! Both traits here are sealed: only the crate's own optional types
//! implement them.
//!
//! - [`Optional`] exposes presence and a borrowed view of the value.
//! - [`ErasedMaybe`] is object-safe and compares or hashes optionals whose
//!   element type is only known at runtime. Optionals of different element
//!   types never compare equal, even when both are absent, and the marker
//!   only equals itself.
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::{ErasedMaybe, Maybe, NOT};
//!
//! let values: Vec<Box<dyn ErasedMaybe>> = vec![
//!     Box::new(Maybe::<i32>::absent()),
//!     Box::new(Maybe::<String>::absent()),
//!     Box::new(NOT),
//!     Box::new(NOT),
//! ];
//!
//! assert!(*values[0] != *values[1]);
//! assert!(*values[0] != *values[2]);
//! assert!(*values[2] == *values[3]);
//! ```

use std::any::{Any, TypeId};
use std::convert::Infallible;
use std::hash::{Hash, Hasher};

use super::maybe::Maybe;
use super::maybe_not::MaybeNot;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Maybe<T> {}
    impl Sealed for super::MaybeNot {}
}

/// A value that may or may not hold an `Item`.
///
/// # Examples
///
/// ```rust
/// use maybars::control::{Maybe, MaybeNot, Optional};
///
/// fn describe<O: Optional>(optional: &O) -> &'static str
/// where
///     O::Item: PartialEq<i32>,
/// {
///     match optional.try_get_value() {
///         Some(value) if *value == 13 => "lucky",
///         Some(_) => "present",
///         None => "absent",
///     }
/// }
///
/// assert_eq!(describe(&Maybe::from_value(13)), "lucky");
/// assert_eq!(describe(&Maybe::<i32>::absent()), "absent");
/// ```
pub trait Optional: sealed::Sealed {
    /// The type of the value that may be held.
    type Item;

    /// Returns `true` if a value is held.
    fn has_value(&self) -> bool;

    /// Returns a reference to the held value, if any.
    fn try_get_value(&self) -> Option<&Self::Item>;
}

impl<T> Optional for Maybe<T> {
    type Item = T;

    #[inline]
    fn has_value(&self) -> bool {
        Self::has_value(self)
    }

    #[inline]
    fn try_get_value(&self) -> Option<&T> {
        self.as_option()
    }
}

impl Optional for MaybeNot {
    type Item = Infallible;

    #[inline]
    fn has_value(&self) -> bool {
        false
    }

    #[inline]
    fn try_get_value(&self) -> Option<&Infallible> {
        None
    }
}

/// Type-erased equality and hashing for optional values.
///
/// Two erased values are equal only when they have the same concrete type
/// and compare equal as that type. The hash mixes in the concrete type, so
/// absent values of different element types land in different buckets.
pub trait ErasedMaybe: Any + sealed::Sealed + 'static {
    /// Returns `true` if a value is held.
    fn is_present(&self) -> bool;

    /// Upcasts to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares with another erased optional.
    fn erased_eq(&self, other: &dyn ErasedMaybe) -> bool;

    /// Feeds the concrete type and the value into `state`.
    fn erased_hash(&self, state: &mut dyn Hasher);
}

impl<T> ErasedMaybe for Maybe<T>
where
    T: PartialEq + Hash + 'static,
{
    #[inline]
    fn is_present(&self) -> bool {
        self.has_value()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn erased_eq(&self, other: &dyn ErasedMaybe) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn erased_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<Self>().hash(&mut state);
        self.hash(&mut state);
    }
}

impl ErasedMaybe for MaybeNot {
    #[inline]
    fn is_present(&self) -> bool {
        false
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn erased_eq(&self, other: &dyn ErasedMaybe) -> bool {
        other.as_any().is::<Self>()
    }

    fn erased_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<Self>().hash(&mut state);
    }
}

impl PartialEq for dyn ErasedMaybe {
    fn eq(&self, other: &Self) -> bool {
        self.erased_eq(other)
    }
}

impl Eq for dyn ErasedMaybe {}

impl Hash for dyn ErasedMaybe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.erased_hash(state);
    }
}
