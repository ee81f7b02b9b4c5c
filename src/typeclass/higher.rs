//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Maybe<_>` as a type constructor directly. This module uses
//! GAT to work around that limitation; every other type class builds on it.
//!
//! # Example
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let number = Maybe::from_value(42);
//! let name: Maybe<String> = transform_type(number);
//! assert!(!name.has_value());
//! ```

use crate::control::{Either, Maybe};

/// A type constructor: a type with one "hole" that can be refilled.
///
/// `Inner` is the type currently in the hole, and `WithType<B>` is the same
/// constructor with `B` in the hole.
pub trait TypeConstructor {
    /// The type of the value(s) inside the container.
    type Inner;

    /// The same container with a different inner type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is right-biased as a type constructor: the left type stays fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
