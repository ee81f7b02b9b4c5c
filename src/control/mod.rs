//! Control types: optional values and two-case unions.
//!
//! This module provides the value types everything else in the crate is
//! built on:
//!
//! - [`Maybe`]: A value that may be absent
//! - [`MaybeNot`]: An untyped absence marker that converts into any `Maybe<T>`
//! - [`Either`]: A value that is one of two types
//! - [`Optional`]: The closed capability shared by `Maybe` and `MaybeNot`
//! - [`ErasedMaybe`]: Type-erased equality and hashing across element types
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use maybars::control::Maybe;
//!
//! let name = Maybe::from_value("hi".to_string());
//! let length = name.map(|value| value.len());
//! assert_eq!(length, Maybe::from_value(2));
//!
//! let missing: Maybe<String> = Maybe::from_option(None);
//! assert_eq!(missing.map(|value| value.len()).get_or_else(0), 0);
//! ```
//!
//! ## Two-Case Unions
//!
//! ```rust
//! use maybars::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(42);
//! let described = parsed.fold(|error| format!("failed: {error}"), |n| format!("got {n}"));
//! assert_eq!(described, "got 42");
//! ```

mod either;
mod error;
mod maybe;
mod maybe_not;
mod optional;

pub use either::Either;
pub use error::{EitherError, MaybeError};
pub use maybe::{IntoIter, Iter, Maybe};
pub use maybe_not::{MaybeNot, NOT};
pub use optional::{ErasedMaybe, Optional};
