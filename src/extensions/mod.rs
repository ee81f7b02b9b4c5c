//! Helpers that bring `Maybe` to the boundaries of other APIs.
//!
//! - [`MaybeLookup`]: map lookups that answer with a `Maybe` instead of an `Option`
//! - [`IteratorMaybeExt`]: first / single element of an iterator as a `Maybe`
//! - [`MaybeValuesExt`]: lazily flattening an iterator of `Maybe` into its values
//! - [`OptionExt`]: bridging from `Option`
//! - [`Maybe::or_either`](crate::control::Maybe::or_either): committing a
//!   `Maybe` to an `Either`
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use maybars::control::Maybe;
//! use maybars::extensions::{IteratorMaybeExt, MaybeLookup, MaybeValuesExt};
//!
//! let mut ages = HashMap::new();
//! ages.insert("alice".to_string(), 31);
//! assert_eq!(ages.get_maybe("alice").copied(), Maybe::from_value(31));
//! assert!(!ages.get_maybe("bob").has_value());
//!
//! assert_eq!(vec![1, 2, 3].into_iter().first_maybe(), Maybe::from_value(1));
//!
//! let words: Vec<&str> = vec![Maybe::from_value("hi"), Maybe::absent(), Maybe::from_value("world")]
//!     .into_iter()
//!     .values()
//!     .collect();
//! assert_eq!(words, vec!["hi", "world"]);
//! ```

mod either;
mod iterator;
mod lookup;
mod nullable;

pub use iterator::{IteratorMaybeExt, MaybeValuesExt, Values};
pub use lookup::MaybeLookup;
pub use nullable::OptionExt;
