//! Comprehension syntax for `Maybe`.
//!
//! - [`maybe!`](crate::maybe!): flat-map chains over several `Maybe` sources,
//!   with guards and let bindings, written as a flat block
//!
//! # Examples
//!
//! ```
//! use maybars::control::Maybe;
//! use maybars::maybe;
//!
//! let first_name = Maybe::from_value("Ada");
//! let last_name = Maybe::from_value("Lovelace");
//!
//! let full_name = maybe! {
//!     first <= first_name;
//!     last <= last_name;
//!     yield format!("{first} {last}")
//! };
//! assert_eq!(full_name.to_string(), "Ada Lovelace");
//! ```

mod maybe_macro;
