//! Parse adapters producing `Maybe`.
//!
//! A [`MaybeParser`] wraps a try-parse style function (or an `Option` /
//! `Result` returning one) into a reusable `&str -> Maybe<T>`. Failed parses
//! are ordinary absent values, never errors, so they chain directly with the
//! other `Maybe` combinators.
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::parse::MaybeParser;
//!
//! fn is_lucky(input: &str) -> Maybe<i32> {
//!     MaybeParser::<i32>::from_str().parse(input).filter(|n| *n == 13)
//! }
//!
//! assert!(is_lucky("13").has_value());
//! assert!(!is_lucky("12").has_value());
//! assert!(!is_lucky("thirteen").has_value());
//! ```

mod format;
mod parser;
mod standard;

pub use format::{NumberFormat, Radix};
pub use parser::MaybeParser;
pub use standard::{MaybeParseExt, Parsers, parsers};
