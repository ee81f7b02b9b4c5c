//! The standard parsers for integers and booleans.

use std::sync::LazyLock;

use super::format::NumberFormat;
use super::parser::MaybeParser;
use crate::control::Maybe;

/// A set of standard parsers.
///
/// If the type you need is missing, build your own [`MaybeParser`].
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::parse::{NumberFormat, Parsers};
///
/// let grouped = Parsers::with_format(NumberFormat::integer().with_group_separator('.'));
/// assert_eq!(grouped.int32().parse("1.024"), Maybe::from_value(1024));
/// assert_eq!(grouped.boolean().parse("TRUE"), Maybe::from_value(true));
/// ```
#[derive(Debug)]
pub struct Parsers {
    int32: MaybeParser<i32>,
    int64: MaybeParser<i64>,
    boolean: MaybeParser<bool>,
}

static STANDARD: LazyLock<Parsers> = LazyLock::new(Parsers::standard);

/// Returns the process-wide standard parsers.
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::parse::parsers;
///
/// assert_eq!(parsers().int64().parse("-9"), Maybe::from_value(-9));
/// ```
pub fn parsers() -> &'static Parsers {
    &STANDARD
}

impl Parsers {
    /// Creates parsers using [`NumberFormat::integer`].
    #[must_use]
    pub fn standard() -> Self {
        Self::with_format(NumberFormat::integer())
    }

    /// Creates parsers whose numeric parsers follow `format`.
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            int32: MaybeParser::from_fn(move |source| format.parse_i32(source)),
            int64: MaybeParser::from_fn(move |source| format.parse_i64(source)),
            boolean: MaybeParser::from_fn(parse_boolean),
        }
    }

    /// Parses `i32` values.
    pub const fn int32(&self) -> &MaybeParser<i32> {
        &self.int32
    }

    /// Parses `i64` values.
    pub const fn int64(&self) -> &MaybeParser<i64> {
        &self.int64
    }

    /// Parses `true` or `false`, ignoring case and surrounding whitespace.
    pub const fn boolean(&self) -> &MaybeParser<bool> {
        &self.boolean
    }
}

impl Default for Parsers {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_boolean(source: &str) -> Option<bool> {
    let text = source.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses the text inside a `Maybe` with the standard parsers.
///
/// An absent input stays absent, so parsing composes with other `Maybe`
/// producing steps such as map lookups.
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::parse::MaybeParseExt;
///
/// assert_eq!(Maybe::from_value("42").parse_i32(), Maybe::from_value(42));
/// assert_eq!(Maybe::from_value("hi".to_string()).parse_i32(), Maybe::absent());
/// assert_eq!(Maybe::<&str>::absent().parse_bool(), Maybe::absent());
/// ```
pub trait MaybeParseExt {
    /// Parses an `i32`.
    fn parse_i32(self) -> Maybe<i32>;

    /// Parses an `i64`.
    fn parse_i64(self) -> Maybe<i64>;

    /// Parses a `bool`.
    fn parse_bool(self) -> Maybe<bool>;
}

impl<S: AsRef<str>> MaybeParseExt for Maybe<S> {
    fn parse_i32(self) -> Maybe<i32> {
        parsers().int32().parse_maybe(self)
    }

    fn parse_i64(self) -> Maybe<i64> {
        parsers().int64().parse_maybe(self)
    }

    fn parse_bool(self) -> Maybe<bool> {
        parsers().boolean().parse_maybe(self)
    }
}
