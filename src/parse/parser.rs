//! `MaybeParser<T>` - a reusable `&str -> Maybe<T>` function.

use std::fmt;
use std::str::FromStr;

use crate::control::Maybe;

type ParseFunction<T> = Box<dyn Fn(&str) -> Maybe<T> + Send + Sync>;

/// Converts strings into `Maybe<T>`.
///
/// A parser wraps a fallible parse function once and can then be shared and
/// reused. Malformed input never panics: it simply produces an absent value.
/// A panic raised by the wrapped function itself is not caught.
///
/// # Examples
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::parse::MaybeParser;
///
/// let parser = MaybeParser::<i32>::from_str();
/// assert_eq!(parser.parse("42"), Maybe::from_value(42));
/// assert_eq!(parser.parse("abc"), Maybe::absent());
/// assert_eq!(parser.parse(""), Maybe::absent());
/// assert_eq!(parser.parse("2147483648"), Maybe::absent());
/// ```
pub struct MaybeParser<T> {
    parser: ParseFunction<T>,
}

impl<T: 'static> MaybeParser<T> {
    /// Wraps a function following the try-parse pattern: it reports success
    /// and writes the parsed value through its out-parameter.
    ///
    /// The out-parameter starts as `T::default()`; its content is ignored
    /// when the function reports failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::parse::MaybeParser;
    ///
    /// fn try_parse_even(source: &str, value: &mut u8) -> bool {
    ///     match source.parse::<u8>() {
    ///         Ok(parsed) if parsed % 2 == 0 => {
    ///             *value = parsed;
    ///             true
    ///         }
    ///         _ => false,
    ///     }
    /// }
    ///
    /// let parser = MaybeParser::from_try_parse(try_parse_even);
    /// assert_eq!(parser.parse("8"), Maybe::from_value(8));
    /// assert_eq!(parser.parse("7"), Maybe::absent());
    /// ```
    pub fn from_try_parse<F>(try_parse: F) -> Self
    where
        F: Fn(&str, &mut T) -> bool + Send + Sync + 'static,
        T: Default,
    {
        Self {
            parser: Box::new(move |source| {
                let mut value = T::default();
                Maybe::when(try_parse(source, &mut value), value)
            }),
        }
    }

    /// Wraps a function that answers with an `Option`.
    pub fn from_fn<F>(parse: F) -> Self
    where
        F: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            parser: Box::new(move |source| Maybe::from_option(parse(source))),
        }
    }

    /// Wraps a function that answers with a `Result`, discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::parse::MaybeParser;
    ///
    /// let hex = MaybeParser::from_result(|source| u32::from_str_radix(source, 16));
    /// assert_eq!(hex.parse("ff"), Maybe::from_value(255));
    /// assert!(hex.parse("zz").is_absent());
    /// ```
    pub fn from_result<E, F>(parse: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            parser: Box::new(move |source| Maybe::from_option(parse(source).ok())),
        }
    }

    /// Uses the [`FromStr`] implementation of `T`.
    pub fn from_str() -> Self
    where
        T: FromStr,
    {
        Self::from_result(T::from_str)
    }
}

impl<T> MaybeParser<T> {
    /// Attempts to parse `source`.
    ///
    /// Returns the parsed value, or absent if `source` is not valid input.
    pub fn parse(&self, source: &str) -> Maybe<T> {
        let parsed = (self.parser)(source);
        #[cfg(feature = "tracing")]
        {
            if parsed.is_absent() {
                tracing::trace!(source, "parser rejected input");
            }
        }
        parsed
    }

    /// Parses the contents of `source`; an absent source stays absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Maybe;
    /// use maybars::parse::MaybeParser;
    ///
    /// let parser = MaybeParser::<i64>::from_str();
    /// assert_eq!(parser.parse_maybe(Maybe::from_value("13")), Maybe::from_value(13));
    /// assert_eq!(parser.parse_maybe(Maybe::<&str>::absent()), Maybe::absent());
    /// ```
    pub fn parse_maybe<S: AsRef<str>>(&self, source: Maybe<S>) -> Maybe<T> {
        source.flat_map(|text| self.parse(text.as_ref()))
    }
}

impl<T> fmt::Debug for MaybeParser<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MaybeParser").finish_non_exhaustive()
    }
}
