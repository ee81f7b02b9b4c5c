//! Number format configuration for the standard parsers.

use std::borrow::Cow;
use std::num::ParseIntError;

/// The digit systems a [`NumberFormat`] can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Radix {
    /// Base 10.
    Decimal,
    /// Base 16, upper or lower case digits.
    Hexadecimal,
}

impl Radix {
    /// The numeric base.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

/// Describes which textual forms an integer parser accepts.
///
/// The default is [`NumberFormat::integer`]: decimal digits with an optional
/// leading sign, surrounded by optional whitespace.
///
/// # Examples
///
/// ```rust
/// use maybars::parse::NumberFormat;
///
/// let grouped = NumberFormat::integer().with_group_separator(',');
/// assert_eq!(grouped.parse_i64("1,000,000"), Some(1_000_000));
///
/// let hex = NumberFormat::hex_number();
/// assert_eq!(hex.parse_i32("2A"), Some(42));
/// assert_eq!(hex.parse_i32("-2A"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    radix: Radix,
    allow_sign: bool,
    trim_whitespace: bool,
    group_separator: Option<char>,
}

impl NumberFormat {
    /// Decimal integers with an optional sign and surrounding whitespace.
    #[must_use]
    pub const fn integer() -> Self {
        Self {
            radix: Radix::Decimal,
            allow_sign: true,
            trim_whitespace: true,
            group_separator: None,
        }
    }

    /// Unsigned hexadecimal digits (no `0x` prefix) with surrounding whitespace.
    #[must_use]
    pub const fn hex_number() -> Self {
        Self {
            radix: Radix::Hexadecimal,
            allow_sign: false,
            trim_whitespace: true,
            group_separator: None,
        }
    }

    /// Accepts `separator` between digits, as in `1,000`.
    ///
    /// A sign or an ASCII letter or digit cannot separate groups and leaves
    /// the format without a separator.
    #[must_use]
    pub const fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = if is_group_separator(separator) {
            Some(separator)
        } else {
            None
        };
        self
    }

    /// Sets whether a leading `+` or `-` is accepted.
    #[must_use]
    pub const fn with_sign(mut self, allow_sign: bool) -> Self {
        self.allow_sign = allow_sign;
        self
    }

    /// Sets whether leading and trailing whitespace is ignored.
    #[must_use]
    pub const fn with_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// The radix digits are read in.
    pub const fn radix(&self) -> u32 {
        self.radix.value()
    }

    /// Parses a 32-bit integer, or `None` if `source` does not match this format
    /// or the value overflows.
    pub fn parse_i32(&self, source: &str) -> Option<i32> {
        self.parse_with(source, i32::from_str_radix)
    }

    /// Parses a 64-bit integer, or `None` if `source` does not match this format
    /// or the value overflows.
    pub fn parse_i64(&self, source: &str) -> Option<i64> {
        self.parse_with(source, i64::from_str_radix)
    }

    fn parse_with<T>(
        &self,
        source: &str,
        from_str_radix: fn(&str, u32) -> Result<T, ParseIntError>,
    ) -> Option<T> {
        let digits = self.normalize(source)?;
        from_str_radix(&digits, self.radix.value()).ok()
    }

    /// Reduces `source` to a sign and digits, or `None` if it breaks a rule
    /// that `from_str_radix` would not check.
    fn normalize<'a>(&self, source: &'a str) -> Option<Cow<'a, str>> {
        let text = if self.trim_whitespace {
            source.trim()
        } else {
            source
        };
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let sign = &text[..text.len() - unsigned.len()];
        if !sign.is_empty() && !self.allow_sign {
            return None;
        }
        // Deserialized formats bypass the builder check.
        let separator = self.group_separator.filter(|c| is_group_separator(*c));
        match separator {
            Some(separator) if unsigned.contains(separator) => {
                if unsigned.starts_with(separator) || unsigned.ends_with(separator) {
                    return None;
                }
                Some(Cow::Owned(format!("{sign}{}", unsigned.replace(separator, ""))))
            }
            _ => Some(Cow::Borrowed(text)),
        }
    }
}

const fn is_group_separator(separator: char) -> bool {
    !(separator.is_ascii_alphanumeric() || separator == '+' || separator == '-')
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::integer()
    }
}
