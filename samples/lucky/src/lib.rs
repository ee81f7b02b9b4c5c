//! Lucky Sample Application
//!
//! Small programs written with `Maybe` instead of `Option` and early returns.
//!
//! # maybars Features Used
//!
//! - `Maybe::when` for conditional values
//! - `Semigroup` to combine present values and skip absent ones
//! - The `maybe!` comprehension for filtering and projecting
//! - `IteratorMaybeExt` for first and single lookups

use maybars::control::{Maybe, MaybeError};
use maybars::extensions::{IteratorMaybeExt, MaybeValuesExt};
use maybars::maybe;
use maybars::typeclass::Semigroup;

/// Message for a lucky number.
pub const LUCKY_MESSAGE: &str = "So lucky.";

/// Returns the fizz-buzz line for `number`.
///
/// "Fizz" and "Buzz" are combined when both apply; a number divisible by
/// neither is printed as itself.
///
/// # Examples
///
/// ```
/// assert_eq!(lucky::fizz_buzz(15), "FizzBuzz");
/// assert_eq!(lucky::fizz_buzz(7), "7");
/// ```
pub fn fizz_buzz(number: i64) -> String {
    Maybe::when(number % 3 == 0, "Fizz".to_string())
        .combine(Maybe::when(number % 5 == 0, "Buzz".to_string()))
        .get_or_else_with(|| number.to_string())
}

/// Returns the lucky message when `number` is the lucky one.
pub fn how_lucky_is(number: i64, lucky: i64) -> Maybe<String> {
    if number == lucky {
        return Maybe::from_value(LUCKY_MESSAGE.to_string());
    }
    Maybe::not()
}

/// Describes `number` if it is lucky and odd.
pub fn describe(number: i64, lucky: i64) -> Maybe<String> {
    maybe! {
        message <= how_lucky_is(number, lucky);
        if number % 2 != 0;
        let label = format!("{number}: {message}");
        yield label
    }
}

/// Collects the descriptions of every lucky number in `from..=to`.
pub fn lucky_numbers(from: i64, to: i64, lucky: i64) -> Vec<String> {
    (from..=to)
        .map(|number| describe(number, lucky))
        .values()
        .collect()
}

/// Returns the only lucky number in `from..=to`.
///
/// # Errors
///
/// Returns an error if more than one number in the range is lucky.
pub fn single_lucky(from: i64, to: i64, lucky: i64) -> Result<Maybe<i64>, MaybeError> {
    (from..=to)
        .filter(|number| how_lucky_is(*number, lucky).has_value())
        .single_maybe()
}

/// Returns the first number in `from..=to` whose fizz-buzz line is "FizzBuzz".
pub fn first_fizz_buzz(from: i64, to: i64) -> Maybe<i64> {
    (from..=to)
        .filter(|number| fizz_buzz(*number) == "FizzBuzz")
        .first_maybe()
}
