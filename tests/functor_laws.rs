#![cfg(feature = "typeclass")]
//! Property-based tests for Functor and Applicative laws.
//!
//! This module verifies that the Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! and the Applicative laws for `Maybe`:
//!
//! - **Identity**: `pure(id).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`

use maybars::control::{Either, Maybe};
use maybars::typeclass::{Applicative, Functor};
use proptest::prelude::*;

fn maybe_strategy<T: Arbitrary + 'static>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(Maybe::from_option)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy::<i32>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Maybe<i32>
    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for Maybe<String> with a change of type
    #[test]
    fn prop_maybe_string_composition_law(value in maybe_strategy::<String>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap agrees with the inherent map
    #[test]
    fn prop_maybe_fmap_matches_map(value in maybe_strategy::<i32>()) {
        prop_assert_eq!(value.fmap(i32::wrapping_neg), value.map(i32::wrapping_neg));
    }

    /// Applicative identity
    #[test]
    fn prop_maybe_applicative_identity(value in maybe_strategy::<i32>()) {
        let identity: Maybe<fn(i32) -> i32> = <Maybe<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value), value);
    }

    /// Applicative homomorphism
    #[test]
    fn prop_maybe_applicative_homomorphism(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_sub(3);
        let left: Maybe<i32> = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(value));
        prop_assert_eq!(left, Maybe::from_value(function(value)));
    }

    /// map2 is present only when both sides are
    #[test]
    fn prop_maybe_map2_presence(
        first in maybe_strategy::<i32>(),
        second in maybe_strategy::<i32>()
    ) {
        let combined = first.map2(second, i32::wrapping_add);
        prop_assert_eq!(combined.has_value(), first.has_value() && second.has_value());
    }
}

// =============================================================================
// Either<L, R> Property Tests (right-biased)
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    /// Composition Law for Either<String, i32>
    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| i64::from(n) * 2;

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Left values pass through fmap unchanged
    #[test]
    fn prop_either_left_is_untouched(text in any::<String>()) {
        let value: Either<String, i32> = Either::Left(text.clone());
        prop_assert_eq!(value.fmap(|n| n.wrapping_mul(3)), Either::Left(text));
    }
}
