//! Integration tests for `Maybe<T>`.
//!
//! These follow a value through the whole public surface: construction,
//! the combinators, extraction with a fallback or a checked unwrap, and the
//! sequence view.

#![cfg(feature = "control")]

use std::cell::Cell;
use std::collections::HashMap;

use maybars::control::{Maybe, MaybeError, NOT};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn from_value_is_present_and_extracts_the_value() {
    let maybe = Maybe::from_value("hello".to_string());
    assert!(maybe.has_value());
    assert_eq!(maybe.into_value(), Ok("hello".to_string()));
}

#[rstest]
fn absent_default_and_marker_are_the_same_value() {
    let absent: Maybe<u64> = Maybe::absent();
    let default: Maybe<u64> = Maybe::default();
    let from_marker: Maybe<u64> = NOT.into();
    let not: Maybe<u64> = Maybe::not();

    assert!(!absent.has_value());
    assert_eq!(absent, default);
    assert_eq!(absent, from_marker);
    assert_eq!(absent, not);
}

#[rstest]
#[case(true, Maybe::from_value("Fizz"))]
#[case(false, Maybe::absent())]
fn when_builds_on_condition(#[case] condition: bool, #[case] expected: Maybe<&str>) {
    assert_eq!(Maybe::when(condition, "Fizz"), expected);
}

#[rstest]
fn when_with_only_calls_factory_on_true() {
    let calls = Cell::new(0);
    let factory = || {
        calls.set(calls.get() + 1);
        "built"
    };
    assert!(Maybe::when_with(false, factory).is_absent());
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::when_with(true, factory), Maybe::from_value("built"));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn when_some_collapses_a_none_factory() {
    assert!(Maybe::<i32>::when_some(true, || None).is_absent());
    assert_eq!(Maybe::when_some(true, || Some(1)), Maybe::from_value(1));
}

#[rstest]
fn option_conversions_in_both_directions() {
    let present: Maybe<i32> = Some(3).into();
    let absent: Maybe<i32> = None.into();
    assert_eq!(present, Maybe::from_value(3));
    assert!(absent.is_absent());

    let back: Option<i32> = present.into();
    assert_eq!(back, Some(3));
}

#[rstest]
fn struct_fields_default_to_absent() {
    #[derive(Default)]
    struct Profile {
        nickname: Maybe<String>,
        age: Maybe<u8>,
    }

    let profile = Profile::default();
    assert!(profile.nickname.is_absent());
    assert!(profile.age.is_absent());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_never_calls_function_when_absent() {
    let called = Cell::new(false);
    let result = Maybe::<i32>::absent().map(|n| {
        called.set(true);
        n + 1
    });
    assert!(result.is_absent());
    assert!(!called.get());
}

#[rstest]
fn map_option_collapses_none_results() {
    let words = Maybe::from_value("one two");
    assert_eq!(
        words.map_option(|text| text.split(' ').nth(1)),
        Maybe::from_value("two")
    );
    assert!(words.map_option(|text| text.split(' ').nth(5)).is_absent());
}

#[rstest]
#[case(Maybe::from_value(4), Maybe::from_value(4))]
#[case(Maybe::from_value(3), Maybe::absent())]
#[case(Maybe::absent(), Maybe::absent())]
fn filter_keeps_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn flat_map_identity_unwraps_one_level() {
    let nested = Maybe::from_value(Maybe::from_value(1));
    assert_eq!(nested.flat_map(|inner| inner), Maybe::from_value(1));
    assert_eq!(nested.flatten(), Maybe::from_value(1));
}

#[rstest]
fn flat_map_on_absent_skips_function() {
    let result = Maybe::<i32>::absent().flat_map(|_| -> Maybe<i32> { panic!("not called") });
    assert!(result.is_absent());
}

#[rstest]
#[case(Maybe::from_value(2), Maybe::from_value(3), Maybe::from_value(6))]
#[case(Maybe::from_value(2), Maybe::absent(), Maybe::absent())]
#[case(Maybe::absent(), Maybe::from_value(3), Maybe::absent())]
fn flat_map_with_needs_both_values(
    #[case] first: Maybe<i32>,
    #[case] second: Maybe<i32>,
    #[case] expected: Maybe<i32>,
) {
    assert_eq!(first.flat_map_with(|_| second, |a, b| a * b), expected);
}

#[rstest]
fn or_and_or_else_maybe_fall_back() {
    let absent: Maybe<&str> = Maybe::absent();
    assert_eq!(absent.or(Maybe::from_value("b")), Maybe::from_value("b"));
    assert_eq!(
        Maybe::from_value("a").or_else_maybe(|| panic!("not called")),
        Maybe::from_value("a")
    );
    assert_eq!(absent.or_else_maybe(|| Maybe::from_value("c")), Maybe::from_value("c"));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_or_else_with_skips_fallback_when_present() {
    let value = Maybe::from_value(42).get_or_else_with(|| panic!("fallback evaluated"));
    assert_eq!(value, 42);
}

#[rstest]
fn get_or_else_uses_fallback_when_absent() {
    assert_eq!(Maybe::<i32>::absent().get_or_else(7), 7);
    assert_eq!(Maybe::<String>::absent().get_or_default(), String::new());
}

#[rstest]
fn unwrapping_absent_fails_with_no_value() {
    let absent: Maybe<i32> = Maybe::absent();
    assert_eq!(absent.value(), Err(MaybeError::NoValue));
    assert_eq!(absent.into_value(), Err(MaybeError::NoValue));
    assert_eq!(Maybe::from_value(1).value(), Ok(&1));
}

#[rstest]
fn is_compares_by_value() {
    let owned = Maybe::from_value(String::from("hi"));
    let other = String::from("hi");
    assert!(owned.is(&other));
    assert!(owned.is("hi"));
    assert!(!owned.is("hello"));
    assert!(owned.is_and(|text| text.len() == 2));
    assert!(!Maybe::<String>::absent().is_and(|_| true));
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn for_each_and_else_do_run_exactly_one_branch() {
    let seen = Cell::new(0);
    let missed = Cell::new(0);

    Maybe::from_value(5)
        .for_each(|n| seen.set(*n))
        .else_do(|| missed.set(missed.get() + 1));
    assert_eq!((seen.get(), missed.get()), (5, 0));

    Maybe::<i32>::absent()
        .for_each(|_| seen.set(-1))
        .else_do(|| missed.set(missed.get() + 1));
    assert_eq!((seen.get(), missed.get()), (5, 1));
}

// =============================================================================
// Sequence View
// =============================================================================

#[rstest]
fn works_with_iterator_pipelines() {
    let maybes = vec![Maybe::from_value(1), Maybe::absent(), Maybe::from_value(3)];
    let values: Vec<i32> = maybes.iter().flatten().copied().collect();
    assert_eq!(values, vec![1, 3]);

    let owned: Vec<i32> = maybes.into_iter().flatten().collect();
    assert_eq!(owned, vec![1, 3]);
}

#[rstest]
fn iter_is_exact_size() {
    assert_eq!(Maybe::from_value('a').iter().len(), 1);
    assert_eq!(Maybe::<char>::absent().into_iter().len(), 0);
}

#[rstest]
fn collect_all_or_nothing() {
    let all: Maybe<Vec<u8>> = (1..=3).map(Maybe::from_value).collect();
    assert_eq!(all, Maybe::from_value(vec![1, 2, 3]));

    let gap: Maybe<Vec<u8>> = (1..=3).map(|n| Maybe::when(n != 2, n)).collect();
    assert!(gap.is_absent());
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
#[case(Maybe::from_value(12), "12")]
#[case(Maybe::absent(), "")]
fn display_is_empty_when_absent(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(maybe.to_string(), expected);
    assert_eq!(format!("[{maybe}]"), format!("[{expected}]"));
}

#[rstest]
fn debug_shows_state() {
    assert_eq!(format!("{:?}", Maybe::from_value("x")), "Maybe(\"x\")");
    assert_eq!(format!("{:?}", Maybe::<&str>::absent()), "Maybe::Not");
}

// =============================================================================
// Equality and Ordering
// =============================================================================

#[rstest]
fn equality_is_structural() {
    assert_eq!(Maybe::from_value(1), Maybe::from_value(1));
    assert_ne!(Maybe::from_value(1), Maybe::from_value(2));
    assert_ne!(Maybe::from_value(1), Maybe::absent());
    assert_eq!(Maybe::<i32>::absent(), Maybe::absent());
}

#[rstest]
fn works_as_map_key() {
    let mut counts: HashMap<Maybe<&str>, usize> = HashMap::new();
    for key in [Maybe::from_value("a"), Maybe::absent(), Maybe::from_value("a")] {
        *counts.entry(key).or_default() += 1;
    }
    assert_eq!(counts[&Maybe::from_value("a")], 2);
    assert_eq!(counts[&Maybe::<&str>::absent()], 1);
}

#[rstest]
fn sorting_puts_absent_first() {
    let mut values = vec![Maybe::from_value(2), Maybe::absent(), Maybe::from_value(1)];
    values.sort();
    assert_eq!(
        values,
        vec![Maybe::absent(), Maybe::from_value(1), Maybe::from_value(2)]
    );
}
