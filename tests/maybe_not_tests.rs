//! Tests for the untyped absence marker and type-erased optionals.

#![cfg(feature = "control")]

use std::collections::HashMap;

use maybars::control::{ErasedMaybe, Maybe, MaybeNot, NOT, Optional};
use rstest::rstest;

fn first_even(numbers: &[i32]) -> Maybe<i32> {
    for number in numbers {
        if number % 2 == 0 {
            return Maybe::from_value(*number);
        }
    }
    NOT.into()
}

#[rstest]
fn marker_converts_into_any_absent_maybe() {
    let number: Maybe<i32> = NOT.into();
    let text: Maybe<String> = MaybeNot.into();
    let nested: Maybe<Maybe<u8>> = NOT.into();
    assert!(number.is_absent());
    assert!(text.is_absent());
    assert!(nested.is_absent());
}

#[rstest]
fn marker_as_early_return() {
    assert_eq!(first_even(&[1, 3, 4]), Maybe::from_value(4));
    assert_eq!(first_even(&[1, 3]), Maybe::absent());
}

#[rstest]
fn marker_formats_and_compares() {
    assert_eq!(NOT.to_string(), "");
    assert_eq!(NOT, MaybeNot);
    assert_eq!(MaybeNot::default(), NOT);
    assert!(!NOT.has_value());
}

fn count_present<O: Optional>(values: &[O]) -> usize {
    values.iter().filter(|value| value.has_value()).count()
}

#[rstest]
fn optional_is_shared_by_maybe_and_marker() {
    assert_eq!(
        count_present(&[Maybe::from_value(1), Maybe::absent(), Maybe::from_value(3)]),
        2
    );
    assert_eq!(count_present(&[NOT, NOT]), 0);
}

#[rstest]
fn erased_equality_discriminates_element_types() {
    let int_absent: Box<dyn ErasedMaybe> = Box::new(Maybe::<i32>::absent());
    let string_absent: Box<dyn ErasedMaybe> = Box::new(Maybe::<String>::absent());
    let marker: Box<dyn ErasedMaybe> = Box::new(NOT);

    let other_marker: Box<dyn ErasedMaybe> = Box::new(NOT);
    let other_int_absent: Box<dyn ErasedMaybe> = Box::new(Maybe::<i32>::absent());

    assert!(*int_absent != *string_absent);
    assert!(*int_absent != *marker);
    assert!(*string_absent != *marker);
    assert!(*marker == *other_marker);
    assert!(*int_absent == *other_int_absent);
    assert!(!int_absent.is_present());
}

#[rstest]
fn erased_values_as_map_keys() {
    let mut labels: HashMap<Box<dyn ErasedMaybe>, &str> = HashMap::new();
    labels.insert(Box::new(Maybe::from_value(7_u8)), "seven");
    labels.insert(Box::new(Maybe::<u8>::absent()), "no byte");
    labels.insert(Box::new(Maybe::<char>::absent()), "no char");

    let lookup: Box<dyn ErasedMaybe> = Box::new(Maybe::<char>::absent());
    assert_eq!(labels.get(&lookup), Some(&"no char"));
    assert_eq!(labels.len(), 3);
}
