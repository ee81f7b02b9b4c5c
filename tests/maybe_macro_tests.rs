//! Integration tests for the `maybe!` comprehension macro.

#![cfg(all(feature = "compose", feature = "extensions", feature = "parse"))]

use std::collections::HashMap;

use maybars::control::Maybe;
use maybars::extensions::MaybeLookup;
use maybars::maybe;
use maybars::parse::MaybeParseExt;
use rstest::rstest;

fn how_lucky_is(number: i32) -> Maybe<String> {
    maybe! {
        n <= Maybe::from_value(number);
        if n == 13;
        yield format!("{n} is so lucky.")
    }
}

#[rstest]
#[case(13, "13 is so lucky.")]
#[case(7, "not lucky.")]
fn comprehension_with_guard(#[case] number: i32, #[case] expected: &str) {
    assert_eq!(how_lucky_is(number).get_or_else("not lucky.".to_string()), expected);
}

#[rstest]
fn lookups_and_parsing_in_one_block() {
    let form: HashMap<&str, &str> = [("width", "4"), ("height", "5"), ("depth", "x")]
        .into_iter()
        .collect();

    let area = maybe! {
        width <= form.get_maybe(&"width").copied().parse_i32();
        height <= form.get_maybe(&"height").copied().parse_i32();
        yield width * height
    };
    assert_eq!(area, Maybe::from_value(20));

    let volume = maybe! {
        width <= form.get_maybe(&"width").copied().parse_i32();
        depth <= form.get_maybe(&"depth").copied().parse_i32();
        yield width * depth
    };
    assert!(volume.is_absent());
}

#[rstest]
fn matches_explicit_flat_map_with() {
    let first = Maybe::from_value(2);
    let second = Maybe::from_value(5);

    let by_macro = maybe! {
        a <= first;
        b <= second;
        yield a + b
    };
    let by_combinator = first.flat_map_with(|_| second, |a, b| a + b);
    assert_eq!(by_macro, by_combinator);
}

#[rstest]
fn three_sources_with_let() {
    let result = maybe! {
        a <= Maybe::from_value(1);
        let doubled = a * 2;
        b <= Maybe::from_value(doubled + 1);
        (c, d) <= Maybe::from_value((b, 10));
        yield a + b + c + d
    };
    assert_eq!(result, Maybe::from_value(1 + 3 + 3 + 10));
}
