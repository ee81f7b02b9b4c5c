//! The `maybe!` comprehension macro.

/// Comprehension syntax over [`Maybe`](crate::control::Maybe) values.
///
/// Each `pattern <= source;` step binds the value of a `Maybe` and continues
/// only when it is present, so the whole block is absent as soon as one
/// source is absent. It expands to nested `flat_map` calls, which means later
/// sources may depend on earlier bindings and are never evaluated once an
/// earlier one is absent.
///
/// # Syntax
///
/// ```text
/// maybe! {
///     pattern <= maybe_expression; // Bind: continue with the present value
///     if condition;                // Guard: absent unless the condition holds
///     let pattern = expression;    // Pure let binding
///     yield expression             // Final expression (wrapped in Maybe)
/// }
/// ```
///
/// # Examples
///
/// ## Combining several sources
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::maybe;
///
/// let sum = maybe! {
///     x <= Maybe::from_value(1);
///     y <= Maybe::from_value(2);
///     yield x + y
/// };
/// assert_eq!(sum, Maybe::from_value(3));
///
/// let missing = maybe! {
///     x <= Maybe::from_value(1);
///     y <= Maybe::<i32>::absent();
///     yield x + y
/// };
/// assert_eq!(missing, Maybe::absent());
/// ```
///
/// ## Guards and let bindings
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::maybe;
///
/// fn lucky_report(number: i32) -> Maybe<String> {
///     maybe! {
///         n <= Maybe::from_value(number);
///         if n == 13;
///         let doubled = n * 2;
///         yield format!("{n} is lucky, {doubled} is twice as lucky")
///     }
/// }
///
/// assert_eq!(lucky_report(13).get_or_else_with(String::new), "13 is lucky, 26 is twice as lucky");
/// assert!(lucky_report(12).is_absent());
/// ```
///
/// ## Tuple pattern
///
/// ```rust
/// use maybars::control::Maybe;
/// use maybars::maybe;
///
/// let product = maybe! {
///     (a, b) <= Maybe::from_value((6, 7));
///     yield a * b
/// };
/// assert_eq!(product, Maybe::from_value(42));
/// ```
#[macro_export]
macro_rules! maybe {
    // ==========================================================================
    // Terminal case: yield wraps result in a present Maybe
    // ==========================================================================

    (yield $result:expr) => {
        $crate::control::Maybe::from_value($result)
    };

    // ==========================================================================
    // Guard: if condition; rest
    // ==========================================================================

    (if $condition:expr ; $($rest:tt)+) => {{
        if $condition {
            $crate::maybe!($($rest)+)
        } else {
            $crate::control::Maybe::absent()
        }
    }};

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expression:expr ; $($rest:tt)+) => {{
        let $pattern = $expression;
        $crate::maybe!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expression;
        $crate::maybe!($($rest)+)
    }};

    // ==========================================================================
    // Bind operation: pattern <= source; rest
    // ==========================================================================

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::control::Maybe::flat_map($source, |_| $crate::maybe!($($rest)+))
    };

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::control::Maybe::flat_map($source, |$pattern| $crate::maybe!($($rest)+))
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::control::Maybe::flat_map($source, |($($pattern)*)| $crate::maybe!($($rest)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::control::Maybe;
    use std::cell::Cell;

    #[test]
    fn test_yield_only() {
        let result = maybe! {
            yield 42
        };
        assert_eq!(result, Maybe::from_value(42));
    }

    #[test]
    fn test_later_sources_see_earlier_bindings() {
        let result = maybe! {
            x <= Maybe::from_value(3);
            y <= Maybe::when(x > 2, x * 10);
            yield x + y
        };
        assert_eq!(result, Maybe::from_value(33));
    }

    #[test]
    fn test_absent_source_skips_the_rest() {
        let evaluated = Cell::new(false);
        let result: Maybe<i32> = maybe! {
            x <= Maybe::<i32>::absent();
            y <= {
                evaluated.set(true);
                Maybe::from_value(x)
            };
            yield y
        };
        assert!(result.is_absent());
        assert!(!evaluated.get());
    }

    #[test]
    fn test_guard_rejects() {
        let result = maybe! {
            x <= Maybe::from_value(4);
            if x % 2 == 1;
            yield x
        };
        assert_eq!(result, Maybe::absent());
    }

    #[test]
    fn test_wildcard_pattern() {
        let result = maybe! {
            _ <= Maybe::from_value("ignored");
            yield "x"
        };
        assert_eq!(result, Maybe::from_value("x"));
    }

    #[test]
    fn test_let_tuple_binding() {
        let result = maybe! {
            pair <= Maybe::from_value((1, 2));
            let (a, b) = pair;
            yield a + b
        };
        assert_eq!(result, Maybe::from_value(3));
    }
}
