//! # maybars
//!
//! An optional-value container (`Maybe<T>`) and a two-case union
//! (`Either<L, R>`) that make absence and alternatives part of the type.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe), the untyped absence marker
//!   [`MaybeNot`](control::MaybeNot), and [`Either`](control::Either)
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Alternative,
//!   Bifunctor, Semigroup and Monoid for the control types
//! - **Extensions**: map lookup, first/single from iterators, value flattening,
//!   and bridging to `Option`
//! - **Parse**: turning try-parse style functions into `&str -> Maybe<T>`
//! - **Compose**: the `maybe!` comprehension macro
//!
//! ## Feature Flags
//!
//! - `control`: `Maybe`, `MaybeNot`, `Either`
//! - `typeclass`: Type class traits and their implementations
//! - `extensions`: Iterator, map, and `Option` helpers
//! - `parse`: Parse adapters and the standard parsers
//! - `compose`: The `maybe!` macro
//! - `serde`: Serialization support
//! - `tracing`: Trace-level diagnostics from the parse adapter and iterator helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybars::prelude::*;
//!
//! fn how_lucky_is(number: i32) -> Maybe<String> {
//!     Maybe::when(number == 13, "So lucky.".to_string())
//! }
//!
//! assert_eq!(how_lucky_is(13).get_or_else("not lucky.".to_string()), "So lucky.");
//! assert_eq!(how_lucky_is(1).get_or_else("not lucky.".to_string()), "not lucky.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "extensions")]
    pub use crate::extensions::*;

    #[cfg(feature = "parse")]
    pub use crate::parse::*;

    #[cfg(feature = "compose")]
    pub use crate::maybe;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "extensions")]
pub mod extensions;

#[cfg(feature = "parse")]
pub mod parse;

#[cfg(feature = "compose")]
pub mod compose;
