//! Type class traits implemented by [`Maybe`](crate::control::Maybe) and
//! [`Either`](crate::control::Either).
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Choosing the first successful computation
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Bifunctor`]: Mapping both sides of a two-parameter type
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types (GAT) emulate them through
//! [`TypeConstructor`], which is what lets `Functor` and `Monad` be written
//! once for both `Maybe<A>` and the right-biased `Either<L, R>`.
//!
//! # Examples
//!
//! ## Combining optional values
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::{Monoid, Semigroup};
//!
//! let n = 15;
//! let fizz = Maybe::when(n % 3 == 0, "Fizz".to_string());
//! let buzz = Maybe::when(n % 5 == 0, "Buzz".to_string());
//! assert_eq!(fizz.combine(buzz).get_or_else(n.to_string()), "FizzBuzz");
//!
//! let parts = vec![Maybe::absent(), Maybe::from_value("x".to_string())];
//! assert_eq!(Maybe::combine_all(parts), Maybe::from_value("x".to_string()));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use maybars::control::Maybe;
//! use maybars::typeclass::Applicative;
//!
//! let sum = Maybe::from_value(1).map2(Maybe::from_value(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::from_value(3));
//!
//! let missing = Maybe::from_value(1).map2(Maybe::<i32>::absent(), |x, y| x + y);
//! assert_eq!(missing, Maybe::absent());
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
