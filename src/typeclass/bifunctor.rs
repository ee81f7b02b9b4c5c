//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` generalises `Functor` to types with two type parameters.
//! `Either` is the bifunctor of this crate: `first` maps the left side,
//! `second` the right side.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Either;
//! use maybars::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.first(|x| x * 2), Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.second(|s| s.len()), Either::Right(5));
//! ```

use crate::control::Either;

/// A type class for types with two mappable type parameters.
pub trait Bifunctor<A, B> {
    /// The same type with both parameters replaced.
    type Target<C, D>;

    /// Maps both sides at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both sides through references, leaving `self` intact.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_first_leaves_right_alone() {
        let right: Either<i32, &str> = Either::Right("kept");
        assert_eq!(right.first(|n| n + 1), Either::Right("kept"));
    }

    #[rstest]
    fn either_bimap_ref_does_not_consume() {
        let left: Either<String, i32> = Either::Left("abc".to_string());
        let mapped = left.bimap_ref(|s| s.len(), |n| n * 2);
        assert_eq!(mapped, Either::Left(3));
        assert_eq!(left, Either::Left("abc".to_string()));
    }
}
