//! Monad type class - sequencing dependent computations.

use super::functor::Functor;
use crate::outcome::Outcome;

#[cfg(feature = "maybe")]
use crate::maybe::Maybe;

/// A functor that can lift a plain value and sequence steps that depend on
/// the previous success.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Functor {
    /// Lifts a value into the success position.
    fn pure(value: Self::Inner) -> Self;

    /// Applies a step returning a new container and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::prelude::*;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None };
    /// assert_eq!(Maybe::pure(8).flat_map(half), Maybe::Some(4));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the first success value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }

    /// Collapses a container whose success value is the same container.
    ///
    /// Equivalent to `flat_map(|inner| inner)`, and to the inherent
    /// `unfold` of `Outcome` and `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::prelude::*;
    ///
    /// let nested: Maybe<Maybe<i32>> = some(some(3));
    /// let flat: Maybe<i32> = nested.flatten();
    /// assert_eq!(flat, some(3));
    /// ```
    #[inline]
    fn flatten<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Into<Self::WithType<B>>,
    {
        self.flat_map(Into::into)
    }
}

impl<V, E: Clone> Monad for Outcome<V, E> {
    #[inline]
    fn pure(value: V) -> Self {
        Self::Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(V) -> Outcome<B, E>,
    {
        self.chain(function)
    }
}

#[cfg(feature = "maybe")]
impl<V> Monad for Maybe<V> {
    #[inline]
    fn pure(value: V) -> Self {
        Self::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(V) -> Maybe<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_pure_is_ok() {
        assert_eq!(Outcome::<i32, String>::pure(1), Outcome::Ok(1));
    }

    #[rstest]
    fn outcome_then_propagates_failure() {
        let failure: Outcome<i32, &str> = Outcome::Err("first");
        assert_eq!(failure.then(Outcome::Ok("next")), Outcome::Err("first"));

        let success: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(success.then(Outcome::Ok("next")), Outcome::Ok("next"));
    }

    #[rstest]
    fn outcome_flatten_inner_failure() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
        let flat: Outcome<i32, &str> = nested.flatten();
        assert_eq!(flat, Outcome::Err("inner"));
    }

    #[cfg(feature = "maybe")]
    #[rstest]
    fn maybe_flat_map_to_none() {
        assert_eq!(Maybe::Some(1).flat_map(|_| Maybe::<i32>::None), Maybe::None);
    }
}
