//! Functor type class - mapping over the success value.

use super::higher::TypeConstructor;
use crate::outcome::Outcome;

#[cfg(feature = "maybe")]
use crate::maybe::Maybe;

/// A container whose success value can be transformed.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// container.fmap(|x| x) == container
/// ```
///
/// ## Composition
///
/// ```text
/// container.fmap(f).fmap(g) == container.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use fallible::prelude::*;
///
/// let failure: Outcome<i32, &str> = Outcome::Err("e");
/// assert_eq!(failure.fmap(|n| n * 2), Outcome::Err("e"));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the success value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the success value, leaving
    /// `self` usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::prelude::*;
    ///
    /// let name: Outcome<String, String> = Outcome::Ok("fallible".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Outcome::Ok(8));
    /// assert_eq!(name.take(), "fallible");
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the success value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the success value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<V, E: Clone> Functor for Outcome<V, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(V) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&V) -> B,
    {
        self.as_ref().map(function).refine(E::clone)
    }
}

#[cfg(feature = "maybe")]
impl<V> Functor for Maybe<V> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(V) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&V) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_fmap_ok() {
        let success: Outcome<i32, String> = Outcome::Ok(2);
        assert_eq!(success.fmap(|n| n.to_string()), Outcome::Ok("2".to_string()));
    }

    #[rstest]
    fn outcome_replace_and_void() {
        let success: Outcome<i32, &str> = Outcome::Ok(2);
        assert_eq!(success.replace('x'), Outcome::Ok('x'));
        assert_eq!(success.void(), Outcome::Ok(()));

        let failure: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(failure.void(), Outcome::Err("e"));
    }

    #[rstest]
    fn outcome_fmap_ref_clones_error() {
        let failure: Outcome<String, String> = Outcome::Err("bad".to_string());
        assert_eq!(failure.fmap_ref(String::len), Outcome::Err("bad".to_string()));
        assert!(failure.is_err());
    }

    #[cfg(feature = "maybe")]
    #[rstest]
    fn maybe_fmap() {
        assert_eq!(Maybe::Some(3).fmap(|n| n + 1), Maybe::Some(4));
        assert_eq!(Maybe::<i32>::None.fmap(|n| n + 1), Maybe::None);
    }
}
