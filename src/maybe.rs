//! Maybe type - a value that may be absent.
//!
//! `Maybe<V>` mirrors [`Outcome<V, Empty>`](crate::outcome::Outcome): `Some(V)`
//! plays the success role and `None` the payload-less failure. It is a
//! distinct type so that "absent" reads as absence rather than as an error.
//!
//! # Examples
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! let port = some("8080")
//!     .chain(|raw| Maybe::from(raw.parse::<u16>().ok()))
//!     .check(|port| *port >= 1024);
//! assert_eq!(port, Maybe::Some(8080));
//!
//! let missing: Maybe<u16> = none();
//! assert_eq!(missing.or(some(80)), Maybe::Some(80));
//! ```

use crate::empty::Empty;
use crate::error::{Variant, VariantError};
use crate::outcome::Outcome;

/// A value that is either present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Maybe` may be absent, which should be handled"]
pub enum Maybe<V> {
    /// A present value.
    Some(V),
    /// No value.
    None,
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

impl<V> Default for Maybe<V> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<V> Maybe<V> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an incorrect-variant message on `None`.
    #[inline]
    #[track_caller]
    pub fn take(self) -> V {
        match self.try_take() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the contained value, or a [`VariantError`] on `None`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError { expected: Some, found: None }` on `None`.
    #[inline]
    pub fn try_take(self) -> Result<V, VariantError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(VariantError::new(Variant::Some, Variant::None)),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn take_or(self, default: V) -> V {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one.
    #[inline]
    pub fn take_or_else<F>(self, function: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Converts `&Maybe<V>` into `Maybe<&V>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&V> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Eliminates the maybe by applying `on_some` or evaluating `on_none`.
    #[inline]
    pub fn fold<T, F, G>(self, on_some: F, on_none: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Applies a function to the contained value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Sequences a step that may itself produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::maybe::Maybe;
    ///
    /// let first_char = |s: &str| Maybe::from(s.chars().next());
    /// assert_eq!(Maybe::Some("abc").chain(first_char), Maybe::Some('a'));
    /// assert_eq!(Maybe::Some("").chain(first_char), Maybe::None);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(V) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use = "this returns a new maybe and leaves the original unused"]
    pub fn check<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Narrows the contained value with a guard, dropping it when the guard
    /// rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::maybe::Maybe;
    ///
    /// let wide = Maybe::Some(65_u32);
    /// assert_eq!(wide.assert(char::from_u32), Maybe::Some('A'));
    /// ```
    #[inline]
    pub fn assert<W, G>(self, guard: G) -> Maybe<W>
    where
        G: FnOnce(V) -> Option<W>,
    {
        match self {
            Self::Some(value) => guard(value).into(),
            Self::None => Maybe::None,
        }
    }

    /// Replaces `None` with `alternative`.
    #[inline]
    #[must_use = "this returns a new maybe and leaves the original unused"]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative,
        }
    }

    /// Replaces `None` with the result of `function`, which only runs when
    /// needed.
    #[inline]
    #[must_use = "this returns a new maybe and leaves the original unused"]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Calls `effect` with the contained value, then returns self unchanged.
    #[inline]
    pub fn on_some<F>(self, effect: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Some(ref value) = self {
            effect(value);
        }
        self
    }

    /// Calls `effect` if no value is present, then returns self unchanged.
    #[inline]
    pub fn on_none<F>(self, effect: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            effect();
        }
        self
    }

    /// Converts into an [`Outcome`], using `error` for `None`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<V, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into an [`Outcome`] whose failure is the [`Empty`] sentinel.
    #[inline]
    pub fn ok_or_empty(self) -> Outcome<V, Empty> {
        self.ok_or(Empty)
    }
}

impl<V> Maybe<Maybe<V>> {
    /// Collapses one level of nesting.
    #[inline]
    pub fn unfold(self) -> Maybe<V> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<V> From<Option<V>> for Maybe<V> {
    #[inline]
    fn from(option: Option<V>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}
