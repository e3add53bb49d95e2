//! Outcome type - a value that is either a success or a failure.
//!
//! `Outcome<V, E>` is a closed tagged union with two variants, `Ok(V)` and
//! `Err(E)`, plus a library of combinators for composing fallible steps:
//!
//! - Transformation: [`map`](Outcome::map), [`refine`](Outcome::refine),
//!   [`chain`](Outcome::chain), [`unfold`](Outcome::unfold)
//! - Conditions: [`check`](Outcome::check), [`assert`](Outcome::assert),
//!   [`or`](Outcome::or), [`or_if`](Outcome::or_if)
//! - Side effects: [`on_ok`](Outcome::on_ok), [`on_err`](Outcome::on_err)
//!
//! Every combinator consumes the outcome and returns a new one. A failure
//! short-circuits `map` and `chain`; it only turns back into a success through
//! an explicit `or` step.
//!
//! # Examples
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21")
//!     .check(|n| *n >= 0, "negative".to_string())
//!     .map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let rejected = parse("-1")
//!     .check(|n| *n >= 0, "negative".to_string())
//!     .map(|n| n * 2);
//! assert_eq!(rejected, Outcome::Err("negative".to_string()));
//! ```

use crate::empty::Empty;
use crate::error::{Variant, VariantError};
#[cfg(feature = "maybe")]
use crate::maybe::Maybe;

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// # Type Parameters
///
/// * `V` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use fallible::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// assert!(success.is_ok());
/// assert_eq!(success.map(|x| x + 1).take(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a failure that should be handled"]
pub enum Outcome<V, E> {
    /// The success variant.
    Ok(V),
    /// The failure variant.
    Err(E),
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);

// =============================================================================
// Empty Constructors
// =============================================================================

impl<E> Outcome<Empty, E> {
    /// Creates a success that carries no payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::empty::Empty;
    /// use fallible::outcome::Outcome;
    ///
    /// let done: Outcome<Empty, String> = Outcome::ok_empty();
    /// assert_eq!(done, Outcome::Ok(Empty));
    /// ```
    #[inline]
    pub const fn ok_empty() -> Self {
        Self::Ok(Empty)
    }
}

impl<V> Outcome<V, Empty> {
    /// Creates a failure that carries no payload.
    #[inline]
    pub const fn err_empty() -> Self {
        Self::Err(Empty)
    }
}

impl<V, E> Outcome<V, E> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with an incorrect-variant message if this is an `Err` value.
    /// Use [`try_take`](Self::try_take) when a failure is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.take(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn take(self) -> V {
        match self.try_take() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the failure payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with an incorrect-variant message if this is an `Ok` value.
    #[inline]
    #[track_caller]
    pub fn take_err(self) -> E {
        match self.try_take_err() {
            Ok(error) => error,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success payload, or a [`VariantError`] if this is an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError { expected: Ok, found: Err }` on a failure.
    #[inline]
    pub fn try_take(self) -> Result<V, VariantError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(VariantError::new(Variant::Ok, Variant::Err)),
        }
    }

    /// Returns the failure payload, or a [`VariantError`] if this is an `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError { expected: Err, found: Ok }` on a success.
    #[inline]
    pub fn try_take_err(self) -> Result<E, VariantError> {
        match self {
            Self::Ok(_) => Err(VariantError::new(Variant::Err, Variant::Ok)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn take_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[inline]
    pub fn take_or_else<F>(self, function: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Converts `&Outcome<V, E>` into `Outcome<&V, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("bad");
    /// let rendered = failure.fold(|n| n.to_string(), |e| format!("error: {e}"));
    /// assert_eq!(rendered, "error: bad");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_ok: F, on_err: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Keeps the success payload as a [`Maybe`], discarding any failure.
    #[cfg(feature = "maybe")]
    #[inline]
    pub fn ok(self) -> Maybe<V> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Keeps the failure payload as a [`Maybe`], discarding any success.
    #[cfg(feature = "maybe")]
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the success payload.
    ///
    /// If this is `Ok(v)`, returns `Ok(function(v))`.
    /// If this is `Err(e)`, returns `Err(e)` unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Ok("hello");
    /// assert_eq!(success.map(str::len), Outcome::Ok(5));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err(7);
    /// assert_eq!(failure.map(str::len), Outcome::Err(7));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the failure payload.
    ///
    /// The mirror image of [`map`](Self::map): a success passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("timeout");
    /// let refined = failure.refine(|e| format!("request failed: {e}"));
    /// assert_eq!(refined, Outcome::Err("request failed: timeout".to_string()));
    /// ```
    #[inline]
    pub fn refine<F2, F>(self, function: F) -> Outcome<V, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies `on_ok` to a success or `on_err` to a failure.
    #[inline]
    pub fn bimap<U, F2, F, G>(self, on_ok: F, on_err: G) -> Outcome<U, F2>
    where
        F: FnOnce(V) -> U,
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(on_ok(value)),
            Self::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Sequences a fallible step after a success.
    ///
    /// If this is `Ok(v)`, returns `function(v)`. If this is `Err(e)`, the
    /// step is skipped and `Err(e)` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(8).chain(half).chain(half), Outcome::Ok(2));
    /// assert_eq!(
    ///     Outcome::Ok(6).chain(half).chain(half),
    ///     Outcome::Err("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Sequences a fallible step whose error type converts into `E`.
    ///
    /// Each step of a pipeline may introduce its own error type; the step's
    /// failure is widened into the accumulated error with [`Into`]. Only the
    /// first failure encountered is ever present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Parse(String),
    ///     Range(i64),
    /// }
    ///
    /// impl From<i64> for AppError {
    ///     fn from(value: i64) -> Self {
    ///         Self::Range(value)
    ///     }
    /// }
    ///
    /// let parsed: Outcome<i64, AppError> = Outcome::Ok(300);
    /// let byte = parsed.chain_widen(|n| match u8::try_from(n) {
    ///     Ok(byte) => Outcome::Ok(byte),
    ///     Err(_) => Outcome::Err(n),
    /// });
    /// assert_eq!(byte, Outcome::Err(AppError::Range(300)));
    /// ```
    #[inline]
    pub fn chain_widen<U, E2, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E2>,
        E2: Into<E>,
    {
        match self {
            Self::Ok(value) => function(value).refine(Into::into),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Conditions
    // =========================================================================

    /// Keeps a success only if it satisfies `predicate`.
    ///
    /// On `Ok(v)`, returns `Ok(v)` if `predicate(&v)` holds and `Err(error)`
    /// otherwise. On `Err`, returns self without evaluating the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let age: Outcome<u32, &str> = Outcome::Ok(15);
    /// assert_eq!(age.check(|a| *a >= 18, "too young"), Outcome::Err("too young"));
    /// ```
    #[inline]
    #[must_use = "this returns a new outcome and leaves the original unused"]
    pub fn check<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(error)
                }
            }
            Self::Err(error) => Self::Err(error),
        }
    }

    /// Like [`check`](Self::check), building the error from the rejected value.
    #[inline]
    #[must_use = "this returns a new outcome and leaves the original unused"]
    pub fn check_with<P, F>(self, predicate: P, make_error: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(V) -> E,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(make_error(value))
                }
            }
            Self::Err(error) => Self::Err(error),
        }
    }

    /// Like [`check`](Self::check), failing with the [`Empty`] sentinel.
    #[inline]
    #[must_use = "this returns a new outcome and leaves the original unused"]
    pub fn check_empty<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
        E: From<Empty>,
    {
        self.check(predicate, E::from(Empty))
    }

    /// Narrows the success payload with a guard.
    ///
    /// The guard inspects the payload and returns `Some(narrowed)` when it
    /// passes. A passing guard yields `Ok(narrowed)`; a rejecting guard yields
    /// `Err(error)`. A failure is returned unchanged and the guard never runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let raw: Outcome<i64, &str> = Outcome::Ok(200);
    /// let byte: Outcome<u8, &str> = raw.assert(|n| u8::try_from(n).ok(), "out of range");
    /// assert_eq!(byte, Outcome::Ok(200_u8));
    /// ```
    #[inline]
    pub fn assert<W, G>(self, guard: G, error: E) -> Outcome<W, E>
    where
        G: FnOnce(V) -> Option<W>,
    {
        match self {
            Self::Ok(value) => guard(value).map_or(Outcome::Err(error), Outcome::Ok),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Like [`assert`](Self::assert), failing with the [`Empty`] sentinel.
    #[inline]
    pub fn assert_empty<W, G>(self, guard: G) -> Outcome<W, E>
    where
        G: FnOnce(V) -> Option<W>,
        E: From<Empty>,
    {
        self.assert(guard, E::from(Empty))
    }

    /// Replaces a failure with `alternative`.
    ///
    /// A success is returned as-is, retyped to the alternative's error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("missing");
    /// let fallback: Outcome<i32, String> = failure.or(Outcome::Ok(0));
    /// assert_eq!(fallback, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or<F2>(self, alternative: Outcome<V, F2>) -> Outcome<V, F2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => alternative,
        }
    }

    /// Replaces a failure with the outcome computed from its payload.
    ///
    /// `function` only runs on the failure path.
    #[inline]
    pub fn or_else<F2, F>(self, function: F) -> Outcome<V, F2>
    where
        F: FnOnce(E) -> Outcome<V, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Replaces a failure with `alternative` only when `predicate` accepts it.
    ///
    /// A failure rejected by the predicate is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let not_found: Outcome<&str, u16> = Outcome::Err(404);
    /// let forbidden: Outcome<&str, u16> = Outcome::Err(403);
    ///
    /// assert_eq!(not_found.or_if(|s| *s == 404, Outcome::Ok("default")), Outcome::Ok("default"));
    /// assert_eq!(forbidden.or_if(|s| *s == 404, Outcome::Ok("default")), Outcome::Err(403));
    /// ```
    #[inline]
    #[must_use = "this returns a new outcome and leaves the original unused"]
    pub fn or_if<P>(self, predicate: P, alternative: Self) -> Self
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Err(error) => {
                if predicate(&error) {
                    alternative
                } else {
                    Self::Err(error)
                }
            }
            success @ Self::Ok(_) => success,
        }
    }

    /// Deferred form of [`or_if`](Self::or_if).
    #[inline]
    #[must_use = "this returns a new outcome and leaves the original unused"]
    pub fn or_else_if<P, F>(self, predicate: P, function: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Err(error) => {
                if predicate(&error) {
                    function(error)
                } else {
                    Self::Err(error)
                }
            }
            success @ Self::Ok(_) => success,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `effect` with the success payload, then returns self unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let success: Outcome<i32, &str> = Outcome::Ok(3);
    /// let same = success.on_ok(|n| seen.push(*n)).on_err(|_| unreachable!());
    /// assert_eq!(same, Outcome::Ok(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn on_ok<F>(self, effect: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Ok(ref value) = self {
            effect(value);
        }
        self
    }

    /// Calls `effect` with the failure payload, then returns self unchanged.
    #[inline]
    pub fn on_err<F>(self, effect: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(ref error) = self {
            effect(error);
        }
        self
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Collapses one level of nesting.
    ///
    /// `Ok(Ok(v))` becomes `Ok(v)`, `Ok(Err(e))` becomes `Err(e)` and an outer
    /// `Err(e)` stays `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Ok(5));
    /// assert_eq!(nested.unfold(), Outcome::Ok(5));
    /// ```
    #[inline]
    pub fn unfold(self) -> Outcome<V, E> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
