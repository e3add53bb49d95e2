//! Error types raised by the algebra itself.
//!
//! Modeled failures are whatever the caller puts into an `Err`; the types here
//! cover the two cases the library produces on its own:
//!
//! - [`VariantError`]: the wrong side of a container was extracted
//! - [`Thrown`]: a panic captured at the interop boundary

use std::any::Any;
use std::fmt;

/// Names a variant of [`Outcome`](crate::outcome::Outcome) or
/// [`Maybe`](crate::maybe::Maybe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `Outcome::Ok`.
    Ok,
    /// `Outcome::Err`.
    Err,
    /// `Maybe::Some`.
    Some,
    /// `Maybe::None`.
    None,
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
            Self::Some => "Some",
            Self::None => "None",
        };
        formatter.write_str(name)
    }
}

/// Represents an attempt to extract the payload of a variant that is not active.
///
/// Calling `take` on a failure (or `take_err` on a success) is a programming
/// mistake rather than a modeled failure. The panicking extractors use this
/// error's message; the `try_` extractors return it.
///
/// # Examples
///
/// ```rust
/// use fallible::error::{Variant, VariantError};
/// use fallible::outcome::Outcome;
///
/// let failure: Outcome<i32, &str> = Outcome::Err("nope");
/// let error = failure.try_take().unwrap_err();
/// assert_eq!(error, VariantError::new(Variant::Ok, Variant::Err));
/// assert_eq!(error.to_string(), "incorrect variant: expected Ok, found Err");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantError {
    /// The variant the caller asked for.
    pub expected: Variant,
    /// The variant that was actually active.
    pub found: Variant,
}

impl VariantError {
    /// Creates a new `VariantError`.
    #[inline]
    pub const fn new(expected: Variant, found: Variant) -> Self {
        Self { expected, found }
    }
}

impl fmt::Display for VariantError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "incorrect variant: expected {}, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for VariantError {}

/// A panic payload captured by the interop boundary.
///
/// Panics carry an arbitrary `Box<dyn Any + Send>`. In practice that is a
/// `&'static str` or a `String` produced by `panic!`, which [`Thrown::message`]
/// exposes; anything else is still kept and can be recovered with
/// [`Thrown::into_payload`].
///
/// # Examples
///
/// ```rust
/// use fallible::outcome::Outcome;
///
/// let captured = Outcome::from_try_catch(|| -> i32 { panic!("boom") });
/// assert_eq!(captured.take_err().message(), Some("boom"));
/// ```
pub struct Thrown {
    payload: Box<dyn Any + Send + 'static>,
}

impl Thrown {
    /// Wraps a panic payload.
    #[inline]
    pub const fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message if the payload is a string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns a reference to the raw payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        self.payload.as_ref()
    }

    /// Consumes the `Thrown` and returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Resumes unwinding with the captured payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Thrown")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message().unwrap_or("unknown panic"))
    }
}

impl std::error::Error for Thrown {}
