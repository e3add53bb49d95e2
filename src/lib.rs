//! # fallible
//!
//! Algebraic containers for composing computations without panics or null
//! checks.
//!
//! ## Overview
//!
//! - **[`Outcome`](outcome::Outcome)**: success (`Ok`) or failure (`Err`), with
//!   combinators for mapping, chaining, checking and recovering
//! - **[`Maybe`](maybe::Maybe)**: presence (`Some`) or absence (`None`)
//! - **[`Empty`](empty::Empty)**: the sentinel used when a variant carries no
//!   payload
//! - **[Interop](interop)**: capturing panics and rejected futures into an
//!   `Outcome`
//! - **Type Classes**: `Functor` and `Monad` over both containers
//!
//! ## Feature Flags
//!
//! - `maybe`: the `Maybe` container
//! - `typeclass`: `TypeConstructor`, `Functor` and `Monad`
//! - `async`: future interop (`from_future`, `catch_future`)
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from(raw.parse::<u16>())
//!         .refine(|error| format!("invalid port {raw:?}: {error}"))
//!         .check(|port| *port != 0, "port 0 is reserved".to_string())
//! }
//!
//! assert_eq!(parse_port("8080"), ok(8080));
//! assert_eq!(parse_port("0"), err("port 0 is reserved".to_string()));
//! assert_eq!(parse_port("http").take_or(80), 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type classes and the free constructor
/// functions.
///
/// # Usage
///
/// ```rust
/// use fallible::prelude::*;
///
/// let value: Outcome<i32, Empty> = ok(1);
/// assert!(value.is_ok());
/// ```
pub mod prelude {
    pub use crate::empty::Empty;
    pub use crate::error::{Thrown, Variant, VariantError};
    pub use crate::outcome::Outcome;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    /// Creates a success holding `value`.
    #[inline]
    pub const fn ok<V, E>(value: V) -> Outcome<V, E> {
        Outcome::Ok(value)
    }

    /// Creates a success holding the [`Empty`] sentinel.
    #[inline]
    pub const fn ok_empty<E>() -> Outcome<Empty, E> {
        Outcome::ok_empty()
    }

    /// Creates a failure holding `error`.
    #[inline]
    pub const fn err<V, E>(error: E) -> Outcome<V, E> {
        Outcome::Err(error)
    }

    /// Creates a failure holding the [`Empty`] sentinel.
    #[inline]
    pub const fn err_empty<V>() -> Outcome<V, Empty> {
        Outcome::err_empty()
    }

    /// Creates a present [`Maybe`].
    #[cfg(feature = "maybe")]
    #[inline]
    pub const fn some<V>(value: V) -> Maybe<V> {
        Maybe::Some(value)
    }

    /// Creates an absent [`Maybe`].
    #[cfg(feature = "maybe")]
    #[inline]
    pub const fn none<V>() -> Maybe<V> {
        Maybe::None
    }
}

pub mod empty;
pub mod error;
pub mod interop;
pub mod outcome;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;
