//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Outcome<_, E>` as a type constructor directly.
//! [`TypeConstructor`] names the applied type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`).

use crate::outcome::Outcome;

#[cfg(feature = "maybe")]
use crate::maybe::Maybe;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<V, E> TypeConstructor for Outcome<V, E> {
    type Inner = V;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(feature = "maybe")]
impl<V> TypeConstructor for Maybe<V> {
    type Inner = V;
    type WithType<B> = Maybe<B>;
}
