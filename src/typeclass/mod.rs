//! Type classes shared by the containers.
//!
//! [`Outcome`](crate::outcome::Outcome) and [`Maybe`](crate::maybe::Maybe) each
//! carry their own inherent combinators. The traits here describe the part they
//! have in common, so code can be written once against either container:
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the success value
//! - [`Monad`]: lifting a value and sequencing dependent steps
//!
//! # Examples
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! fn increment<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Outcome::<i32, String>::Ok(1)), Outcome::Ok(2));
//! assert_eq!(increment(Maybe::Some(1)), Maybe::Some(2));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
