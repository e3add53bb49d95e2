//! Bridges from native failure into the outcome algebra.
//!
//! Rust code fails in two native ways outside of `Result`: a panic unwinding
//! through the stack, and an asynchronous computation resolving to an error.
//! The constructors in this module are the sanctioned crossing points:
//!
//! | Native failure | Constructor |
//! |---|---|
//! | panic in a closure | [`Outcome::from_try_catch`], [`Outcome::from_try_catch_with`] |
//! | future resolving to `Err` | [`Outcome::from_future`], [`Outcome::from_future_with`], [`Outcome::from_future_fn`] |
//! | panic while polling a future | [`Outcome::catch_future`], [`Outcome::catch_future_with`] |
//!
//! A captured failure is logged at `debug` level through `tracing` and then
//! carried as an ordinary `Err`; it is never re-raised.
//!
//! # Unwind Safety
//!
//! Closures and futures are run under [`AssertUnwindSafe`]. Any state they
//! mutate through captured references may be left half-updated when a panic
//! is captured.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Thrown;
use crate::outcome::Outcome;

impl<V> Outcome<V, Thrown> {
    /// Runs `function`, capturing a panic into `Err(Thrown)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_try_catch(|| 42).take(), 42);
    ///
    /// let boom = Outcome::from_try_catch(|| -> i32 { panic!("boom") });
    /// assert_eq!(boom.take_err().message(), Some("boom"));
    /// ```
    pub fn from_try_catch<F>(function: F) -> Self
    where
        F: FnOnce() -> V,
    {
        Self::from_try_catch_with(function, std::convert::identity)
    }
}

impl<V, E> Outcome<V, E> {
    /// Runs `function`, capturing a panic and converting it with `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::from_try_catch_with(
    ///     || panic!("boom"),
    ///     |thrown| thrown.to_string(),
    /// );
    /// assert_eq!(outcome, Outcome::Err("boom".to_string()));
    /// ```
    pub fn from_try_catch_with<F, M>(function: F, mapper: M) -> Self
    where
        F: FnOnce() -> V,
        M: FnOnce(Thrown) -> E,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(panic = %thrown, "captured panic into outcome");
                Self::Err(mapper(thrown))
            }
        }
    }
}

// =============================================================================
// Async Interop
// =============================================================================

#[cfg(feature = "async")]
impl<V, E> Outcome<V, E> {
    /// Awaits a fallible future, turning its rejection into `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let resolved = Outcome::from_future(async { Ok::<_, String>(1) }).await;
    /// assert_eq!(resolved, Outcome::Ok(1));
    /// # });
    /// ```
    pub async fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: IntoFuture<Output = Result<V, E>>,
    {
        Self::from_future_with(future, std::convert::identity).await
    }

    /// Awaits a fallible future, converting its rejection with `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::outcome::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let rejected: Outcome<i32, String> =
    ///     Outcome::from_future_with(async { Err("x") }, |reason| format!("{reason}!")).await;
    /// assert_eq!(rejected, Outcome::Err("x!".to_string()));
    /// # });
    /// ```
    pub async fn from_future_with<Fut, R, M>(future: Fut, mapper: M) -> Self
    where
        Fut: IntoFuture<Output = Result<V, R>>,
        M: FnOnce(R) -> E,
    {
        match future.await {
            Ok(value) => Self::Ok(value),
            Err(reason) => {
                tracing::debug!("captured future rejection into outcome");
                Self::Err(mapper(reason))
            }
        }
    }

    /// Creates the future with `thunk` and awaits it like
    /// [`from_future`](Self::from_future).
    ///
    /// `thunk` is not called until the returned future is first polled.
    pub async fn from_future_fn<T, Fut>(thunk: T) -> Self
    where
        T: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<V, E>>,
    {
        Self::from_future(thunk()).await
    }

    /// Awaits `future`, capturing a panic raised while polling it and
    /// converting it with `mapper`.
    pub async fn catch_future_with<Fut, M>(future: Fut, mapper: M) -> Self
    where
        Fut: IntoFuture<Output = V>,
        M: FnOnce(Thrown) -> E,
    {
        use futures::FutureExt;

        match AssertUnwindSafe(future.into_future()).catch_unwind().await {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(panic = %thrown, "captured panicking future into outcome");
                Self::Err(mapper(thrown))
            }
        }
    }
}

#[cfg(feature = "async")]
impl<V> Outcome<V, Thrown> {
    /// Awaits `future`, capturing a panic raised while polling it into
    /// `Err(Thrown)`.
    pub async fn catch_future<Fut>(future: Fut) -> Self
    where
        Fut: IntoFuture<Output = V>,
    {
        Self::catch_future_with(future, std::convert::identity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_from_try_catch_wraps_return_value() {
        assert_eq!(Outcome::from_try_catch(|| 42).take(), 42);
    }

    #[rstest]
    fn test_from_try_catch_captures_static_str_panic() {
        let outcome = Outcome::from_try_catch(|| -> i32 { panic!("boom") });
        assert_eq!(outcome.take_err().message(), Some("boom"));
    }

    #[rstest]
    fn test_from_try_catch_captures_formatted_panic() {
        let code = 7;
        let outcome = Outcome::from_try_catch(|| -> i32 { panic!("failed with {code}") });
        assert_eq!(outcome.take_err().message(), Some("failed with 7"));
    }

    #[rstest]
    fn test_from_try_catch_with_maps_thrown() {
        let outcome: Outcome<i32, usize> =
            Outcome::from_try_catch_with(|| panic!("four"), |thrown| thrown.to_string().len());
        assert_eq!(outcome, Outcome::Err(4));
    }

    #[rstest]
    fn test_from_try_catch_with_skips_mapper_on_success() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, ()> = Outcome::from_try_catch_with(
            || 1,
            |_| {
                calls.set(calls.get() + 1);
            },
        );
        assert_eq!(outcome, Outcome::Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_from_try_catch_captures_index_panic() {
        let values: Vec<i32> = Vec::new();
        let outcome = Outcome::from_try_catch(|| values[3]);
        assert!(outcome.is_err());
    }
}
