//! Tests for capturing native failures into outcomes.

#[allow(unused_imports)]
use fallible::interop;
use fallible::prelude::*;
use rstest::rstest;

// =============================================================================
// Synchronous capture
// =============================================================================

#[rstest]
fn from_try_catch_returns_ok_for_value() {
    assert_eq!(Outcome::from_try_catch(|| 42).take(), 42);
}

#[rstest]
fn from_try_catch_returns_err_for_panic() {
    let outcome = Outcome::from_try_catch(|| -> i32 { panic!("boom") });
    let thrown = outcome.take_err();
    assert_eq!(thrown.message(), Some("boom"));
    assert_eq!(thrown.to_string(), "boom");
}

#[rstest]
fn from_try_catch_with_feeds_the_algebra() {
    let outcome: Outcome<u32, String> =
        Outcome::from_try_catch_with(|| "17".parse::<u32>().map_err(|e| e.to_string()), |thrown| {
            thrown.to_string()
        })
        .chain(Outcome::from);
    assert_eq!(outcome, ok(17));
}

#[rstest]
fn captured_panic_can_be_recovered_with_or_else() {
    let recovered: Outcome<i32, Empty> =
        Outcome::from_try_catch(|| -> i32 { panic!("lost") }).or_else(|_| ok(0));
    assert_eq!(recovered, ok(0));
}

// =============================================================================
// Asynchronous capture
// =============================================================================

#[cfg(feature = "async")]
mod future_interop {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn from_future_resolves_to_ok() {
        let outcome = Outcome::from_future(async { Ok::<_, String>(1) }).await;
        assert_eq!(outcome, ok(1));
    }

    #[tokio::test]
    async fn from_future_captures_rejection() {
        let outcome = Outcome::from_future(async { Err::<i32, _>("x") }).await;
        assert_eq!(outcome, err("x"));
    }

    #[tokio::test]
    async fn from_future_with_maps_rejection() {
        let outcome: Outcome<i32, String> =
            Outcome::from_future_with(async { Err("x") }, |reason| format!("{reason}!")).await;
        assert_eq!(outcome, err("x!".to_string()));
    }

    #[tokio::test]
    async fn from_future_accepts_ready_futures() {
        let outcome = Outcome::from_future(std::future::ready(Ok::<_, ()>("ready"))).await;
        assert_eq!(outcome, ok("ready"));
    }

    #[tokio::test]
    async fn from_future_fn_defers_thunk_until_polled() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);

        let pending = Outcome::from_future_fn(move || {
            flag.store(true, Ordering::SeqCst);
            async { Ok::<_, String>(5) }
        });
        assert!(!called.load(Ordering::SeqCst));

        assert_eq!(pending.await, ok(5));
        assert!(called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn catch_future_captures_panic() {
        let outcome = Outcome::<i32, Thrown>::catch_future(async {
            tokio::task::yield_now().await;
            panic!("async boom")
        })
        .await;
        assert_eq!(outcome.take_err().message(), Some("async boom"));
    }

    #[tokio::test]
    async fn catch_future_with_maps_panic() {
        let outcome: Outcome<i32, String> =
            Outcome::catch_future_with(async { 3 }, |thrown| thrown.to_string()).await;
        assert_eq!(outcome, ok(3));

        let failed: Outcome<i32, String> = Outcome::catch_future_with(
            async { panic!("late") },
            |thrown| format!("caught: {thrown}"),
        )
        .await;
        assert_eq!(failed, err("caught: late".to_string()));
    }
}
