#![cfg(feature = "maybe")]
//! Property-based tests for the Maybe combinator algebra.
//!
//! - **Functor Laws**: identity and composition for `map`
//! - **Monad Laws**: left identity, right identity, associativity for `chain`
//! - **Correspondence**: `Maybe<V>` behaves like `Outcome<V, Empty>`

use fallible::prelude::*;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { some(n) } else { none() }
}

fn even(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { some(n) } else { none() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: maybe.map(|x| x) == maybe
    #[test]
    fn prop_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }
}

proptest! {
    /// Functor Composition Law: maybe.map(f).map(g) == maybe.map(|x| g(f(x)))
    #[test]
    fn prop_functor_composition(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| i64::from(n) - 1;

        prop_assert_eq!(maybe.map(function1).map(function2), maybe.map(|x| function2(function1(x))));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: Some(v).chain(f) == f(v)
    #[test]
    fn prop_chain_left_identity(value in any::<i32>()) {
        prop_assert_eq!(some(value).chain(positive), positive(value));
    }
}

proptest! {
    /// Right Identity: maybe.chain(Some) == maybe
    #[test]
    fn prop_chain_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.chain(Maybe::Some), maybe);
    }
}

proptest! {
    /// Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
    #[test]
    fn prop_chain_associativity(maybe in maybe_strategy()) {
        prop_assert_eq!(
            maybe.chain(positive).chain(even),
            maybe.chain(|x| positive(x).chain(even))
        );
    }
}

// =============================================================================
// Correspondence with Outcome<V, Empty>
// =============================================================================

proptest! {
    /// check agrees with Outcome::check_empty
    #[test]
    fn prop_check_matches_outcome(maybe in maybe_strategy()) {
        let through_maybe = maybe.check(|n| n % 3 == 0).ok_or_empty();
        let through_outcome = maybe.ok_or_empty().check_empty(|n| n % 3 == 0);
        prop_assert_eq!(through_maybe, through_outcome);
    }
}

proptest! {
    /// or agrees with Outcome::or
    #[test]
    fn prop_or_matches_outcome(maybe in maybe_strategy(), fallback in any::<i32>()) {
        let through_maybe = maybe.or(some(fallback)).ok_or_empty();
        let through_outcome = maybe.ok_or_empty().or(ok(fallback));
        prop_assert_eq!(through_maybe, through_outcome);
    }
}

proptest! {
    /// Converting to Option and back is lossless
    #[test]
    fn prop_option_roundtrip(maybe in maybe_strategy()) {
        let option: Option<i32> = maybe.into();
        prop_assert_eq!(Maybe::from(option), maybe);
    }
}
