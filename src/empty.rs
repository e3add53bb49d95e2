//! The empty sentinel.
//!
//! [`Empty`] stands in for a payload when an [`Outcome`](crate::outcome::Outcome)
//! or [`Maybe`](crate::maybe::Maybe) carries nothing meaningful, so that
//! "empty success" and "empty failure" are handled like any other value.
//!
//! # Examples
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! let done: Outcome<Empty, String> = ok_empty();
//! assert_eq!(done, Outcome::Ok(Empty));
//!
//! let rejected: Outcome<i32, Empty> = err_empty();
//! assert_eq!(rejected.take_err(), Empty);
//! ```

use std::fmt;

/// A unit-like placeholder value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl From<Empty> for () {
    #[inline]
    fn from(_: Empty) -> Self {}
}

impl From<()> for Empty {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

static_assertions::assert_impl_all!(Empty: Send, Sync, Copy, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_display() {
        assert_eq!(Empty.to_string(), "Empty");
    }

    #[rstest]
    fn test_empty_default_equals_constant() {
        assert_eq!(Empty::default(), Empty);
    }

    #[rstest]
    fn test_empty_unit_conversions() {
        let () = Empty.into();
        assert_eq!(Empty::from(()), Empty);
    }
}
