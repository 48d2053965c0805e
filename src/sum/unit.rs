//! The `Unit` type - a value carrying no information.
//!
//! [`Unit`] is the return type of side-effecting combinators such as
//! `effect` and `ignore`. Returning `Unit` instead of `()` keeps the
//! combinator surface uniform: every operation yields a value that can be
//! piped, stored, or compared.
//!
//! # Examples
//!
//! ```rust
//! use sumars::sum::{Unit, unit};
//!
//! // All units are the same unit.
//! assert_eq!(unit(), Unit);
//! assert_eq!(unit() + unit(), unit());
//! assert_eq!(unit().to_string(), "()");
//! ```

use std::fmt;
use std::ops::Add;

/// A value carrying no information.
///
/// All instances compare equal, hash identically, and order as equal.
/// `Unit` forms a trivial monoid: `Unit + Unit == Unit`.
///
/// # Examples
///
/// ```rust
/// use sumars::sum::Unit;
///
/// let first = Unit;
/// let second = Unit;
/// assert_eq!(first, second);
/// assert_eq!(first.cmp(&second), std::cmp::Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

/// Returns the unit value.
///
/// A free-function constructor for use at the end of combinator chains or
/// as a handler result.
///
/// # Examples
///
/// ```rust
/// use sumars::sum::{Unit, unit};
///
/// assert_eq!(unit(), Unit);
/// ```
#[inline]
#[must_use]
pub const fn unit() -> Unit {
    Unit
}

impl Add for Unit {
    type Output = Self;

    /// The additive identity: combining two units yields the unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Unit;
    ///
    /// assert_eq!(Unit + Unit, Unit);
    /// ```
    #[inline]
    fn add(self, _other: Self) -> Self {
        Self
    }
}

impl fmt::Display for Unit {
    /// Formats the unit as the fixed token `"()"`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

static_assertions::assert_impl_all!(Unit: Send, Sync, Copy);
