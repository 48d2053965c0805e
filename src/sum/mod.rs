//! Algebraic sum types.
//!
//! This module provides the closed sum types at the heart of the library:
//!
//! - [`Unit`]: a zero-information value for side-effecting combinators
//! - [`Maybe`]: presence ([`Just`](Maybe::Just)) or absence
//!   ([`Nothing`](Maybe::Nothing)) of a value
//! - [`Outcome`]: success ([`Success`](Outcome::Success)) or failure
//!   ([`Failure`](Outcome::Failure)), each carrying a typed payload
//! - [`Union2`]..[`Union9`]: closed, ordered unions of 2–9 mutually
//!   exclusive typed variants
//!
//! All of these are immutable after construction: every combinator returns
//! a new value rather than mutating its receiver, so the whole surface is
//! safe to share across independent pipelines.
//!
//! # Examples
//!
//! ## Presence and absence
//!
//! ```rust
//! use sumars::sum::Maybe;
//!
//! let present = Maybe::just(21).map(|x| x * 2);
//! assert_eq!(present, Maybe::Just(42));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
//! ```
//!
//! ## Success and failure
//!
//! ```rust
//! use sumars::sum::Outcome;
//!
//! fn half(x: i32) -> Outcome<i32, String> {
//!     if x % 2 == 0 {
//!         Outcome::success(x / 2)
//!     } else {
//!         Outcome::failure(format!("{x} is odd"))
//!     }
//! }
//!
//! assert_eq!(half(42).unwrap(), 21);
//! assert_eq!(half(7).unwrap_failure(), "7 is odd");
//! ```

mod maybe;
mod outcome;
mod union;
mod unit;

pub use maybe::{Maybe, just, nothing};
pub use outcome::{Fallible, Outcome, failure, success};
pub use union::{Union2, Union3, Union4, Union5, Union6, Union7, Union8, Union9};
#[cfg(feature = "async")]
pub use union::{
    Union2Future, Union3Future, Union4Future, Union5Future, Union6Future, Union7Future,
    Union8Future, Union9Future,
};
pub use unit::{Unit, unit};
