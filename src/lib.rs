//! # sumars
//!
//! Algebraic sum types with a uniform synchronous/asynchronous combinator
//! surface.
//!
//! ## Overview
//!
//! This library models presence/absence and success/failure as ordinary
//! values instead of panics or sentinel states. It provides:
//!
//! - **Sum Types**: [`Maybe`](sum::Maybe), [`Outcome`](sum::Outcome),
//!   tagged unions of arity 2–9, and the [`Unit`](sum::Unit) value
//! - **Combinators**: `map`, `bind`, `match_with`, `reduce`, `effect`,
//!   `tap`, plus value-level helpers (`pipe`, `ignore`, `match_bool`)
//!   and the `pipe!`, `tap!`, `effect!` macros
//! - **Persistent Sequences**: an immutable cons [`Sequence`](sequence::Sequence)
//!   with structural sharing
//! - **Async Mirror**: every combinator has a counterpart that accepts a
//!   future subject and/or a future-returning handler and resolves to a
//!   single future layer
//! - **Validation**: an accumulating [`Validated`](validation::Validated)
//!   collaborator that collects failure messages instead of
//!   short-circuiting
//!
//! ## Feature Flags
//!
//! - `sum`: Sum types (`Unit`, `Maybe`, `Outcome`, unions)
//! - `combinator`: Value-level combinators and macros
//! - `sequence`: Persistent sequences
//! - `validation`: Accumulating validation
//! - `async`: Asynchronous combinator layer
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sumars::prelude::*;
//!
//! let greeting = Maybe::just("hello")
//!     .map(str::to_uppercase)
//!     .reduce_with(|| String::from("nothing here"));
//! assert_eq!(greeting, "HELLO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and free functions.
///
/// # Usage
///
/// ```rust
/// use sumars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sum")]
    pub use crate::sum::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

#[cfg(feature = "sum")]
pub mod sum;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "async")]
pub mod future;
