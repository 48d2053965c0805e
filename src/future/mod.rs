//! The asynchronous combinator layer.
//!
//! Every synchronous combinator in this crate has an asynchronous
//! counterpart. A combinator chain may mix four shapes freely — the
//! subject may be a plain value or a future, and a handler may return a
//! plain value or a future — and each link resolves to exactly one
//! future layer:
//!
//! | subject | handler | spelling                                   |
//! |---------|---------|--------------------------------------------|
//! | plain   | plain   | sync combinator: `m.map(f)`                |
//! | plain   | async   | inherent method: `m.map_async(f).await`    |
//! | future  | plain   | extension trait: `fut.map(f).await`        |
//! | future  | async   | extension trait: `fut.map_async(f).await`  |
//!
//! The policy, applied uniformly: await the subject if it is deferred,
//! apply the synchronous branching logic to the concrete value, await the
//! selected handler's result if that is deferred too, and return a single
//! future of the final value. A handler on the untaken branch is never
//! invoked, so its future is never even constructed.
//!
//! This module defines no runtime and spawns nothing: chains suspend at
//! each `await` and resume when the external executor resolves them, in
//! strictly sequential order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sumars::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     // future subject, async handler: still a single future layer.
//!     let loaded = async { Maybe::just(2) }
//!         .map_async(|x| async move { x * 21 })
//!         .await;
//!     assert_eq!(loaded, Maybe::Just(42));
//! }
//! ```

mod maybe;
mod outcome;
mod pipe;

pub use maybe::MaybeFuture;
pub use outcome::OutcomeFuture;
pub use pipe::{PipeFuture, effect_async, pipe_async, tap_async};
