//! Asynchronous pipe, tap, and effect for arbitrary values.
//!
//! [`PipeFuture`] extends *any* future with the value-level combinators
//! of [`combinator`](crate::combinator), applied to the resolved value:
//! the subject is awaited, the handler runs (and is itself awaited in the
//! `_async` forms), and exactly one future layer comes back.
//!
//! The free functions [`pipe_async`], [`tap_async`], and [`effect_async`]
//! cover the remaining shape: a plain subject with an asynchronous
//! handler.

use std::future::Future;

use crate::sum::Unit;

/// Applies an asynchronous function to a plain value.
///
/// Returns the handler's future directly — exactly one deferred layer,
/// nothing re-wrapped.
///
/// # Examples
///
/// ```rust,ignore
/// let rendered = pipe_async(1, |x| async move { x.to_string() }).await;
/// assert_eq!(rendered, "1");
/// ```
#[inline]
pub fn pipe_async<T, F, Fut>(value: T, function: F) -> Fut
where
    F: FnOnce(T) -> Fut,
    Fut: Future,
{
    function(value)
}

/// Runs an asynchronous action against a plain value, then returns the
/// original value.
#[inline]
pub async fn tap_async<T, F, Fut>(value: T, action: F) -> T
where
    F: FnOnce(&T) -> Fut,
    Fut: Future<Output = ()>,
{
    action(&value).await;
    value
}

/// Runs an asynchronous action, then returns [`Unit`].
#[inline]
pub async fn effect_async<F, Fut>(action: F) -> Unit
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    action().await;
    Unit
}

/// Extension combinators for any future.
///
/// Every method awaits the subject first and then behaves exactly like
/// the value-level combinator of the same base name from
/// [`combinator`](crate::combinator).
pub trait PipeFuture: Future + Sized {
    /// Awaits the subject, then applies a synchronous function to the
    /// resolved value.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rendered = async { 1 }.pipe(|x| x.to_string()).await;
    /// assert_eq!(rendered, "1");
    /// ```
    fn pipe<R, F>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Self::Output) -> R,
    {
        async move { function(self.await) }
    }

    /// Awaits the subject, then applies an asynchronous function to the
    /// resolved value, awaiting its result too.
    fn pipe_async<F, Fut>(self, function: F) -> impl Future<Output = Fut::Output>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future,
    {
        async move { function(self.await).await }
    }

    /// Awaits the subject, runs an action against the resolved value,
    /// and passes the value through unchanged.
    fn tap<F>(self, action: F) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output),
    {
        async move {
            let value = self.await;
            action(&value);
            value
        }
    }

    /// Awaits the subject, awaits an asynchronous action against the
    /// resolved value, and passes the value through unchanged.
    fn tap_async<F, Fut>(self, action: F) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let value = self.await;
            action(&value).await;
            value
        }
    }

    /// Awaits the subject, consumes the resolved value with an action,
    /// and returns [`Unit`].
    fn effect<F>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(Self::Output),
    {
        async move {
            action(self.await);
            Unit
        }
    }

    /// Awaits the subject, awaits an asynchronous action consuming the
    /// resolved value, and returns [`Unit`].
    fn effect_async<F, Fut>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            action(self.await).await;
            Unit
        }
    }

    /// Awaits the subject and discards the resolved value as [`Unit`].
    fn ignore(self) -> impl Future<Output = Unit> {
        async move {
            let _ = self.await;
            Unit
        }
    }
}

impl<Subject> PipeFuture for Subject where Subject: Future {}
