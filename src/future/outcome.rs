//! Asynchronous combinators for [`Outcome`].
//!
//! The two-channel mirror of [`future::maybe`](crate::future::MaybeFuture):
//! inherent `_async` methods for a plain subject with an asynchronous
//! handler, and the [`OutcomeFuture`] extension trait for a deferred
//! subject. Failures short-circuit exactly as in the synchronous surface;
//! a short-circuited handler's future is never constructed.

use std::future::Future;

use crate::sum::{Outcome, Unit};

impl<T, E> Outcome<T, E> {
    /// Asynchronous [`map`](Outcome::map): applies an async mapper to the
    /// success payload, awaiting its result. A failure propagates without
    /// invoking the mapper.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let ok: Outcome<i32, String> = Outcome::success(2);
    /// assert_eq!(ok.map_async(|x| async move { x * 3 }).await, Outcome::Success(6));
    /// ```
    #[inline]
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value).await),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Asynchronous [`map_failure`](Outcome::map_failure).
    #[inline]
    pub async fn map_failure_async<U, F, Fut>(self, mapper: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(value) => Outcome::Failure(mapper(value).await),
        }
    }

    /// Asynchronous [`bind`](Outcome::bind): the binder's future resolves
    /// to an `Outcome`, which becomes the overall result — one layer, no
    /// nesting. A failure short-circuits without invoking the binder.
    #[inline]
    pub async fn bind_async<U, F, Fut>(self, binder: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => binder(value).await,
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Asynchronous [`reduce_with`](Outcome::reduce_with): the alternate
    /// future is constructed and awaited only on failure.
    #[inline]
    pub async fn reduce_async<F, Fut>(self, alternate: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => alternate(value).await,
        }
    }

    /// Asynchronous [`match_with`](Outcome::match_with): exactly one
    /// handler runs and exactly that handler's future is awaited.
    #[inline]
    pub async fn match_async<R, F, FutF, G, FutG>(self, when_success: F, when_failure: G) -> R
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = R>,
        G: FnOnce(E) -> FutG,
        FutG: Future<Output = R>,
    {
        match self {
            Self::Success(value) => when_success(value).await,
            Self::Failure(value) => when_failure(value).await,
        }
    }

    /// Asynchronous [`effect`](Outcome::effect): awaits exactly one
    /// action's future, then returns [`Unit`].
    #[inline]
    pub async fn effect_async<F, FutF, G, FutG>(self, when_success: F, when_failure: G) -> Unit
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = ()>,
        G: FnOnce(E) -> FutG,
        FutG: Future<Output = ()>,
    {
        match self {
            Self::Success(value) => when_success(value).await,
            Self::Failure(value) => when_failure(value).await,
        }
        Unit
    }

    /// Asynchronous [`effect_success`](Outcome::effect_success).
    #[inline]
    pub async fn effect_success_async<F, Fut>(self, action: F) -> Unit
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = self {
            action(value).await;
        }
        Unit
    }

    /// Asynchronous [`effect_failure`](Outcome::effect_failure).
    #[inline]
    pub async fn effect_failure_async<G, Fut>(self, action: G) -> Unit
    where
        G: FnOnce(E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Failure(value) = self {
            action(value).await;
        }
        Unit
    }

    /// Asynchronous [`tap`](Outcome::tap): awaits exactly one action's
    /// future, then returns the original `Outcome` unchanged.
    #[inline]
    pub async fn tap_async<F, FutF, G, FutG>(self, when_success: F, when_failure: G) -> Self
    where
        F: FnOnce(&T) -> FutF,
        FutF: Future<Output = ()>,
        G: FnOnce(&E) -> FutG,
        FutG: Future<Output = ()>,
    {
        match &self {
            Self::Success(value) => when_success(value).await,
            Self::Failure(value) => when_failure(value).await,
        }
        self
    }

    /// Asynchronous [`tap_success`](Outcome::tap_success).
    #[inline]
    pub async fn tap_success_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = &self {
            action(value).await;
        }
        self
    }

    /// Asynchronous [`tap_failure`](Outcome::tap_failure).
    #[inline]
    pub async fn tap_failure_async<G, Fut>(self, action: G) -> Self
    where
        G: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Failure(value) = &self {
            action(value).await;
        }
        self
    }
}

/// Extension combinators for futures resolving to [`Outcome`].
///
/// The deferred-subject half of the async surface for `Outcome`:
/// bare-name methods take synchronous handlers, `_async` methods take
/// future-returning handlers. Failures short-circuit before any handler
/// future exists.
///
/// As with [`MaybeFuture`](crate::future::MaybeFuture), the two-handler
/// `effect`/`tap` forms are absent: use a `Unit`-returning
/// [`match_with`](OutcomeFuture::match_with), or the branch-specific
/// pairs below.
pub trait OutcomeFuture<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Awaits the subject, then applies [`Outcome::map`].
    fn map<U, F>(self, mapper: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(mapper) }
    }

    /// Awaits the subject, then applies [`Outcome::map_async`].
    fn map_async<U, F, Fut>(self, mapper: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(mapper).await }
    }

    /// Awaits the subject, then applies [`Outcome::map_failure`].
    fn map_failure<U, F>(self, mapper: F) -> impl Future<Output = Outcome<T, U>>
    where
        F: FnOnce(E) -> U,
    {
        async move { self.await.map_failure(mapper) }
    }

    /// Awaits the subject, then applies [`Outcome::map_failure_async`].
    fn map_failure_async<U, F, Fut>(self, mapper: F) -> impl Future<Output = Outcome<T, U>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_failure_async(mapper).await }
    }

    /// Awaits the subject, then applies [`Outcome::bind`].
    fn bind<U, F>(self, binder: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        async move { self.await.bind(binder) }
    }

    /// Awaits the subject, then applies [`Outcome::bind_async`].
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.bind_async(binder).await }
    }

    /// Awaits the subject, then applies [`Outcome::reduce`].
    fn reduce(self, alternate: T) -> impl Future<Output = T> {
        async move { self.await.reduce(alternate) }
    }

    /// Awaits the subject, then applies [`Outcome::reduce_with`].
    fn reduce_with<F>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> T,
    {
        async move { self.await.reduce_with(alternate) }
    }

    /// Awaits the subject, then applies [`Outcome::reduce_async`].
    fn reduce_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.reduce_async(alternate).await }
    }

    /// Awaits the subject, then applies [`Outcome::match_with`].
    fn match_with<R, F, G>(self, when_success: F, when_failure: G) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        async move { self.await.match_with(when_success, when_failure) }
    }

    /// Awaits the subject, then applies [`Outcome::match_async`].
    fn match_async<R, F, FutF, G, FutG>(
        self,
        when_success: F,
        when_failure: G,
    ) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = R>,
        G: FnOnce(E) -> FutG,
        FutG: Future<Output = R>,
    {
        async move { self.await.match_async(when_success, when_failure).await }
    }

    /// Awaits the subject, then applies [`Outcome::effect_success`].
    fn effect_success<F>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(T),
    {
        async move { self.await.effect_success(action) }
    }

    /// Awaits the subject, then applies [`Outcome::effect_success_async`].
    fn effect_success_async<F, Fut>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.effect_success_async(action).await }
    }

    /// Awaits the subject, then applies [`Outcome::effect_failure`].
    fn effect_failure<G>(self, action: G) -> impl Future<Output = Unit>
    where
        G: FnOnce(E),
    {
        async move { self.await.effect_failure(action) }
    }

    /// Awaits the subject, then applies [`Outcome::effect_failure_async`].
    fn effect_failure_async<G, Fut>(self, action: G) -> impl Future<Output = Unit>
    where
        G: FnOnce(E) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.effect_failure_async(action).await }
    }

    /// Awaits the subject, then applies [`Outcome::tap_success`].
    fn tap_success<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap_success(action) }
    }

    /// Awaits the subject, then applies [`Outcome::tap_success_async`].
    fn tap_success_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_success_async(action).await }
    }

    /// Awaits the subject, then applies [`Outcome::tap_failure`].
    fn tap_failure<G>(self, action: G) -> impl Future<Output = Outcome<T, E>>
    where
        G: FnOnce(&E),
    {
        async move { self.await.tap_failure(action) }
    }

    /// Awaits the subject, then applies [`Outcome::tap_failure_async`].
    fn tap_failure_async<G, Fut>(self, action: G) -> impl Future<Output = Outcome<T, E>>
    where
        G: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_failure_async(action).await }
    }
}

impl<T, E, Subject> OutcomeFuture<T, E> for Subject where Subject: Future<Output = Outcome<T, E>> {}
