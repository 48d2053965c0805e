//! Asynchronous combinators for [`Maybe`].
//!
//! Two surfaces live here:
//!
//! - inherent `_async` methods on [`Maybe`] itself, for a plain subject
//!   with an asynchronous handler;
//! - the [`MaybeFuture`] extension trait, for a deferred subject with
//!   either handler shape.
//!
//! In every case the untaken branch's handler is never invoked and the
//! result carries exactly one future layer.

use std::future::Future;

use crate::sum::{Maybe, Unit};

impl<T> Maybe<T> {
    /// Asynchronous [`map`](Maybe::map): applies an async mapper to a
    /// present value, awaiting its result.
    ///
    /// `Nothing` propagates without invoking the mapper.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let halved = Maybe::just(42).map_async(|x| async move { x / 2 }).await;
    /// assert_eq!(halved, Maybe::Just(21));
    /// ```
    #[inline]
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Just(value) => Maybe::Just(mapper(value).await),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Asynchronous [`bind`](Maybe::bind): the binder's future resolves
    /// to a `Maybe`, which becomes the overall result — one layer, no
    /// nesting.
    #[inline]
    pub async fn bind_async<U, F, Fut>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Just(value) => binder(value).await,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Asynchronous [`filter`](Maybe::filter): the predicate's future is
    /// awaited only for a present value.
    #[inline]
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value).await {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Asynchronous [`reduce_with`](Maybe::reduce_with): the alternate
    /// future is constructed and awaited only when no value is present.
    #[inline]
    pub async fn reduce_async<F, Fut>(self, alternate: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => alternate().await,
        }
    }

    /// Asynchronous [`match_with`](Maybe::match_with): exactly one
    /// handler runs and exactly that handler's future is awaited.
    #[inline]
    pub async fn match_async<R, F, FutF, G, FutG>(self, when_just: F, when_nothing: G) -> R
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = R>,
        G: FnOnce() -> FutG,
        FutG: Future<Output = R>,
    {
        match self {
            Self::Just(value) => when_just(value).await,
            Self::Nothing => when_nothing().await,
        }
    }

    /// Asynchronous [`effect`](Maybe::effect): awaits exactly one
    /// action's future, then returns [`Unit`].
    #[inline]
    pub async fn effect_async<F, FutF, G, FutG>(self, when_just: F, when_nothing: G) -> Unit
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = ()>,
        G: FnOnce() -> FutG,
        FutG: Future<Output = ()>,
    {
        match self {
            Self::Just(value) => when_just(value).await,
            Self::Nothing => when_nothing().await,
        }
        Unit
    }

    /// Asynchronous [`effect_just`](Maybe::effect_just).
    #[inline]
    pub async fn effect_just_async<F, Fut>(self, action: F) -> Unit
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Just(value) = self {
            action(value).await;
        }
        Unit
    }

    /// Asynchronous [`effect_nothing`](Maybe::effect_nothing).
    #[inline]
    pub async fn effect_nothing_async<G, Fut>(self, action: G) -> Unit
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Nothing = self {
            action().await;
        }
        Unit
    }

    /// Asynchronous [`tap`](Maybe::tap): awaits exactly one action's
    /// future, then returns the original `Maybe` unchanged.
    #[inline]
    pub async fn tap_async<F, FutF, G, FutG>(self, when_just: F, when_nothing: G) -> Self
    where
        F: FnOnce(&T) -> FutF,
        FutF: Future<Output = ()>,
        G: FnOnce() -> FutG,
        FutG: Future<Output = ()>,
    {
        match &self {
            Self::Just(value) => when_just(value).await,
            Self::Nothing => when_nothing().await,
        }
        self
    }

    /// Asynchronous [`tap_just`](Maybe::tap_just).
    #[inline]
    pub async fn tap_just_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Just(value) = &self {
            action(value).await;
        }
        self
    }

    /// Asynchronous [`tap_nothing`](Maybe::tap_nothing).
    #[inline]
    pub async fn tap_nothing_async<G, Fut>(self, action: G) -> Self
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Nothing = &self {
            action().await;
        }
        self
    }
}

/// Extension combinators for futures resolving to [`Maybe`].
///
/// The deferred-subject half of the async surface: each method awaits the
/// subject, then behaves exactly like the synchronous combinator of the
/// same base name. Bare-name methods take synchronous handlers; `_async`
/// methods take future-returning handlers and await only the selected
/// one.
///
/// The two-handler `effect`/`tap` forms are deliberately absent here: a
/// `Unit`-returning [`match_with`](MaybeFuture::match_with) is the
/// deferred `effect`, and the branch-specific
/// [`tap_just`](MaybeFuture::tap_just)/[`tap_nothing`](MaybeFuture::tap_nothing)
/// pairs cover passing-through taps without colliding with the
/// whole-value [`tap`](crate::future::PipeFuture::tap) of any future.
pub trait MaybeFuture<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits the subject, then applies [`Maybe::map`].
    fn map<U, F>(self, mapper: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(mapper) }
    }

    /// Awaits the subject, then applies [`Maybe::map_async`].
    fn map_async<U, F, Fut>(self, mapper: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(mapper).await }
    }

    /// Awaits the subject, then applies [`Maybe::bind`].
    fn bind<U, F>(self, binder: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(binder) }
    }

    /// Awaits the subject, then applies [`Maybe::bind_async`].
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(binder).await }
    }

    /// Awaits the subject, then applies [`Maybe::filter`].
    fn filter<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    /// Awaits the subject, then applies [`Maybe::filter_async`].
    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    /// Awaits the subject, then applies [`Maybe::reduce`].
    fn reduce(self, alternate: T) -> impl Future<Output = T> {
        async move { self.await.reduce(alternate) }
    }

    /// Awaits the subject, then applies [`Maybe::reduce_with`].
    fn reduce_with<F>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.reduce_with(alternate) }
    }

    /// Awaits the subject, then applies [`Maybe::reduce_async`].
    fn reduce_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.reduce_async(alternate).await }
    }

    /// Awaits the subject, then applies [`Maybe::match_with`].
    fn match_with<R, F, G>(self, when_just: F, when_nothing: G) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        async move { self.await.match_with(when_just, when_nothing) }
    }

    /// Awaits the subject, then applies [`Maybe::match_async`].
    fn match_async<R, F, FutF, G, FutG>(
        self,
        when_just: F,
        when_nothing: G,
    ) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = R>,
        G: FnOnce() -> FutG,
        FutG: Future<Output = R>,
    {
        async move { self.await.match_async(when_just, when_nothing).await }
    }

    /// Awaits the subject, then applies [`Maybe::effect_just`].
    fn effect_just<F>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(T),
    {
        async move { self.await.effect_just(action) }
    }

    /// Awaits the subject, then applies [`Maybe::effect_just_async`].
    fn effect_just_async<F, Fut>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.effect_just_async(action).await }
    }

    /// Awaits the subject, then applies [`Maybe::effect_nothing`].
    fn effect_nothing<G>(self, action: G) -> impl Future<Output = Unit>
    where
        G: FnOnce(),
    {
        async move { self.await.effect_nothing(action) }
    }

    /// Awaits the subject, then applies [`Maybe::effect_nothing_async`].
    fn effect_nothing_async<G, Fut>(self, action: G) -> impl Future<Output = Unit>
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.effect_nothing_async(action).await }
    }

    /// Awaits the subject, then applies [`Maybe::tap_just`].
    fn tap_just<F>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap_just(action) }
    }

    /// Awaits the subject, then applies [`Maybe::tap_just_async`].
    fn tap_just_async<F, Fut>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_just_async(action).await }
    }

    /// Awaits the subject, then applies [`Maybe::tap_nothing`].
    fn tap_nothing<G>(self, action: G) -> impl Future<Output = Maybe<T>>
    where
        G: FnOnce(),
    {
        async move { self.await.tap_nothing(action) }
    }

    /// Awaits the subject, then applies [`Maybe::tap_nothing_async`].
    fn tap_nothing_async<G, Fut>(self, action: G) -> impl Future<Output = Maybe<T>>
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_nothing_async(action).await }
    }
}

impl<T, Subject> MaybeFuture<T> for Subject where Subject: Future<Output = Maybe<T>> {}
