//! Tagged unions of arity 2 through 9.
//!
//! A `UnionN` is a closed, ordered set of mutually exclusive typed
//! variants. Exactly one slot is populated, selected at construction by
//! the ordinal constructor (`first`, `second`, …) or the enum variant
//! itself; consumption happens only through the exhaustive
//! [`match_with`](Union2::match_with) and [`effect`](Union2::effect)
//! operations, which require one handler per slot with no default arm.
//!
//! Because construction is tag-qualified rather than type-directed,
//! repeated type parameters are allowed: `Union2<i32, i32>` is legal and
//! unambiguous — the tag, not the argument type, selects the slot.
//!
//! All arities are structurally identical; they are expanded from a single
//! definition.
//!
//! # Examples
//!
//! ```rust
//! use sumars::sum::Union3;
//!
//! let measurement: Union3<i32, f64, String> = Union3::second(2.5);
//!
//! let rendered = measurement.match_with(
//!     |count| format!("{count} items"),
//!     |weight| format!("{weight} kg"),
//!     |label| label,
//! );
//! assert_eq!(rendered, "2.5 kg");
//! ```

use std::fmt;

use crate::sum::Unit;

macro_rules! define_union {
    (
        $name:ident, $future_trait:ident, $arity:literal,
        $(($variant:ident, $constructor:ident, $param:ident, $fgen:ident)),+ $(,)?
    ) => {
        paste::paste! {
            #[doc = "A closed, ordered union of " $arity " mutually exclusive typed variants."]
            ///
            /// Exactly one slot is populated; consumption is exhaustive via
            /// `match_with`/`effect`. Construction is tag-qualified, so the
            /// type parameters need not be pairwise distinct.
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum $name<$($param),+> {
                $(
                    #[doc = "The `" $variant "` slot."]
                    $variant($param),
                )+
            }

            impl<$($param),+> $name<$($param),+> {
                $(
                    #[doc = "Creates the union with the `" $variant "` slot active."]
                    #[inline]
                    pub const fn $constructor(value: $param) -> Self {
                        Self::$variant(value)
                    }

                    #[doc = "Returns `true` if the `" $variant "` slot is active."]
                    #[inline]
                    pub const fn [<is_ $constructor>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }
                )+

                /// Eliminates the union by invoking exactly the handler for
                /// the active slot with that slot's value.
                ///
                /// All handlers must produce the same result type; handlers
                /// for inactive slots are never invoked.
                #[inline]
                #[allow(clippy::too_many_arguments)]
                pub fn match_with<R, $($fgen),+>(self, $([<when_ $constructor>]: $fgen),+) -> R
                where
                    $($fgen: FnOnce($param) -> R),+
                {
                    match self {
                        $(Self::$variant(value) => [<when_ $constructor>](value)),+
                    }
                }

                /// Side-effecting analogue of [`match_with`](Self::match_with):
                /// invokes exactly one action and returns [`Unit`].
                #[inline]
                #[allow(clippy::too_many_arguments)]
                pub fn effect<$($fgen),+>(self, $([<when_ $constructor>]: $fgen),+) -> Unit
                where
                    $($fgen: FnOnce($param)),+
                {
                    match self {
                        $(Self::$variant(value) => [<when_ $constructor>](value)),+
                    }
                    Unit
                }
            }

            #[cfg(feature = "async")]
            impl<$($param),+> $name<$($param),+> {
                /// Asynchronous [`match_with`](Self::match_with): awaits only
                /// the selected handler's future. Handlers for inactive
                /// slots are never invoked, so their futures are never
                /// constructed.
                #[inline]
                #[allow(clippy::too_many_arguments)]
                pub async fn match_async<R, $($fgen, [<$fgen Fut>]),+>(
                    self,
                    $([<when_ $constructor>]: $fgen),+
                ) -> R
                where
                    $(
                        $fgen: FnOnce($param) -> [<$fgen Fut>],
                        [<$fgen Fut>]: ::std::future::Future<Output = R>,
                    )+
                {
                    match self {
                        $(Self::$variant(value) => [<when_ $constructor>](value).await),+
                    }
                }

                /// Asynchronous [`effect`](Self::effect): awaits only the
                /// selected action's future, then returns [`Unit`].
                #[inline]
                #[allow(clippy::too_many_arguments)]
                pub async fn effect_async<$($fgen, [<$fgen Fut>]),+>(
                    self,
                    $([<when_ $constructor>]: $fgen),+
                ) -> Unit
                where
                    $(
                        $fgen: FnOnce($param) -> [<$fgen Fut>],
                        [<$fgen Fut>]: ::std::future::Future<Output = ()>,
                    )+
                {
                    match self {
                        $(Self::$variant(value) => [<when_ $constructor>](value).await),+
                    }
                    Unit
                }
            }

            #[doc = "Extension combinators for futures resolving to [`" $name "`]."]
            ///
            /// Applies the exhaustive fold directly to a deferred subject:
            /// the subject is awaited first, then exactly one handler runs.
            /// A `Unit`-returning `match_with` is the deferred `effect`.
            #[cfg(feature = "async")]
            pub trait $future_trait<$($param),+>:
                ::std::future::Future<Output = $name<$($param),+>> + Sized
            {
                /// Awaits the subject, then folds it with synchronous
                /// handlers.
                #[allow(clippy::too_many_arguments)]
                fn match_with<R, $($fgen),+>(
                    self,
                    $([<when_ $constructor>]: $fgen),+
                ) -> impl ::std::future::Future<Output = R>
                where
                    $($fgen: FnOnce($param) -> R),+
                {
                    async move { self.await.match_with($([<when_ $constructor>]),+) }
                }

                /// Awaits the subject, then folds it with asynchronous
                /// handlers, awaiting only the selected one.
                #[allow(clippy::too_many_arguments)]
                fn match_async<R, $($fgen, [<$fgen Fut>]),+>(
                    self,
                    $([<when_ $constructor>]: $fgen),+
                ) -> impl ::std::future::Future<Output = R>
                where
                    $(
                        $fgen: FnOnce($param) -> [<$fgen Fut>],
                        [<$fgen Fut>]: ::std::future::Future<Output = R>,
                    )+
                {
                    async move { self.await.match_async($([<when_ $constructor>]),+).await }
                }
            }

            #[cfg(feature = "async")]
            impl<Subject, $($param),+> $future_trait<$($param),+> for Subject where
                Subject: ::std::future::Future<Output = $name<$($param),+>>
            {
            }

            impl<$($param: fmt::Debug),+> fmt::Debug for $name<$($param),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $(
                            Self::$variant(value) => {
                                formatter.debug_tuple(stringify!($variant)).field(value).finish()
                            }
                        )+
                    }
                }
            }
        }
    };
}

define_union!(
    Union2, Union2Future, "two",
    (First, first, T1, F1),
    (Second, second, T2, F2),
);

define_union!(
    Union3, Union3Future, "three",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
);

define_union!(
    Union4, Union4Future, "four",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
);

define_union!(
    Union5, Union5Future, "five",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
    (Fifth, fifth, T5, F5),
);

define_union!(
    Union6, Union6Future, "six",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
    (Fifth, fifth, T5, F5),
    (Sixth, sixth, T6, F6),
);

define_union!(
    Union7, Union7Future, "seven",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
    (Fifth, fifth, T5, F5),
    (Sixth, sixth, T6, F6),
    (Seventh, seventh, T7, F7),
);

define_union!(
    Union8, Union8Future, "eight",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
    (Fifth, fifth, T5, F5),
    (Sixth, sixth, T6, F6),
    (Seventh, seventh, T7, F7),
    (Eighth, eighth, T8, F8),
);

define_union!(
    Union9, Union9Future, "nine",
    (First, first, T1, F1),
    (Second, second, T2, F2),
    (Third, third, T3, F3),
    (Fourth, fourth, T4, F4),
    (Fifth, fifth, T5, F5),
    (Sixth, sixth, T6, F6),
    (Seventh, seventh, T7, F7),
    (Eighth, eighth, T8, F8),
    (Ninth, ninth, T9, F9),
);

static_assertions::assert_impl_all!(Union2<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Union9<u8, u16, u32, u64, i8, i16, i32, i64, bool>: Send, Sync, Copy);
