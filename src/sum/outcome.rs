//! The `Outcome` type - success or failure with typed payloads.
//!
//! This module provides [`Outcome<T, E>`], a sum type with exactly two
//! states: `Success(value)` and `Failure(value)`. It replaces exceptions
//! as a control-flow mechanism: a failure is an ordinary value that flows
//! through the explicit failure channel, and combinators short-circuit
//! around it instead of unwinding.
//!
//! The combinator surface mirrors [`Maybe`](crate::sum::Maybe), generalized
//! to two channels: `map` transforms the success channel, `map_failure`
//! the failure channel, `bind` chains success-producing steps, and the
//! `effect`/`tap` families branch on the discriminant for side effects.
//!
//! # Examples
//!
//! ```rust
//! use sumars::sum::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .map_or_else(|_| Outcome::failure(format!("not a port: {raw}")), Outcome::success)
//! }
//!
//! let address = parse_port("8080").map(|port| format!("0.0.0.0:{port}"));
//! assert_eq!(address.unwrap(), "0.0.0.0:8080");
//!
//! let error = parse_port("eighty").map(|port| format!("0.0.0.0:{port}"));
//! assert_eq!(error.unwrap_failure(), "not a port: eighty");
//! ```

use std::fmt;

use crate::sum::Unit;

/// Success (`Success`) or failure (`Failure`), each carrying a typed
/// payload.
///
/// Exactly one state holds at a time. Failures are data, not raised
/// errors: the only panicking operations are the misuse unwraps, which
/// exist to catch logic bugs, never to signal domain failures.
///
/// # Type Parameters
///
/// * `T` - The payload type of the success channel
/// * `E` - The payload type of the failure channel
///
/// # Examples
///
/// ```rust
/// use sumars::sum::Outcome;
///
/// let ok: Outcome<&str, i32> = Outcome::success("ok");
/// assert!(ok.is_success());
///
/// let bad: Outcome<&str, i32> = Outcome::failure(-1);
/// assert!(bad.is_failure());
/// assert_eq!(bad.unwrap_failure(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a payload of type `T`.
    Success(T),
    /// The operation failed with a payload of type `E`.
    Failure(E),
}

/// `Outcome` with the failure channel fixed to a boxed error.
///
/// The convenience form for code that does not model a domain-specific
/// failure payload.
///
/// # Examples
///
/// ```rust
/// use sumars::sum::{Fallible, Outcome};
///
/// fn read_setting() -> Fallible<i32> {
///     Outcome::success(42)
/// }
///
/// assert_eq!(read_setting().unwrap(), 42);
/// ```
pub type Fallible<T> = Outcome<T, Box<dyn std::error::Error + Send + Sync>>;

/// Creates a successful `Outcome` holding the given value.
///
/// Free-function form of [`Outcome::success`].
///
/// # Examples
///
/// ```rust
/// use sumars::sum::{Outcome, success};
///
/// let ok: Outcome<i32, String> = success(42);
/// assert!(ok.is_success());
/// ```
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a failed `Outcome` holding the given value.
///
/// Free-function form of [`Outcome::failure`].
///
/// # Examples
///
/// ```rust
/// use sumars::sum::{Outcome, failure};
///
/// let bad: Outcome<i32, String> = failure(String::from("boom"));
/// assert!(bad.is_failure());
/// ```
#[inline]
pub const fn failure<T, E>(value: E) -> Outcome<T, E> {
    Outcome::Failure(value)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome` holding the given value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Outcome` holding the given value.
    #[inline]
    pub const fn failure(value: E) -> Self {
        Self::Failure(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(1);
    /// assert!(ok.is_success());
    /// assert!(!ok.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let bad: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    /// assert!(bad.is_failure());
    /// assert!(!bad.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Failure`. This is a misuse error: callers
    /// must establish success with [`is_success`](Self::is_success) first.
    /// The message text is stable and asserted by tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(ok.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value; check `is_success()` before unwrapping")
            }
        }
    }

    /// Returns the failure payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Success`. This is a misuse error: callers
    /// must establish failure with [`is_failure`](Self::is_failure) first.
    /// The message text is stable and asserted by tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let bad: Outcome<i32, i32> = Outcome::failure(-1);
    /// assert_eq!(bad.unwrap_failure(), -1);
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value; check `is_failure()` before unwrapping")
            }
            Self::Failure(value) => value,
        }
    }

    /// Returns a reference to the success payload if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Converts into a [`Maybe`](crate::sum::Maybe) of the success payload,
    /// discarding any failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::{Maybe, Outcome};
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(1);
    /// assert_eq!(ok.into_maybe(), Maybe::Just(1));
    ///
    /// let bad: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    /// assert_eq!(bad.into_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> crate::sum::Maybe<T> {
        match self {
            Self::Success(value) => crate::sum::Maybe::Just(value),
            Self::Failure(_) => crate::sum::Maybe::Nothing,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload; a failure is repackaged
    /// untouched under the new success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(2);
    /// assert_eq!(ok.map(|x| x * 3), Outcome::Success(6));
    ///
    /// let bad: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    /// assert_eq!(bad.map(|x| x * 3), Outcome::Failure(String::from("boom")));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Applies a function to the failure payload; a success is repackaged
    /// untouched under the new failure type. The dual of
    /// [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let bad: Outcome<i32, i32> = Outcome::failure(404);
    /// let described = bad.map_failure(|code| format!("status {code}"));
    /// assert_eq!(described, Outcome::Failure(String::from("status 404")));
    /// ```
    #[inline]
    pub fn map_failure<U, F>(self, mapper: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(value) => Outcome::Failure(mapper(value)),
        }
    }

    /// Flattening bind on the success channel; a failure short-circuits
    /// without invoking the binder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, String> {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::failure(format!("{x} <= 0")) }
    /// }
    ///
    /// let chained = Outcome::<i32, String>::success(5).bind(positive);
    /// assert_eq!(chained, Outcome::Success(5));
    ///
    /// let failed = Outcome::<i32, String>::success(-5).bind(positive);
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => binder(value),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    // =========================================================================
    // Reduce Operations
    // =========================================================================

    /// Returns the success payload, or the alternate on failure.
    #[inline]
    pub fn reduce(self, alternate: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternate,
        }
    }

    /// Returns the success payload, or computes the alternate from the
    /// failure payload. The thunk is lazy: it never runs on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let bad: Outcome<usize, String> = Outcome::failure(String::from("boom"));
    /// assert_eq!(bad.reduce_with(|message| message.len()), 4);
    /// ```
    #[inline]
    pub fn reduce_with<F>(self, alternate: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => alternate(value),
        }
    }

    // =========================================================================
    // Match Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(3);
    /// let text = ok.match_with(|x| format!("+{x}"), |e| format!("-{e}"));
    /// assert_eq!(text, "+3");
    /// ```
    #[inline]
    pub fn match_with<R, F, G>(self, when_success: F, when_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => when_success(value),
            Self::Failure(value) => when_failure(value),
        }
    }

    // =========================================================================
    // Effect Operations (side effects, returning Unit)
    // =========================================================================

    /// Runs exactly one of two side-effecting actions, returning [`Unit`].
    #[inline]
    pub fn effect<F, G>(self, when_success: F, when_failure: G) -> Unit
    where
        F: FnOnce(T),
        G: FnOnce(E),
    {
        match self {
            Self::Success(value) => when_success(value),
            Self::Failure(value) => when_failure(value),
        }
        Unit
    }

    /// Runs an action on the success payload when present.
    #[inline]
    pub fn effect_success<F>(self, action: F) -> Unit
    where
        F: FnOnce(T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
        Unit
    }

    /// Runs an action on the failure payload when present.
    #[inline]
    pub fn effect_failure<G>(self, action: G) -> Unit
    where
        G: FnOnce(E),
    {
        if let Self::Failure(value) = self {
            action(value);
        }
        Unit
    }

    // =========================================================================
    // Tap Operations (side effects, returning the original value)
    // =========================================================================

    /// Runs exactly one of two actions on the active payload, returning
    /// the original `Outcome` unchanged. The [`tap!`](crate::tap) macro
    /// chains several actions in argument order.
    #[inline]
    pub fn tap<F, G>(self, when_success: F, when_failure: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match &self {
            Self::Success(value) => when_success(value),
            Self::Failure(value) => when_failure(value),
        }
        self
    }

    /// Runs an action on a reference to the success payload when present,
    /// returning the original `Outcome` unchanged.
    #[inline]
    pub fn tap_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs an action on a reference to the failure payload when present,
    /// returning the original `Outcome` unchanged.
    #[inline]
    pub fn tap_failure<G>(self, action: G) -> Self
    where
        G: FnOnce(&E),
    {
        if let Self::Failure(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Aggregate Operations
    // =========================================================================

    /// Binds a whole sequence of outcomes at once, collecting every
    /// failure instead of stopping at the first.
    ///
    /// Returns `Success` of all success payloads (in order) when every
    /// element succeeded; otherwise `Failure` of all failure payloads
    /// found, in encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let all_ok: Vec<Outcome<i32, String>> =
    ///     vec![Outcome::success(1), Outcome::success(2)];
    /// assert_eq!(Outcome::bind_all(all_ok), Outcome::Success(vec![1, 2]));
    ///
    /// let mixed: Vec<Outcome<i32, &str>> = vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("a"),
    ///     Outcome::success(2),
    ///     Outcome::failure("b"),
    /// ];
    /// assert_eq!(Outcome::bind_all(mixed), Outcome::Failure(vec!["a", "b"]));
    /// ```
    pub fn bind_all<I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Self::Success(value) => successes.push(value),
                Self::Failure(value) => failures.push(value),
            }
        }
        if failures.is_empty() {
            Outcome::Success(successes)
        } else {
            Outcome::Failure(failures)
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(value) => formatter.debug_tuple("Failure").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)` and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Ok(42).into();
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Success(value)` becomes `Ok(value)` and `Failure(error)` becomes
    /// `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    ///
    /// let result: Result<i32, String> = Outcome::success(42).into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
