//! Accumulating validation.
//!
//! [`Validated`] is a thin accumulator riding on
//! [`Outcome`](crate::sum::Outcome): where `Outcome::bind` short-circuits
//! at the first failure, [`Validated::bind`] runs *every* validation step
//! and concatenates the failure messages it encounters, so a caller sees
//! all problems at once instead of one per attempt.
//!
//! # Examples
//!
//! ```rust
//! use sumars::sum::Outcome;
//! use sumars::validation::Validated;
//!
//! struct Request {
//!     name: String,
//!     age: i32,
//! }
//!
//! fn checked_name(name: &str) -> Outcome<String, String> {
//!     if name.is_empty() {
//!         Outcome::failure(String::from("name must not be empty"))
//!     } else {
//!         Outcome::success(name.to_string())
//!     }
//! }
//!
//! fn checked_age(age: i32) -> Outcome<i32, String> {
//!     if age < 0 {
//!         Outcome::failure(String::from("age must not be negative"))
//!     } else {
//!         Outcome::success(age)
//!     }
//! }
//!
//! let request = Request { name: String::new(), age: -3 };
//!
//! let validated = Validated::valid(())
//!     .bind(request.name.as_str(), checked_name)
//!     .bind(request.age, checked_age);
//!
//! // Both messages were collected, not just the first.
//! let outcome = validated.into_outcome();
//! assert_eq!(
//!     outcome.unwrap_failure(),
//!     "name must not be empty, age must not be negative",
//! );
//! ```

use crate::sum::Outcome;

/// The result of an accumulating validation run.
///
/// `Valid` carries the payload of the most recent successful step;
/// `Invalid` carries every failure message collected so far, in the
/// order the failing steps ran.
///
/// Rust's closed enums make a "neither variant" state unrepresentable,
/// so consumption is exhaustive by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validated<T> {
    /// Every validation step so far has passed.
    Valid(T),
    /// At least one validation step failed; all messages are retained.
    Invalid(Vec<String>),
}

impl<T> Validated<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a passing validation result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::validation::Validated;
    ///
    /// assert!(Validated::valid(42).is_valid());
    /// ```
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a failing validation result with a single message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::validation::Validated;
    ///
    /// let invalid: Validated<i32> = Validated::invalid("too small");
    /// assert_eq!(invalid.messages(), ["too small"]);
    /// ```
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(vec![message.into()])
    }

    /// Creates a failing validation result from a list of messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::validation::Validated;
    ///
    /// let invalid: Validated<i32> = Validated::invalid_all(["a", "b"]);
    /// assert_eq!(invalid.messages(), ["a", "b"]);
    /// ```
    #[inline]
    pub fn invalid_all<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self::Invalid(messages.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if every step so far has passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if any step so far has failed.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the failure messages collected so far.
    ///
    /// Empty when the validation is still valid.
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(messages) => messages,
        }
    }

    // =========================================================================
    // Accumulating Bind
    // =========================================================================

    /// Runs the next validation step, accumulating failures.
    ///
    /// Unlike [`Outcome::bind`], the validator *always* runs — a failed
    /// earlier step does not prevent later steps from reporting their own
    /// messages. The resulting state:
    ///
    /// - previous valid, validator succeeds: `Valid` of the new payload
    /// - previous valid, validator fails: `Invalid` of that message
    /// - previous invalid, validator succeeds: `Invalid` of the messages
    ///   so far
    /// - previous invalid, validator fails: `Invalid` of the messages so
    ///   far plus the new one, in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    /// use sumars::validation::Validated;
    ///
    /// fn positive(x: i32) -> Outcome<i32, String> {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::failure(format!("{x} <= 0")) }
    /// }
    ///
    /// let collected = Validated::valid(0)
    ///     .bind(-1, positive)
    ///     .bind(-2, positive);
    /// assert_eq!(collected.messages(), ["-1 <= 0", "-2 <= 0"]);
    /// ```
    pub fn bind<I, U, V>(self, input: I, validator: V) -> Validated<U>
    where
        V: FnOnce(I) -> Outcome<U, String>,
    {
        match (self, validator(input)) {
            (Self::Valid(_), Outcome::Success(value)) => Validated::Valid(value),
            (Self::Valid(_), Outcome::Failure(message)) => Validated::Invalid(vec![message]),
            (Self::Invalid(messages), Outcome::Success(_)) => Validated::Invalid(messages),
            (Self::Invalid(mut messages), Outcome::Failure(message)) => {
                messages.push(message);
                Validated::Invalid(messages)
            }
        }
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Eliminates the validation result by applying exactly one of two
    /// functions.
    #[inline]
    pub fn match_with<R, F, G>(self, when_valid: F, when_invalid: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(Vec<String>) -> R,
    {
        match self {
            Self::Valid(value) => when_valid(value),
            Self::Invalid(messages) => when_invalid(messages),
        }
    }

    /// Projects into a plain [`Outcome`], concatenating all accumulated
    /// failure messages with `", "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumars::sum::Outcome;
    /// use sumars::validation::Validated;
    ///
    /// let passed: Validated<i32> = Validated::valid(42);
    /// assert_eq!(passed.into_outcome(), Outcome::Success(42));
    ///
    /// let failed: Validated<i32> = Validated::invalid_all(["a", "b"]);
    /// assert_eq!(failed.into_outcome(), Outcome::Failure(String::from("a, b")));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, String> {
        match self {
            Self::Valid(value) => Outcome::Success(value),
            Self::Invalid(messages) => Outcome::Failure(messages.join(", ")),
        }
    }
}
