//! Persistent (immutable) ordered sequences.
//!
//! This module provides [`Sequence`], an immutable cons sequence with
//! structural sharing. Every operation returns a new sequence; the
//! original is never mutated, so a binding taken before an
//! [`append`](Sequence::append) still sees exactly the elements it had.
//!
//! # Examples
//!
//! ```rust
//! use sumars::sequence;
//!
//! let pair = sequence!["1", "2"];
//! let extended = pair.append_all(["3", "4"]);
//!
//! assert_eq!(extended.to_string(), "[1, 2, 3, 4]");
//! assert_eq!(pair.to_string(), "[1, 2]"); // the original is unchanged
//! ```

mod list;

pub use list::{Sequence, SequenceIntoIter, SequenceIter};
