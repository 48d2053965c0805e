//! Unit tests for the persistent Sequence.
//!
//! A Sequence is ordered and structurally immutable: extending operations
//! return a new sequence and never touch the original. These tests cover
//! construction, cons/append/concat, positional access, iteration, and
//! the persistence guarantee.

#![cfg(feature = "sequence")]

use rstest::rstest;
use sumars::sequence;
use sumars::sequence::Sequence;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn sequence_new_is_empty() {
    let empty: Sequence<i32> = Sequence::new();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.head(), None);
}

#[rstest]
fn sequence_singleton_holds_one_element() {
    let one = Sequence::singleton(42);
    assert_eq!(one.len(), 1);
    assert_eq!(one.head(), Some(&42));
}

#[rstest]
fn sequence_macro_preserves_order() {
    let digits = sequence![1, 2, 3];
    let collected: Vec<&i32> = digits.iter().collect();
    assert_eq!(collected, vec![&1, &2, &3]);
}

#[rstest]
fn sequence_from_iterator_preserves_order() {
    let range: Sequence<i32> = (1..=5).collect();
    assert_eq!(range.len(), 5);
    assert_eq!(range.get(0), Some(&1));
    assert_eq!(range.get(4), Some(&5));
}

// =============================================================================
// Cons and Tail
// =============================================================================

#[rstest]
fn sequence_cons_prepends_without_mutating() {
    let rest = sequence![2, 3];
    let whole = rest.cons(1);

    assert_eq!(whole.to_string(), "[1, 2, 3]");
    assert_eq!(rest.to_string(), "[2, 3]");
}

#[rstest]
fn sequence_tail_shares_structure() {
    let whole = sequence![1, 2, 3];
    let rest = whole.tail();

    assert_eq!(rest.to_string(), "[2, 3]");
    assert_eq!(whole.len(), 3);
}

#[rstest]
fn sequence_tail_of_empty_is_empty() {
    let empty: Sequence<i32> = Sequence::new();
    assert!(empty.tail().is_empty());
}

// =============================================================================
// Append (the persistence scenario)
// =============================================================================

#[rstest]
fn sequence_append_all_extends_in_order_and_preserves_original() {
    let pair = sequence!["1", "2"];
    let extended = pair.append_all(["3", "4"]);

    let collected: Vec<&&str> = extended.iter().collect();
    assert_eq!(collected, vec![&"1", &"2", &"3", &"4"]);

    // The prior binding still sees exactly its own two elements.
    let original: Vec<&&str> = pair.iter().collect();
    assert_eq!(original, vec![&"1", &"2"]);
}

#[rstest]
fn sequence_append_single_element() {
    let pair = sequence![1, 2];
    let extended = pair.append(3);
    assert_eq!(extended.to_string(), "[1, 2, 3]");
    assert_eq!(pair.len(), 2);
}

#[rstest]
fn sequence_concat_joins_two_sequences() {
    let front = sequence![1, 2];
    let back = sequence![3, 4];
    let joined = front.concat(&back);

    assert_eq!(joined.to_string(), "[1, 2, 3, 4]");
    assert_eq!(front.to_string(), "[1, 2]");
    assert_eq!(back.to_string(), "[3, 4]");
}

#[rstest]
fn sequence_concat_with_empty_is_identity() {
    let empty: Sequence<i32> = Sequence::new();
    let digits = sequence![1, 2];

    assert_eq!(empty.concat(&digits), digits);
    assert_eq!(digits.concat(&empty), digits);
}

// =============================================================================
// Access and Iteration
// =============================================================================

#[rstest]
fn sequence_get_by_index() {
    let digits = sequence![10, 20, 30];
    assert_eq!(digits.get(1), Some(&20));
    assert_eq!(digits.get(3), None);
}

#[rstest]
fn sequence_owning_iteration_clones_elements() {
    let digits = sequence![1, 2, 3];
    let sum: i32 = digits.clone().into_iter().sum();
    assert_eq!(sum, 6);
    assert_eq!(digits.len(), 3);
}

#[rstest]
fn sequence_reverse_flips_order() {
    let digits = sequence![1, 2, 3];
    assert_eq!(digits.reverse().to_string(), "[3, 2, 1]");
    assert_eq!(digits.to_string(), "[1, 2, 3]");
}

// =============================================================================
// Equality and Hash
// =============================================================================

#[rstest]
fn sequence_equality_is_order_sensitive() {
    assert_eq!(sequence![1, 2], sequence![1, 2]);
    assert_ne!(sequence![1, 2], sequence![2, 1]);
    assert_ne!(sequence![1, 2], sequence![1, 2, 3]);
}

#[rstest]
fn sequence_hashes_consistently_with_equality() {
    use std::collections::HashSet;

    let mut set: HashSet<Sequence<i32>> = HashSet::new();
    set.insert(sequence![1, 2]);
    set.insert(sequence![1, 2]);
    set.insert(sequence![2, 1]);
    assert_eq!(set.len(), 2);
}
