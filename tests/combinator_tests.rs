//! Unit tests for the value-level combinators.
//!
//! These cover pipe/tap/effect/ignore over arbitrary values, the boolean
//! fold, the building-block combinators, and the variadic macros.

#![cfg(feature = "combinator")]

use std::cell::{Cell, RefCell};

use rstest::rstest;
use sumars::combinator::{constant, effect, effect_with, identity, ignore, match_bool, pipe,
    pipe_with, tap};
use sumars::sum::{Maybe, Unit};
use sumars::{effect as effect_all, pipe as pipe_chain, tap as tap_all};

// =============================================================================
// Pipe
// =============================================================================

#[rstest]
fn pipe_applies_the_function() {
    assert_eq!(pipe(5, |x| x * 2), 10);
    assert_eq!(pipe("hello", str::len), 5);
}

#[rstest]
fn pipe_with_ignores_the_input() {
    assert_eq!(pipe_with(5, || "fixed"), "fixed");
}

#[rstest]
fn pipe_macro_chains_left_to_right() {
    fn square(x: i32) -> i32 {
        x * x
    }
    fn double(x: i32) -> i32 {
        x * 2
    }
    fn add_one(x: i32) -> i32 {
        x + 1
    }

    // square(3) = 9, double(9) = 18, add_one(18) = 19
    assert_eq!(pipe_chain!(3, square, double, add_one), 19);
}

#[rstest]
fn pipe_macro_changes_types_mid_chain() {
    let result = pipe_chain!(12345, |x: i32| x.to_string(), |s: String| s.len());
    assert_eq!(result, 5);
}

// =============================================================================
// Tap
// =============================================================================

#[rstest]
fn tap_returns_the_original_value() {
    let observed = Cell::new(0);
    let result = tap(41, |x| observed.set(*x));
    assert_eq!(result, 41);
    assert_eq!(observed.get(), 41);
}

#[rstest]
fn tap_macro_runs_actions_in_argument_order() {
    let order = RefCell::new(Vec::new());
    let result = tap_all!(
        7,
        |x: &i32| order.borrow_mut().push(*x),
        |_: &i32| order.borrow_mut().push(0),
    );
    assert_eq!(result, 7);
    assert_eq!(*order.borrow(), vec![7, 0]);
}

#[rstest]
fn tap_discarded_copy_never_replaces_the_value() {
    #[derive(Clone, Debug, PartialEq)]
    struct Config {
        retries: u32,
    }

    let original = Config { retries: 3 };
    let result = tap(original, |config| {
        let mut copy = config.clone();
        copy.retries = 99;
        // the copy is dropped here without affecting the tapped value
    });
    assert_eq!(result, Config { retries: 3 });
}

// =============================================================================
// Effect and Ignore
// =============================================================================

#[rstest]
fn effect_runs_the_action_and_returns_unit() {
    let fired = Cell::new(false);
    assert_eq!(effect(|| fired.set(true)), Unit);
    assert!(fired.get());
}

#[rstest]
fn effect_with_consumes_the_value() {
    let seen = Cell::new(0);
    assert_eq!(effect_with(42, |x| seen.set(x)), Unit);
    assert_eq!(seen.get(), 42);
}

#[rstest]
fn effect_macro_runs_all_actions_in_order() {
    let trace = Cell::new(0);
    let result = effect_all!(
        || trace.set(trace.get() * 10 + 1),
        || trace.set(trace.get() * 10 + 2),
    );
    assert_eq!(result, Unit);
    assert_eq!(trace.get(), 12);
}

#[rstest]
fn ignore_discards_and_returns_unit() {
    assert_eq!(ignore(vec![1, 2, 3]), Unit);
    assert_eq!(ignore("unused result"), Unit);
}

// =============================================================================
// Boolean Match
// =============================================================================

#[rstest]
fn match_bool_folds_both_branches() {
    assert_eq!(match_bool(true, || "granted", || "denied"), "granted");
    assert_eq!(match_bool(false, || "granted", || "denied"), "denied");
}

#[rstest]
fn match_bool_never_runs_the_untaken_branch() {
    let result = match_bool(true, || 1, || panic!("untaken branch evaluated"));
    assert_eq!(result, 1);
}

// =============================================================================
// Identity and Constant
// =============================================================================

#[rstest]
fn identity_returns_its_argument() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(String::from("x")), "x");
}

#[rstest]
fn constant_is_the_payload_ignoring_handler() {
    let replaced = Maybe::just(123).map(constant("replacement"));
    assert_eq!(replaced, Maybe::Just("replacement"));

    let always = constant::<i32, &str>(5);
    assert_eq!(always("a"), 5);
    assert_eq!(always("b"), 5);
}
