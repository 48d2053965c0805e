//! Unit tests for the asynchronous Outcome combinators.
//!
//! Mirrors the Maybe async suite for the two-channel type: shape
//! equivalence, failure short-circuiting before any handler future
//! exists, and the deferred-subject extension trait.

#![cfg(feature = "async")]

use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use sumars::future::OutcomeFuture;
use sumars::sum::{Outcome, Unit};

// =============================================================================
// Shape Equivalence
// =============================================================================

#[rstest]
#[tokio::test]
async fn outcome_map_all_four_shapes_agree() {
    let subject = || Outcome::<i32, String>::success(1);
    let deferred = || async { Outcome::<i32, String>::success(1) };

    let plain_plain = subject().map(|x| x.to_string());
    let plain_deferred = subject().map_async(|x| async move { x.to_string() }).await;
    let deferred_plain = deferred().map(|x| x.to_string()).await;
    let deferred_deferred = deferred()
        .map_async(|x| async move { x.to_string() })
        .await;

    assert_eq!(plain_plain, Outcome::Success(String::from("1")));
    assert_eq!(plain_deferred, plain_plain);
    assert_eq!(deferred_plain, plain_plain);
    assert_eq!(deferred_deferred, plain_plain);
}

#[rstest]
#[tokio::test]
async fn outcome_bind_async_collapses_to_a_single_layer() {
    let result: Outcome<i32, String> = Outcome::success(2)
        .bind_async(|x| async move { Outcome::success(x * 21) })
        .await;
    assert_eq!(result, Outcome::Success(42));
}

// =============================================================================
// Short-Circuit and Laziness
// =============================================================================

#[rstest]
#[tokio::test]
async fn outcome_map_async_on_failure_never_invokes_mapper() {
    let calls = AtomicUsize::new(0);
    let value: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    let result = value
        .map_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { x * 2 }
        })
        .await;
    assert_eq!(result, Outcome::Failure(String::from("boom")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn outcome_bind_async_on_failure_short_circuits() {
    let calls = AtomicUsize::new(0);
    let value: Outcome<i32, String> = Outcome::failure(String::from("earlier"));
    let result = value
        .bind_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::<i32, String>::success(x) }
        })
        .await;
    assert_eq!(result, Outcome::Failure(String::from("earlier")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn outcome_reduce_async_thunk_never_starts_on_success() {
    let result = Outcome::<i32, String>::success(1)
        .reduce_async(|_| async { panic!("alternate future started") })
        .await;
    assert_eq!(result, 1);
}

// =============================================================================
// Failure-Channel Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn outcome_map_failure_async_transforms_failure() {
    let value: Outcome<i32, i32> = Outcome::failure(404);
    let described = value
        .map_failure_async(|code| async move { format!("status {code}") })
        .await;
    assert_eq!(described, Outcome::Failure(String::from("status 404")));
}

#[rstest]
#[tokio::test]
async fn outcome_future_map_failure_leaves_success_untouched() {
    let value = async { Outcome::<i32, i32>::success(1) }
        .map_failure(|code| format!("status {code}"))
        .await;
    assert_eq!(value, Outcome::Success(1));
}

#[rstest]
#[tokio::test]
async fn outcome_match_async_folds_failure_channel() {
    let value: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    let folded = value
        .match_async(
            |x| async move { x },
            |message| async move { message.len() as i32 },
        )
        .await;
    assert_eq!(folded, 4);
}

// =============================================================================
// Deferred-Subject Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn outcome_future_bind_chains_after_resolution() {
    let result = async { Outcome::<i32, String>::success(5) }
        .bind(|x| {
            if x > 0 {
                Outcome::success(x * 2)
            } else {
                Outcome::failure(String::from("not positive"))
            }
        })
        .await;
    assert_eq!(result, Outcome::Success(10));
}

#[rstest]
#[tokio::test]
async fn outcome_future_reduce_with_uses_failure_payload() {
    let recovered = async { Outcome::<usize, String>::failure(String::from("boom")) }
        .reduce_with(|message| message.len())
        .await;
    assert_eq!(recovered, 4);
}

#[rstest]
#[tokio::test]
async fn outcome_future_effect_failure_fires_on_failure() {
    let calls = AtomicUsize::new(0);
    let result = async { Outcome::<i32, String>::failure(String::from("boom")) }
        .effect_failure(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    assert_eq!(result, Unit);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn outcome_future_tap_success_async_passes_value_through() {
    let seen = AtomicUsize::new(0);
    let result = async { Outcome::<usize, String>::success(7) }
        .tap_success_async(|x| {
            let value = *x;
            let seen = &seen;
            async move {
                seen.store(value, Ordering::SeqCst);
            }
        })
        .await;
    assert_eq!(result, Outcome::Success(7));
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}

#[rstest]
#[tokio::test]
async fn outcome_chain_mixes_channels_and_shapes() {
    let result = async { Outcome::<i32, String>::success(3) }
        .map(|x| x + 1)
        .bind_async(|x| async move {
            if x % 2 == 0 {
                Outcome::success(x / 2)
            } else {
                Outcome::failure(format!("{x} is odd"))
            }
        })
        .map_failure(|message| format!("rejected: {message}"))
        .await;
    assert_eq!(result, Outcome::Success(2));
}
