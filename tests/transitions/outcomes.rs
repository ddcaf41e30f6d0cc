//! Outcome table tests
//!
//! One test per row of the (earlier matches, later matches) table, plus
//! the change predicate and repeatability.

use crate::common::*;

fn watcher_with(before: &str, after: &str) -> (Watcher, SnapshotId, SnapshotId) {
    init_tracing();
    let watcher = Watcher::ephemeral();
    let a = watcher.record_json("!room:example.org", json!({"join_rule": before}));
    let b = watcher.record_json("!room:example.org", json!({"join_rule": after}));
    (watcher, a, b)
}

async fn classify_join_rule(before: &str, after: &str) -> Transition {
    let (watcher, a, b) = watcher_with(before, after);
    watcher
        .classify(Some(&a), Some(&b), "join_rule", &Value::from("public"))
        .await
        .unwrap()
}

// ============================================================================
// Table rows
// ============================================================================

#[tokio::test]
async fn match_then_match_is_both_match() {
    assert_eq!(classify_join_rule("public", "public").await, Transition::BothMatch);
}

#[tokio::test]
async fn miss_then_match_is_now_matches() {
    assert_eq!(classify_join_rule("invite", "public").await, Transition::NowMatches);
}

#[tokio::test]
async fn match_then_miss_is_stopped_matching() {
    assert_eq!(
        classify_join_rule("public", "invite").await,
        Transition::StoppedMatching
    );
}

#[tokio::test]
async fn miss_then_miss_is_neither_match() {
    assert_eq!(classify_join_rule("invite", "knock").await, Transition::NeitherMatch);
}

// ============================================================================
// Change predicate
// ============================================================================

#[test]
fn is_change_exactly_for_flips() {
    let changes: Vec<_> = Transition::ALL
        .into_iter()
        .filter(|t| t.is_change())
        .collect();
    assert_eq!(
        changes,
        vec![Transition::NowMatches, Transition::StoppedMatching]
    );
}

// ============================================================================
// Repeatability
// ============================================================================

#[tokio::test]
async fn identical_calls_against_unchanged_store_agree() {
    let (watcher, a, b) = watcher_with("invite", "public");
    let reference = Value::from("public");

    let mut outcomes = Vec::new();
    for _ in 0..3 {
        outcomes.push(
            watcher
                .classify(Some(&a), Some(&b), "join_rule", &reference)
                .await
                .unwrap(),
        );
    }
    assert!(outcomes.iter().all(|o| *o == Transition::NowMatches));
}

#[tokio::test]
async fn later_appends_do_not_affect_existing_pair() {
    let (watcher, a, b) = watcher_with("invite", "public");
    watcher.record_json("!room:example.org", json!({"join_rule": "invite"}));

    let outcome = watcher
        .classify(Some(&a), Some(&b), "join_rule", &Value::from("public"))
        .await
        .unwrap();
    assert_eq!(outcome, Transition::NowMatches);
}

#[tokio::test]
async fn sequential_and_concurrent_modes_agree() {
    for (before, after) in [
        ("public", "public"),
        ("invite", "public"),
        ("public", "invite"),
        ("invite", "knock"),
    ] {
        let concurrent = Watcher::builder().concurrent_lookups().build();
        let sequential = Watcher::builder().sequential_lookups().build();
        let reference = Value::from("public");

        let mut results = Vec::new();
        for watcher in [&concurrent, &sequential] {
            let a = watcher.record_json("room", json!({"join_rule": before}));
            let b = watcher.record_json("room", json!({"join_rule": after}));
            results.push(
                watcher
                    .classify(Some(&a), Some(&b), "join_rule", &reference)
                    .await
                    .unwrap(),
            );
        }
        assert_eq!(results[0], results[1], "{} -> {}", before, after);
    }
}
