//! Room visibility scenarios
//!
//! A room's state is a versioned record; history visibility and join
//! rules crossing their public values are the transitions of interest.

use crate::common::*;

const ROOM: &str = "!lobby:example.org";

#[tokio::test]
async fn history_visibility_becoming_world_readable() {
    init_tracing();
    let watcher = Watcher::ephemeral();
    let a = watcher.record_json(ROOM, json!({"history_visibility": "shared"}));
    let b = watcher.record_json(ROOM, json!({"history_visibility": "world_readable"}));
    let world_readable = Value::from("world_readable");

    let forward = watcher
        .classify(Some(&a), Some(&b), "history_visibility", &world_readable)
        .await
        .unwrap();
    assert_eq!(forward, Transition::NowMatches);

    let reversed = watcher
        .classify(Some(&b), Some(&a), "history_visibility", &world_readable)
        .await
        .unwrap();
    assert_eq!(reversed, Transition::StoppedMatching);
}

#[tokio::test]
async fn walking_history_tracks_publicity_changes() {
    let watcher = Watcher::ephemeral();
    let record = RecordId::from(ROOM);
    for rule in ["invite", "public", "public", "knock", "invite", "public"] {
        watcher.record_json(record.clone(), json!({"join_rule": rule}));
    }

    let history = watcher.store().history(&record);
    assert_eq!(history.len(), 6);

    // The caller carries state between calls; the classifier keeps none.
    let public = Value::from("public");
    let mut previous: Option<&SnapshotId> = None;
    let mut outcomes = Vec::new();
    for id in &history {
        outcomes.push(
            watcher
                .classify(previous, Some(id), "join_rule", &public)
                .await
                .unwrap(),
        );
        previous = Some(id);
    }

    assert_eq!(
        outcomes,
        vec![
            Transition::NeitherMatch,
            Transition::NowMatches,
            Transition::BothMatch,
            Transition::StoppedMatching,
            Transition::NeitherMatch,
            Transition::NowMatches,
        ]
    );
    assert_eq!(outcomes.iter().filter(|o| o.is_change()).count(), 3);
}

#[tokio::test]
async fn unrelated_field_updates_are_not_changes() {
    let watcher = Watcher::ephemeral();
    let a = watcher.record_json(ROOM, json!({"join_rule": "public", "name": "Lobby"}));
    let b = watcher.record_json(ROOM, json!({"join_rule": "public", "name": "Main Hall"}));

    let outcome = watcher
        .classify(Some(&a), Some(&b), "join_rule", &Value::from("public"))
        .await
        .unwrap();
    assert_eq!(outcome, Transition::BothMatch);
    assert!(!outcome.is_change());
}

#[tokio::test]
async fn parallel_classifications_are_independent() {
    let watcher = std::sync::Arc::new(Watcher::ephemeral());
    let a = watcher.record_json(ROOM, json!({"history_visibility": "joined"}));
    let b = watcher.record_json(ROOM, json!({"history_visibility": "world_readable"}));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let watcher = std::sync::Arc::clone(&watcher);
            let (a, b) = (a.clone(), b.clone());
            tokio::spawn(async move {
                let (earlier, later) = if i % 2 == 0 { (a, b) } else { (b, a) };
                watcher
                    .classify(
                        Some(&earlier),
                        Some(&later),
                        "history_visibility",
                        &Value::from("world_readable"),
                    )
                    .await
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 {
            Transition::NowMatches
        } else {
            Transition::StoppedMatching
        };
        assert_eq!(handle.await.unwrap(), expected);
    }
}
