// tests/feedback_tests.rs - Feedback submission and snapshot subscriptions

mod common;

use travel_search::web_app::api::feedback::{
    submit_feedback, FeedbackError, FeedbackStore, InMemoryFeedbackStore,
};
use travel_search::web_app::model::AuthState;

fn signed_in(name: Option<&str>) -> AuthState {
    AuthState::SignedIn {
        uid: "uid-1".to_string(),
        display_name: name.map(str::to_string),
    }
}

#[tokio::test]
async fn test_submission_requires_place_and_message() {
    let store = InMemoryFeedbackStore::default();
    let user = signed_in(Some("Asha"));

    for (place, message) in [("", "Great"), ("Ranchi", "   "), (" ", "")] {
        let err = submit_feedback(&store, &user, place, message).await.unwrap_err();
        assert_eq!(err, FeedbackError::MissingFields);
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_entry_fields() {
    let store = InMemoryFeedbackStore::default();
    let entry = submit_feedback(&store, &signed_in(Some("Asha")), " Patratu Valley ", "Stunning drive")
        .await
        .unwrap();

    assert_eq!(entry.name, "Asha");
    assert_eq!(entry.place, "Patratu Valley");
    assert_eq!(entry.message, "Stunning drive");
    assert!(entry.timestamp > 0);
    assert!(uuid::Uuid::parse_str(&entry.id).is_ok());

    let anonymous = submit_feedback(&store, &signed_in(None), "Betla", "Saw elephants")
        .await
        .unwrap();
    assert_eq!(anonymous.name, "Anonymous");
    assert_ne!(anonymous.id, entry.id);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_subscribers_see_every_append_newest_first() {
    let store = InMemoryFeedbackStore::default();
    let mut rx = store.subscribe();
    assert!(rx.borrow().is_empty());

    let user = signed_in(Some("Ravi"));
    submit_feedback(&store, &user, "Hundru Falls", "First").await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().len(), 1);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    submit_feedback(&store, &user, "Dassam Falls", "Second").await.unwrap();
    rx.changed().await.unwrap();

    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].message, "Second");
    assert!(snapshot[0].timestamp >= snapshot[1].timestamp);
}

#[tokio::test]
async fn test_late_subscriber_gets_full_snapshot() {
    let store = InMemoryFeedbackStore::default();
    let user = signed_in(Some("Ravi"));
    submit_feedback(&store, &user, "Netarhat", "Sunrise").await.unwrap();
    submit_feedback(&store, &user, "Deoghar", "Temple").await.unwrap();

    let rx = store.subscribe();
    assert_eq!(rx.borrow().len(), 2);
}
