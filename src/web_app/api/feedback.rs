// web_app/api/feedback.rs - Visitor feedback
//
// Append-only feedback records with snapshot subscriptions. Subscribers
// always see the full list, newest first.

use std::future::Future;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::web_app::model::{AuthState, FeedbackEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("You must be signed in to leave feedback")]
    NotSignedIn,

    #[error("Place and message are both required")]
    MissingFields,

    #[error("Failed to store feedback: {0}")]
    Store(String),
}

/// Realtime append-only store
pub trait FeedbackStore: Send + Sync {
    fn append(&self, entry: FeedbackEntry) -> impl Future<Output = Result<(), FeedbackError>> + Send;

    /// Receiver of full snapshots sorted by timestamp, newest first
    fn subscribe(&self) -> watch::Receiver<Vec<FeedbackEntry>>;
}

pub struct InMemoryFeedbackStore {
    snapshots: watch::Sender<Vec<FeedbackEntry>>,
}

impl Default for InMemoryFeedbackStore {
    fn default() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self { snapshots }
    }
}

impl InMemoryFeedbackStore {
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.borrow().is_empty()
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    async fn append(&self, entry: FeedbackEntry) -> Result<(), FeedbackError> {
        self.snapshots.send_modify(|entries| {
            entries.push(entry);
            entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        });
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<FeedbackEntry>> {
        self.snapshots.subscribe()
    }
}

/// Validate and append one feedback record for the signed-in user
pub async fn submit_feedback<S: FeedbackStore>(
    store: &S,
    auth: &AuthState,
    place: &str,
    message: &str,
) -> Result<FeedbackEntry, FeedbackError> {
    if !auth.is_authenticated() {
        return Err(FeedbackError::NotSignedIn);
    }
    if place.trim().is_empty() || message.trim().is_empty() {
        return Err(FeedbackError::MissingFields);
    }

    let entry = FeedbackEntry {
        id: Uuid::new_v4().to_string(),
        name: auth.display_name().to_string(),
        place: place.trim().to_string(),
        message: message.trim().to_string(),
        timestamp: Utc::now().timestamp_millis(),
    };
    store.append(entry.clone()).await.map_err(|e| {
        tracing::error!("Error adding feedback: {}", e);
        e
    })?;

    tracing::info!("Feedback {} recorded for {}", entry.id, entry.place);
    Ok(entry)
}
