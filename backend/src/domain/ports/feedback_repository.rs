//! Port for the append-only feedback log.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::feedback::Feedback;

use super::StoreError;

/// Port for the `feedback` collection. Append-only: no update or delete
/// exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Append a feedback record.
    async fn insert(&self, feedback: &Feedback) -> Result<(), StoreError>;

    /// All feedback received by a user, newest first. Drives both the
    /// public read and the reputation recompute.
    async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<Feedback>, StoreError>;
}
