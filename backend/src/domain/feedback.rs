//! Feedback records and the reputation rating bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lowest accepted feedback rating.
pub const RATING_MIN: i32 = 1;
/// Highest accepted feedback rating.
pub const RATING_MAX: i32 = 5;

/// Who is rating whom, resolved against the referenced donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    DonorToVolunteer,
    ReceiverToVolunteer,
    ReceiverToDonor,
}

/// A feedback event. Append-only; never mutated.
///
/// `to_user_id` is `None` when the donation had no volunteer (or donor)
/// assigned at submission time; such feedback is stored but does not feed
/// the reputation mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Option<Uuid>,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
    pub created_at: DateTime<Utc>,
}

/// Fields for submitting feedback.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub donation_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_type_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(FeedbackType::ReceiverToDonor).expect("serialise"),
            serde_json::json!("receiver_to_donor")
        );
    }

    #[test]
    fn null_target_serialises_explicitly() {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            donation_id: Uuid::new_v4(),
            from_user_id: Uuid::new_v4(),
            to_user_id: None,
            rating: 4,
            comment: None,
            feedback_type: FeedbackType::DonorToVolunteer,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&feedback).expect("serialise");
        // toUserId stays present-but-null so clients can distinguish an
        // unresolved target from a missing field.
        assert_eq!(value["toUserId"], serde_json::Value::Null);
    }
}
