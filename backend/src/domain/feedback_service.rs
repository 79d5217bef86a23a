//! Reputation ledger: feedback events and the aggregate rating recompute.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::feedback::{Feedback, FeedbackType, NewFeedback, RATING_MAX, RATING_MIN};
use crate::domain::ports::{DonationRepository, FeedbackRepository, UserRepository};
use crate::domain::user::User;
use crate::domain::Error;

/// Records feedback and keeps the target user's mean rating current.
#[derive(Clone)]
pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
    donations: Arc<dyn DonationRepository>,
    users: Arc<dyn UserRepository>,
}

impl FeedbackService {
    /// Create the service with the feedback, donation, and user repositories.
    pub fn new(
        feedback: Arc<dyn FeedbackRepository>,
        donations: Arc<dyn DonationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            feedback,
            donations,
            users,
        }
    }

    /// Submit feedback against a donation.
    ///
    /// The target user is resolved from the donation by feedback type:
    /// volunteer for the `*_to_volunteer` kinds, donor for
    /// `receiver_to_donor`. When no target is assigned yet (for example no
    /// volunteer has claimed), the feedback is stored with a null target
    /// and no rating recompute happens. Otherwise the target's rating is
    /// recomputed as the mean of every rating they have ever received,
    /// rounded to one decimal.
    pub async fn submit(&self, caller: &User, new: NewFeedback) -> Result<Feedback, Error> {
        if !(RATING_MIN..=RATING_MAX).contains(&new.rating) {
            return Err(Error::invalid_request(format!(
                "rating must be an integer between {RATING_MIN} and {RATING_MAX}"
            )));
        }

        let donation = self
            .donations
            .find_by_id(&new.donation_id)
            .await?
            .ok_or_else(|| Error::not_found("donation not found"))?;

        let to_user_id = match new.feedback_type {
            FeedbackType::DonorToVolunteer | FeedbackType::ReceiverToVolunteer => {
                donation.volunteer_id
            }
            FeedbackType::ReceiverToDonor => Some(donation.donor_id),
        };

        let record = Feedback {
            id: Uuid::new_v4(),
            donation_id: new.donation_id,
            from_user_id: caller.id,
            to_user_id,
            rating: new.rating,
            comment: new.comment,
            feedback_type: new.feedback_type,
            created_at: Utc::now(),
        };
        self.feedback.insert(&record).await?;

        if let Some(target) = to_user_id {
            self.recompute_rating(&target).await?;
        }
        Ok(record)
    }

    /// All feedback received by a user, newest first. No credential needed.
    pub async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<Feedback>, Error> {
        Ok(self.feedback.list_for_user(user_id).await?)
    }

    async fn recompute_rating(&self, target: &Uuid) -> Result<(), Error> {
        let received = self.feedback.list_for_user(target).await?;
        if received.is_empty() {
            return Ok(());
        }
        let sum: i64 = received.iter().map(|item| i64::from(item.rating)).sum();
        let mean = sum as f64 / received.len() as f64;
        let rounded = (mean * 10.0).round() / 10.0;
        self.users.set_rating(target, rounded).await?;
        Ok(())
    }
}
