//! Repository ports over the external document store.
//!
//! The store is an external collaborator reached through per-entity traits.
//! Adapters translate their own failures into [`StoreError`]; services map
//! that to the domain [`crate::domain::Error`].

mod donation_repository;
mod feedback_repository;
mod match_repository;
mod quality_check_repository;
mod request_repository;
mod user_repository;

pub use donation_repository::{DonationRepository, VolunteerStamp};
pub use feedback_repository::FeedbackRepository;
pub use match_repository::{MatchCommit, MatchRepository};
pub use quality_check_repository::QualityCheckRepository;
pub use request_repository::RequestRepository;
pub use user_repository::{UserInsert, UserRepository};

#[cfg(test)]
pub use donation_repository::MockDonationRepository;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(test)]
pub use match_repository::MockMatchRepository;
#[cfg(test)]
pub use quality_check_repository::MockQualityCheckRepository;
#[cfg(test)]
pub use request_repository::MockRequestRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Failure raised by document-store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or its shared state is unusable.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    /// A lookup or write failed during execution.
    #[error("document store query failed: {0}")]
    Query(String),
}

impl From<StoreError> for crate::domain::Error {
    fn from(err: StoreError) -> Self {
        crate::domain::Error::internal(err.to_string())
    }
}
