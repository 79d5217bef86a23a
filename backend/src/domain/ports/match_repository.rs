//! Port for the atomic request/donation match commit.

use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;

/// Outcome of attempting to commit a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCommit {
    /// Both entities were updated.
    Committed,
    /// The request id matched nothing; nothing was written.
    RequestMissing,
    /// The donation id matched nothing; nothing was written.
    DonationMissing,
    /// The donation is not `available`; nothing was written.
    DonationUnavailable,
}

/// Port binding one request to one donation.
///
/// Implementations must apply the request→`matched` and donation→`claimed`
/// writes as a single atomic unit, re-checking the availability
/// precondition inside the same critical section. Either both entities
/// change or neither does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Atomically link `request_id` to `donation_id`.
    async fn commit_match(
        &self,
        request_id: &Uuid,
        donation_id: &Uuid,
    ) -> Result<MatchCommit, StoreError>;
}
