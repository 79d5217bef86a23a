//! Matching engine: binds one request to one available donation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::ports::{MatchCommit, MatchRepository};
use crate::domain::Error;

/// Coordinates the request/donation link. Matching is always
/// caller-initiated with an explicit donation id; there is no automatic
/// matching by urgency, food type, or proximity.
#[derive(Clone)]
pub struct MatchingService {
    matches: Arc<dyn MatchRepository>,
}

impl MatchingService {
    /// Create the service with the match repository.
    pub fn new(matches: Arc<dyn MatchRepository>) -> Self {
        Self { matches }
    }

    /// Link a request to a donation.
    ///
    /// The store commit transitions the request to `matched` (with
    /// `matchedDonationId` set) and the donation to `claimed` (with
    /// `receiverId` set) in one atomic unit; on any failure neither entity
    /// changes.
    pub async fn match_request(&self, request_id: &Uuid, donation_id: &Uuid) -> Result<(), Error> {
        match self.matches.commit_match(request_id, donation_id).await? {
            MatchCommit::Committed => Ok(()),
            MatchCommit::RequestMissing => Err(Error::not_found("request not found")),
            MatchCommit::DonationMissing => Err(Error::not_found("donation not found")),
            MatchCommit::DonationUnavailable => Err(Error::conflict("donation is not available")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockMatchRepository;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn service(outcome: MatchCommit) -> MatchingService {
        let mut repo = MockMatchRepository::new();
        repo.expect_commit_match()
            .times(1)
            .returning(move |_, _| Ok(outcome));
        MatchingService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn committed_match_is_ok() {
        service(MatchCommit::Committed)
            .match_request(&Uuid::new_v4(), &Uuid::new_v4())
            .await
            .expect("match succeeds");
    }

    #[rstest]
    #[case(MatchCommit::RequestMissing, ErrorCode::NotFound)]
    #[case(MatchCommit::DonationMissing, ErrorCode::NotFound)]
    #[case(MatchCommit::DonationUnavailable, ErrorCode::Conflict)]
    #[tokio::test]
    async fn failed_commits_map_to_domain_errors(
        #[case] outcome: MatchCommit,
        #[case] expected: ErrorCode,
    ) {
        let err = service(outcome)
            .match_request(&Uuid::new_v4(), &Uuid::new_v4())
            .await
            .expect_err("commit failure surfaces");
        assert_eq!(err.code, expected);
    }
}
