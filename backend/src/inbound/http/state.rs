//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`. Each service is
//! already wired to its repositories, so handlers stay free of persistence
//! concerns and can be exercised against mocks in tests.

use crate::domain::{
    AuthService, DonationService, FeedbackService, MatchingService, QualityService, RequestService,
    StatsService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub donations: DonationService,
    pub requests: RequestService,
    pub matching: MatchingService,
    pub quality: QualityService,
    pub feedback: FeedbackService,
    pub stats: StatsService,
}
