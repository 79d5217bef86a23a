//! Shared fixtures for HTTP handler tests: an in-memory state bundle plus
//! seeded users with ready-to-use bearer tokens.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{
    AuthService, AuthSession, DonationService, FeedbackService, MatchingService, NewUser,
    QualityService, RequestService, Role, StatsService, TokenCodec,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::MemoryStore;

pub(crate) const TEST_PASSWORD: &str = "correct horse battery";

/// State bundle backed by a fresh in-memory store.
pub(crate) fn memory_state() -> web::Data<HttpState> {
    let store = Arc::new(MemoryStore::new());
    web::Data::new(HttpState {
        auth: AuthService::new(store.clone(), TokenCodec::new("test-secret")),
        donations: DonationService::new(store.clone()),
        requests: RequestService::new(store.clone()),
        matching: MatchingService::new(store.clone()),
        quality: QualityService::new(store.clone(), store.clone()),
        feedback: FeedbackService::new(store.clone(), store.clone(), store.clone()),
        stats: StatsService::new(store.clone(), store.clone(), store),
    })
}

/// Fresh state with one registered user per `(email, role)` pair; sessions
/// come back in seeding order.
pub(crate) async fn seeded_app(users: &[(&str, Role)]) -> (web::Data<HttpState>, Vec<AuthSession>) {
    let state = memory_state();
    let mut sessions = Vec::with_capacity(users.len());
    for (email, role) in users {
        let name = email.split('@').next().unwrap_or("user").to_owned();
        let session = state
            .auth
            .register(NewUser {
                name,
                email: (*email).to_owned(),
                password: TEST_PASSWORD.to_owned(),
                role: *role,
                phone: None,
            })
            .await
            .expect("seed user");
        sessions.push(session);
    }
    (state, sessions)
}

/// `Authorization: Bearer` header pair for a seeded session.
pub(crate) fn bearer(session: &AuthSession) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", session.token))
}
