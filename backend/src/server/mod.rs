//! Server construction and dependency wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use crate::domain::{
    AuthService, DonationService, FeedbackService, MatchingService, QualityService, RequestService,
    StatsService, TokenCodec,
};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::{self, HttpState};
use crate::middleware::Trace;
use crate::outbound::persistence::MemoryStore;

/// Wire every domain service to one shared document store.
pub fn build_http_state(store: Arc<MemoryStore>, tokens: TokenCodec) -> HttpState {
    HttpState {
        auth: AuthService::new(store.clone(), tokens),
        donations: DonationService::new(store.clone()),
        requests: RequestService::new(store.clone()),
        matching: MatchingService::new(store.clone()),
        quality: QualityService::new(store.clone(), store.clone()),
        feedback: FeedbackService::new(store.clone(), store.clone(), store.clone()),
        stats: StatsService::new(store.clone(), store.clone(), store),
    }
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let store = Arc::new(MemoryStore::new());
    let http_state = web::Data::new(build_http_state(
        store,
        TokenCodec::new(config.token_secret),
    ));
    let server_health_state = health_state.clone();

    tracing::info!(bind = %config.bind, "starting HTTP listener");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .configure(http::configure)
    })
    .bind(config.bind)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
