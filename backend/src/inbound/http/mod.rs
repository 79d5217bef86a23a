//! HTTP inbound adapter.
//!
//! Route map under `/api`:
//!
//! ```text
//! POST   /api/register
//! POST   /api/login
//! GET    /api/me
//! POST   /api/donations
//! GET    /api/donations?status=
//! GET    /api/donations/available?latitude=&longitude=
//! PATCH  /api/donations/{id}/status
//! POST   /api/requests
//! GET    /api/requests
//! POST   /api/requests/{id}/match
//! POST   /api/quality-checks
//! POST   /api/feedback
//! GET    /api/feedback/{userId}
//! GET    /api/admin/stats
//! GET    /api/admin/users
//! ```
//!
//! Health probes live outside the scope at `/health/live` and
//! `/health/ready`.

pub mod admin;
pub mod donations;
pub mod error;
pub mod feedback;
pub mod health;
pub mod identity;
pub mod quality;
pub mod requests;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod users;

pub use crate::domain::ApiResult;
pub use identity::Identity;
pub use state::HttpState;

use actix_web::web;

/// Register the `/api` scope and the health probes on an application.
///
/// The caller provides [`HttpState`] and [`health::HealthState`] via
/// `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(users::register)
            .service(users::login)
            .service(users::me)
            .service(donations::create_donation)
            .service(donations::list_available_donations)
            .service(donations::list_donations)
            .service(donations::set_donation_status)
            .service(requests::create_request)
            .service(requests::list_requests)
            .service(requests::match_request)
            .service(quality::submit_quality_check)
            .service(feedback::submit_feedback)
            .service(feedback::list_user_feedback)
            .service(admin::admin_stats)
            .service(admin::admin_users),
    )
    .service(health::ready)
    .service(health::live);
}
