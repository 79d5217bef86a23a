//! Admin read-only handlers: platform stats and the full user listing.

use actix_web::{get, web};

use crate::domain::{Error, StatsReport, UserPublic};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Aggregate platform counts. Admin role only.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Platform statistics", body = StatsReport),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "getAdminStats"
)]
#[get("/admin/stats")]
pub async fn admin_stats(
    state: web::Data<HttpState>,
    identity: Identity,
) -> ApiResult<web::Json<StatsReport>> {
    let report = state.stats.report(&identity.0).await?;
    Ok(web::Json(report))
}

/// Every registered user, password hashes excluded. Admin role only.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users", body = [UserPublic]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listAllUsers"
)]
#[get("/admin/users")]
pub async fn admin_users(
    state: web::Data<HttpState>,
    identity: Identity,
) -> ApiResult<web::Json<Vec<UserPublic>>> {
    let users = state.stats.list_users(&identity.0).await?;
    Ok(web::Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::inbound::http::donations::create_donation;
    use crate::inbound::http::test_support::{bearer, seeded_app};
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    fn test_app(
        state: web::Data<crate::inbound::http::state::HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api")
                .service(create_donation)
                .service(admin_stats)
                .service(admin_users),
        )
    }

    #[actix_web::test]
    async fn stats_require_the_admin_role() {
        let (state, sessions) = seeded_app(&[("bakery@example.org", Role::Donor)]).await;
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/admin/stats")
                .insert_header(bearer(&sessions[0]))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn stats_histogram_covers_every_status() {
        let (state, sessions) = seeded_app(&[
            ("bakery@example.org", Role::Donor),
            ("vera@example.org", Role::Volunteer),
            ("root@example.org", Role::Admin),
        ])
        .await;
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/donations")
                .insert_header(bearer(&sessions[0]))
                .set_json(json!({
                    "foodType": "bread",
                    "quantity": 4,
                    "expiryDate": "2026-09-01T12:00:00Z",
                    "location": {"latitude": 51.5, "longitude": -0.12},
                }))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/admin/stats")
                .insert_header(bearer(&sessions[2]))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let stats: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(stats["totalDonations"], 1);
        assert_eq!(stats["totalUsers"], 3);
        assert_eq!(stats["activeVolunteers"], 1);
        let histogram = stats["donationsByStatus"].as_object().expect("histogram");
        assert_eq!(histogram["available"], 1);
        assert_eq!(histogram["rejected"], 0);
        assert_eq!(histogram.len(), 6);
    }

    #[actix_web::test]
    async fn user_listing_excludes_password_material() {
        let (state, sessions) = seeded_app(&[
            ("bakery@example.org", Role::Donor),
            ("root@example.org", Role::Admin),
        ])
        .await;
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/admin/users")
                .insert_header(bearer(&sessions[1]))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let listed: Vec<Value> =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(listed.len(), 2);
        for user in &listed {
            assert!(user.get("passwordHash").is_none());
            assert!(user.get("password").is_none());
        }
    }
}
