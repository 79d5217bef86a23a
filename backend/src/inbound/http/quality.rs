//! Quality-check submission handler.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::quality::{ExpiryStatus, PackagingStatus, SmellStatus};
use crate::domain::{Error, NewQualityCheck, OverallQuality, QualityCheck};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Submission body for `POST /api/quality-checks`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct QualityCheckRequest {
    pub donation_id: Uuid,
    pub expiry_status: ExpiryStatus,
    pub packaging_status: PackagingStatus,
    pub smell_status: SmellStatus,
    pub overall_quality: OverallQuality,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Record an inspection. Volunteer role only; a `pass` verdict moves the
/// donation to `pickedup`, anything else to `rejected`.
#[utoipa::path(
    post,
    path = "/api/quality-checks",
    request_body = QualityCheckRequest,
    responses(
        (status = 200, description = "Check recorded", body = QualityCheck),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not a volunteer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["quality"],
    operation_id = "submitQualityCheck"
)]
#[post("/quality-checks")]
pub async fn submit_quality_check(
    state: web::Data<HttpState>,
    identity: Identity,
    payload: web::Json<QualityCheckRequest>,
) -> ApiResult<web::Json<QualityCheck>> {
    let QualityCheckRequest {
        donation_id,
        expiry_status,
        packaging_status,
        smell_status,
        overall_quality,
        notes,
    } = payload.into_inner();
    let check = state
        .quality
        .submit(
            &identity.0,
            NewQualityCheck {
                donation_id,
                expiry_status,
                packaging_status,
                smell_status,
                overall_quality,
                notes,
            },
        )
        .await?;
    Ok(web::Json(check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::inbound::http::donations::{create_donation, list_donations};
    use crate::inbound::http::test_support::{bearer, seeded_app};
    use actix_web::{test as actix_test, App};
    use rstest::rstest;
    use serde_json::{json, Value};

    fn check_body(donation_id: &str, verdict: &str) -> Value {
        json!({
            "donationId": donation_id,
            "expiryStatus": "good",
            "packagingStatus": "good",
            "smellStatus": "fresh",
            "overallQuality": verdict,
        })
    }

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
                .service(list_donations)
                .service(submit_quality_check),
        )
    }

    #[rstest]
    #[case("pass", "pickedup")]
    #[case("fail", "rejected")]
    #[actix_web::test]
    async fn verdict_drives_the_donation_status(
        #[case] verdict: &str,
        #[case] expected_status: &str,
    ) {
        let (state, sessions) = seeded_app(&[
            ("bakery@example.org", Role::Donor),
            ("vera@example.org", Role::Volunteer),
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
        let donation: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        let donation_id = donation["id"].as_str().expect("id");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/quality-checks")
                .insert_header(bearer(&sessions[1]))
                .set_json(check_body(donation_id, verdict))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let check: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(check["donationId"], donation_id);
        assert_eq!(check["overallQuality"], verdict);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/donations")
                .insert_header(bearer(&sessions[1]))
                .to_request(),
        )
        .await;
        let listed: Vec<Value> =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(listed[0]["status"], expected_status);
        assert_eq!(listed[0]["qualityChecked"], true);
    }

    #[actix_web::test]
    async fn non_volunteer_is_forbidden() {
        let (state, sessions) = seeded_app(&[("bakery@example.org", Role::Donor)]).await;
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/quality-checks")
                .insert_header(bearer(&sessions[0]))
                .set_json(check_body(&Uuid::new_v4().to_string(), "pass"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn unknown_donation_still_records_the_check() {
        let (state, sessions) = seeded_app(&[("vera@example.org", Role::Volunteer)]).await;
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/quality-checks")
                .insert_header(bearer(&sessions[0]))
                .set_json(check_body(&Uuid::new_v4().to_string(), "pass"))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
    }
}
