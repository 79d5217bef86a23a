//! Food-request handlers: creation, listings, and matching.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::geo::Location;
use crate::domain::{Error, FoodRequest, NewFoodRequest, Urgency};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation body for `POST /api/requests`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CreateRequestBody {
    pub food_type: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub location: Location,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Matching body for `POST /api/requests/{id}/match`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct MatchBody {
    pub donation_id: Uuid,
}

/// Post a food request. Receiver role only.
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateRequestBody,
    responses(
        (status = 200, description = "Request created", body = FoodRequest),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not a receiver", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["requests"],
    operation_id = "createRequest"
)]
#[post("/requests")]
pub async fn create_request(
    state: web::Data<HttpState>,
    identity: Identity,
    payload: web::Json<CreateRequestBody>,
) -> ApiResult<web::Json<FoodRequest>> {
    let CreateRequestBody {
        food_type,
        quantity,
        urgency,
        location,
        notes,
    } = payload.into_inner();
    let request = state
        .requests
        .create(
            &identity.0,
            NewFoodRequest {
                food_type,
                quantity,
                urgency,
                location,
                notes,
            },
        )
        .await?;
    Ok(web::Json(request))
}

/// List requests, scoped by role: receivers see their own, everyone else
/// sees all.
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "Requests", body = [FoodRequest]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["requests"],
    operation_id = "listRequests"
)]
#[get("/requests")]
pub async fn list_requests(
    state: web::Data<HttpState>,
    identity: Identity,
) -> ApiResult<web::Json<Vec<FoodRequest>>> {
    let requests = state.requests.list(&identity.0).await?;
    Ok(web::Json(requests))
}

/// Link a request to an available donation. The request moves to `matched`
/// and the donation to `claimed` in one atomic commit.
#[utoipa::path(
    post,
    path = "/api/requests/{id}/match",
    params(("id" = Uuid, Path, description = "Request identifier")),
    request_body = MatchBody,
    responses(
        (status = 204, description = "Request matched"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Request or donation not found", body = Error),
        (status = 409, description = "Donation is not available", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["requests"],
    operation_id = "matchRequest"
)]
#[post("/requests/{id}/match")]
pub async fn match_request(
    state: web::Data<HttpState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    payload: web::Json<MatchBody>,
) -> ApiResult<HttpResponse> {
    let request_id = path.into_inner();
    state
        .matching
        .match_request(&request_id, &payload.donation_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
