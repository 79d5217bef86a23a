//! Donation handlers: creation, listings, and status updates.

use actix_web::{get, patch, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::geo::{Coordinates, Location};
use crate::domain::{Donation, DonationStatus, DonationWithDistance, Error, NewDonation};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation body for `POST /api/donations`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CreateDonationRequest {
    pub food_type: String,
    pub quantity: u32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub location: Location,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Status filter for `GET /api/donations`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(deny_unknown_fields)]
pub struct DonationListQuery {
    /// Restrict the listing to one lifecycle state. Ignored for donors.
    pub status: Option<DonationStatus>,
}

/// Viewer coordinates for `GET /api/donations/available`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(deny_unknown_fields)]
pub struct AvailableQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Status update body for `PATCH /api/donations/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct StatusUpdateRequest {
    pub status: DonationStatus,
}

/// Post a donation. Donor role only.
#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = CreateDonationRequest,
    responses(
        (status = 200, description = "Donation created", body = Donation),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not a donor", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "createDonation"
)]
#[post("/donations")]
pub async fn create_donation(
    state: web::Data<HttpState>,
    identity: Identity,
    payload: web::Json<CreateDonationRequest>,
) -> ApiResult<web::Json<Donation>> {
    let CreateDonationRequest {
        food_type,
        quantity,
        description,
        expiry_date,
        location,
        image,
    } = payload.into_inner();
    let donation = state
        .donations
        .create(
            &identity.0,
            NewDonation {
                food_type,
                quantity,
                description,
                expiry_date,
                location,
                image,
            },
        )
        .await?;
    Ok(web::Json(donation))
}

/// List donations, scoped by role: donors see their own, everyone else sees
/// all (optionally filtered by status).
#[utoipa::path(
    get,
    path = "/api/donations",
    params(DonationListQuery),
    responses(
        (status = 200, description = "Donations", body = [Donation]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "listDonations"
)]
#[get("/donations")]
pub async fn list_donations(
    state: web::Data<HttpState>,
    identity: Identity,
    query: web::Query<DonationListQuery>,
) -> ApiResult<web::Json<Vec<Donation>>> {
    let donations = state.donations.list(&identity.0, query.status).await?;
    Ok(web::Json(donations))
}

/// List available donations, nearest first when the viewer supplies both
/// coordinates.
#[utoipa::path(
    get,
    path = "/api/donations/available",
    params(AvailableQuery),
    responses(
        (status = 200, description = "Available donations", body = [DonationWithDistance]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "listAvailableDonations"
)]
#[get("/donations/available")]
pub async fn list_available_donations(
    state: web::Data<HttpState>,
    _identity: Identity,
    query: web::Query<AvailableQuery>,
) -> ApiResult<web::Json<Vec<DonationWithDistance>>> {
    let viewer = query
        .latitude
        .zip(query.longitude)
        .map(|(latitude, longitude)| Coordinates {
            latitude,
            longitude,
        });
    let donations = state.donations.list_available(viewer).await?;
    Ok(web::Json(donations))
}

/// Overwrite a donation's status. A volunteer setting `claimed` is stamped
/// onto the record.
#[utoipa::path(
    patch,
    path = "/api/donations/{id}/status",
    params(("id" = Uuid, Path, description = "Donation identifier")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 204, description = "Status updated"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Donation not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "setDonationStatus"
)]
#[patch("/donations/{id}/status")]
pub async fn set_donation_status(
    state: web::Data<HttpState>,
    identity: Identity,
    path: web::Path<Uuid>,
    payload: web::Json<StatusUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    state
        .donations
        .set_status(&identity.0, &id, payload.status)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
