//! Feedback handlers: submission and the public per-user listing.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, Feedback, FeedbackType, NewFeedback};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Submission body for `POST /api/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FeedbackRequest {
    pub donation_id: Uuid,
    pub rating: i32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
}

/// Submit feedback against a donation. The target is resolved from the
/// donation by feedback type and their mean rating recomputed.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback recorded", body = Feedback),
        (status = 400, description = "Rating out of range", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Donation not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    identity: Identity,
    payload: web::Json<FeedbackRequest>,
) -> ApiResult<web::Json<Feedback>> {
    let FeedbackRequest {
        donation_id,
        rating,
        comment,
        feedback_type,
    } = payload.into_inner();
    let record = state
        .feedback
        .submit(
            &identity.0,
            NewFeedback {
                donation_id,
                rating,
                comment,
                feedback_type,
            },
        )
        .await?;
    Ok(web::Json(record))
}

/// All feedback received by a user, newest first. Public; no credential
/// required.
#[utoipa::path(
    get,
    path = "/api/feedback/{userId}",
    params(("userId" = Uuid, Path, description = "Target user identifier")),
    responses(
        (status = 200, description = "Feedback received by the user", body = [Feedback]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "getFeedbackForUser",
    security([])
)]
#[get("/feedback/{userId}")]
pub async fn list_user_feedback(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Vec<Feedback>>> {
    let user_id = path.into_inner();
    let received = state.feedback.list_for_user(&user_id).await?;
    Ok(web::Json(received))
}
