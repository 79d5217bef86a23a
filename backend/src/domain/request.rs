//! Food request entity and lifecycle states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::geo::Location;

/// How urgently the receiver needs the food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Request lifecycle state. Initial state is `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Matched,
    Fulfilled,
    Cancelled,
}

/// A receiver's ask for food.
///
/// ## Invariants
/// - `matched_donation_id` is set iff `status` is `matched` or later.
/// - `receiver_name` is a snapshot taken at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    pub id: Uuid,
    pub receiver_id: Uuid,
    pub receiver_name: String,
    pub food_type: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_donation_id: Option<Uuid>,
}

/// Validated fields for creating a food request.
#[derive(Debug, Clone)]
pub struct NewFoodRequest {
    pub food_type: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub location: Location,
    pub notes: Option<String>,
}
