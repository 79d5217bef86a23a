//! Donation entity and lifecycle states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::geo::Location;

/// Donation lifecycle state.
///
/// Initial state is `available`; `delivered`, `rejected`, and `expired` are
/// terminal. Status updates are deliberately not transition-checked (a
/// documented laxity of the workflow), so any state may be written over any
/// other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Available,
    Claimed,
    Pickedup,
    Delivered,
    Rejected,
    Expired,
}

impl DonationStatus {
    /// Every reachable status, in declaration order. Used to build the
    /// admin histogram over the full set, `rejected` included.
    pub const ALL: [Self; 6] = [
        Self::Available,
        Self::Claimed,
        Self::Pickedup,
        Self::Delivered,
        Self::Rejected,
        Self::Expired,
    ];

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::Pickedup => "pickedup",
            Self::Delivered => "delivered",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posted unit of surplus food.
///
/// ## Invariants
/// - `quantity` is at least 1.
/// - `volunteer_id`/`volunteer_name` are stamped only by a volunteer's
///   `claimed` transition; `receiver_id` only by a successful match.
/// - `donor_name` is a snapshot taken at creation and never re-joined
///   against the user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub donor_name: String,
    pub food_type: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub location: Location,
    /// Opaque blob reference (e.g. a data URI); never interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_checked: Option<bool>,
}

/// Validated fields for creating a donation.
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub food_type: String,
    pub quantity: u32,
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub location: Location,
    pub image: Option<String>,
}

/// Donation annotated with the distance from the viewer, in kilometres
/// rounded to two decimals. `None` when the stored coordinates are not
/// finite or the viewer gave no position.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationWithDistance {
    #[serde(flatten)]
    pub donation: Donation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serialises_lowercase() {
        assert_eq!(
            serde_json::to_value(DonationStatus::Pickedup).expect("serialise"),
            serde_json::json!("pickedup")
        );
    }

    #[test]
    fn all_statuses_include_rejected() {
        assert!(DonationStatus::ALL.contains(&DonationStatus::Rejected));
        assert_eq!(DonationStatus::ALL.len(), 6);
    }

    #[test]
    fn unset_optionals_are_omitted_from_json() {
        let donation = Donation {
            id: Uuid::new_v4(),
            donor_id: Uuid::new_v4(),
            donor_name: "Corner Bakery".into(),
            food_type: "bread".into(),
            quantity: 4,
            description: None,
            expiry_date: Utc::now(),
            location: Location {
                latitude: 51.5,
                longitude: -0.12,
                address: None,
            },
            image: None,
            status: DonationStatus::Available,
            created_at: Utc::now(),
            volunteer_id: None,
            volunteer_name: None,
            receiver_id: None,
            quality_checked: None,
        };
        let value = serde_json::to_value(&donation).expect("serialise");
        assert!(value.get("volunteerId").is_none());
        assert!(value.get("qualityChecked").is_none());
        assert_eq!(value["status"], serde_json::json!("available"));
        assert_eq!(value["donorName"], serde_json::json!("Corner Bakery"));
    }
}
