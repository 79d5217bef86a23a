//! Quality-check records submitted by volunteers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Expiry assessment of the inspected food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Good,
    NearExpiry,
    Expired,
}

/// Packaging assessment of the inspected food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PackagingStatus {
    Good,
    Damaged,
}

/// Smell assessment of the inspected food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SmellStatus {
    Fresh,
    Acceptable,
    Bad,
}

/// Overall verdict driving the donation's next status: `pass` moves it to
/// `pickedup`, anything else to `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OverallQuality {
    Pass,
    Fail,
}

/// Inspection outcome recorded by a volunteer. Append-only; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheck {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub expiry_status: ExpiryStatus,
    pub packaging_status: PackagingStatus,
    pub smell_status: SmellStatus,
    pub overall_quality: OverallQuality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub volunteer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields for submitting a quality check.
#[derive(Debug, Clone)]
pub struct NewQualityCheck {
    pub donation_id: Uuid,
    pub expiry_status: ExpiryStatus,
    pub packaging_status: PackagingStatus,
    pub smell_status: SmellStatus,
    pub overall_quality: OverallQuality,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_wire_values() {
        assert_eq!(
            serde_json::to_value(ExpiryStatus::NearExpiry).expect("serialise"),
            serde_json::json!("near_expiry")
        );
        assert_eq!(
            serde_json::to_value(OverallQuality::Pass).expect("serialise"),
            serde_json::json!("pass")
        );
    }
}
