//! Administrative statistics rollup.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::donation::DonationStatus;

/// Aggregate counts for the admin dashboard.
///
/// The histogram covers every donation status, `rejected` included: it is
/// reachable through the quality gate, so omitting it would under-report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_donations: u64,
    pub total_requests: u64,
    pub total_users: u64,
    pub active_volunteers: u64,
    pub donations_by_status: BTreeMap<DonationStatus, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_keys_serialise_as_status_strings() {
        let mut by_status = BTreeMap::new();
        for status in DonationStatus::ALL {
            by_status.insert(status, 0);
        }
        by_status.insert(DonationStatus::Rejected, 2);

        let report = StatsReport {
            total_donations: 2,
            total_requests: 0,
            total_users: 4,
            active_volunteers: 1,
            donations_by_status: by_status,
        };
        let value = serde_json::to_value(&report).expect("serialise");
        assert_eq!(value["donationsByStatus"]["rejected"], serde_json::json!(2));
        assert_eq!(value["donationsByStatus"]["available"], serde_json::json!(0));
        assert_eq!(value["activeVolunteers"], serde_json::json!(1));
    }
}
