//! Quality gate: records inspections and drives the donation status.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::donation::DonationStatus;
use crate::domain::ports::{DonationRepository, QualityCheckRepository};
use crate::domain::quality::{NewQualityCheck, OverallQuality, QualityCheck};
use crate::domain::user::{Role, User};
use crate::domain::Error;

/// Persists inspection outcomes and applies their verdict to the donation.
#[derive(Clone)]
pub struct QualityService {
    checks: Arc<dyn QualityCheckRepository>,
    donations: Arc<dyn DonationRepository>,
}

impl QualityService {
    /// Create the service with the check and donation repositories.
    pub fn new(
        checks: Arc<dyn QualityCheckRepository>,
        donations: Arc<dyn DonationRepository>,
    ) -> Self {
        Self { checks, donations }
    }

    /// Record a quality check. Volunteer role only.
    ///
    /// The check is appended first; the donation then moves to `pickedup`
    /// on a pass verdict and `rejected` otherwise, with `qualityChecked`
    /// set. The donation write is a filtered update: when the donation id
    /// matches nothing it is a silent no-op, and the check still stands.
    pub async fn submit(&self, caller: &User, new: NewQualityCheck) -> Result<QualityCheck, Error> {
        if caller.role != Role::Volunteer {
            return Err(Error::forbidden("only volunteers can submit quality checks"));
        }

        let check = QualityCheck {
            id: Uuid::new_v4(),
            donation_id: new.donation_id,
            expiry_status: new.expiry_status,
            packaging_status: new.packaging_status,
            smell_status: new.smell_status,
            overall_quality: new.overall_quality,
            notes: new.notes,
            volunteer_id: caller.id,
            created_at: Utc::now(),
        };
        self.checks.insert(&check).await?;

        let outcome = match check.overall_quality {
            OverallQuality::Pass => DonationStatus::Pickedup,
            OverallQuality::Fail => DonationStatus::Rejected,
        };
        self.donations
            .apply_quality_outcome(&check.donation_id, outcome)
            .await?;
        Ok(check)
    }
}
