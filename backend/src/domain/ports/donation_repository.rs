//! Port for donation persistence and status writes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::donation::{Donation, DonationStatus};

use super::StoreError;

/// Volunteer identity stamped onto a donation during a `claimed` write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerStamp {
    pub id: Uuid,
    pub name: String,
}

/// Port for the `donations` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Insert a new donation.
    async fn insert(&self, donation: &Donation) -> Result<(), StoreError>;

    /// Find a donation by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Donation>, StoreError>;

    /// List donations owned by a donor, newest first.
    async fn list_by_donor(&self, donor_id: &Uuid) -> Result<Vec<Donation>, StoreError>;

    /// List donations, optionally filtered by status, newest first.
    async fn list(&self, status: Option<DonationStatus>) -> Result<Vec<Donation>, StoreError>;

    /// Overwrite the status of a donation, stamping the volunteer identity
    /// when one is supplied. Returns `false` when the id matches nothing.
    async fn update_status<'a>(
        &self,
        id: &Uuid,
        status: DonationStatus,
        claim: Option<&'a VolunteerStamp>,
    ) -> Result<bool, StoreError>;

    /// Apply a quality-gate outcome: set the status and flag the donation as
    /// quality checked. A silent no-op when the id matches nothing, mirroring
    /// a filtered store update that touches zero documents.
    async fn apply_quality_outcome(
        &self,
        id: &Uuid,
        status: DonationStatus,
    ) -> Result<(), StoreError>;

    /// Count all donations.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Histogram of donation counts over the full status set.
    async fn count_by_status(&self) -> Result<BTreeMap<DonationStatus, u64>, StoreError>;
}
