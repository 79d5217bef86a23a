//! Donation lifecycle manager.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::donation::{Donation, DonationStatus, DonationWithDistance, NewDonation};
use crate::domain::geo::{self, Coordinates};
use crate::domain::ports::{DonationRepository, VolunteerStamp};
use crate::domain::user::{Role, User};
use crate::domain::Error;

/// Owns donation records and their status transitions.
#[derive(Clone)]
pub struct DonationService {
    donations: Arc<dyn DonationRepository>,
}

impl DonationService {
    /// Create the service with the donation repository.
    pub fn new(donations: Arc<dyn DonationRepository>) -> Self {
        Self { donations }
    }

    /// Create a donation. Donor role only; the donor's name is snapshotted
    /// onto the record. The expiry date is recorded as supplied, past dates
    /// included.
    pub async fn create(&self, caller: &User, new: NewDonation) -> Result<Donation, Error> {
        if caller.role != Role::Donor {
            return Err(Error::forbidden("only donors can create donations"));
        }
        if new.food_type.trim().is_empty() {
            return Err(Error::invalid_request("food type must not be empty"));
        }
        if new.quantity == 0 {
            return Err(Error::invalid_request("quantity must be a positive integer"));
        }
        new.location
            .validate()
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let donation = Donation {
            id: Uuid::new_v4(),
            donor_id: caller.id,
            donor_name: caller.name.clone(),
            food_type: new.food_type,
            quantity: new.quantity,
            description: new.description,
            expiry_date: new.expiry_date,
            location: new.location,
            image: new.image,
            status: DonationStatus::Available,
            created_at: Utc::now(),
            volunteer_id: None,
            volunteer_name: None,
            receiver_id: None,
            quality_checked: None,
        };
        self.donations.insert(&donation).await?;
        Ok(donation)
    }

    /// Role-scoped listing: a donor sees only their own donations (the
    /// status filter is ignored for them); every other role sees all
    /// donations, optionally filtered by status.
    pub async fn list(
        &self,
        caller: &User,
        status: Option<DonationStatus>,
    ) -> Result<Vec<Donation>, Error> {
        let donations = if caller.role == Role::Donor {
            self.donations.list_by_donor(&caller.id).await?
        } else {
            self.donations.list(status).await?
        };
        Ok(donations)
    }

    /// List available donations. With viewer coordinates, each entry is
    /// annotated with its distance and the list is sorted nearest first;
    /// entries whose distance cannot be computed sort last.
    pub async fn list_available(
        &self,
        viewer: Option<Coordinates>,
    ) -> Result<Vec<DonationWithDistance>, Error> {
        let donations = self.donations.list(Some(DonationStatus::Available)).await?;

        let mut annotated: Vec<DonationWithDistance> = donations
            .into_iter()
            .map(|donation| {
                let distance = viewer.and_then(|from| {
                    let to = Coordinates {
                        latitude: donation.location.latitude,
                        longitude: donation.location.longitude,
                    };
                    geo::distance_km(from, to).map(geo::round_km)
                });
                DonationWithDistance { donation, distance }
            })
            .collect();

        if viewer.is_some() {
            annotated.sort_by(|a, b| {
                let key = |entry: &DonationWithDistance| entry.distance.unwrap_or(f64::INFINITY);
                key(a).total_cmp(&key(b))
            });
        }
        Ok(annotated)
    }

    /// Overwrite a donation's status. Transitions are deliberately not
    /// checked against a table; when a volunteer sets `claimed`, their
    /// identity is stamped onto the record.
    pub async fn set_status(
        &self,
        caller: &User,
        id: &Uuid,
        status: DonationStatus,
    ) -> Result<(), Error> {
        let claim = (status == DonationStatus::Claimed && caller.role == Role::Volunteer).then(
            || VolunteerStamp {
                id: caller.id,
                name: caller.name.clone(),
            },
        );
        let found = self
            .donations
            .update_status(id, status, claim.as_ref())
            .await?;
        if !found {
            return Err(Error::not_found("donation not found"));
        }
        Ok(())
    }
}
