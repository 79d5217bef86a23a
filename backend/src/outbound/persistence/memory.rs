//! In-process document store backing every repository port.
//!
//! Collections live behind a single `RwLock`, which doubles as the atomic
//! unit for the match commit: both entity writes happen under one write
//! guard, so readers never observe a half-applied match. The guard is only
//! held across synchronous map operations, never across an await point.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::donation::{Donation, DonationStatus};
use crate::domain::feedback::Feedback;
use crate::domain::ports::{
    DonationRepository, FeedbackRepository, MatchCommit, MatchRepository, QualityCheckRepository,
    RequestRepository, StoreError, UserInsert, UserRepository, VolunteerStamp,
};
use crate::domain::quality::QualityCheck;
use crate::domain::request::{FoodRequest, RequestStatus};
use crate::domain::user::{Role, User};

#[derive(Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    donations: HashMap<Uuid, Donation>,
    requests: HashMap<Uuid, FoodRequest>,
    quality_checks: Vec<QualityCheck>,
    feedback: Vec<Feedback>,
}

/// Shared in-memory store. Clone-free: wrap it in an `Arc` and hand the
/// same instance to every service.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }
}

fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: &User) -> Result<UserInsert, StoreError> {
        let mut guard = self.write()?;
        if guard.users.values().any(|existing| existing.email == user.email) {
            return Ok(UserInsert::EmailTaken);
        }
        guard.users.insert(user.id, user.clone());
        Ok(UserInsert::Inserted)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn set_rating(&self, id: &Uuid, rating: f64) -> Result<(), StoreError> {
        let mut guard = self.write()?;
        if let Some(user) = guard.users.get_mut(id) {
            user.rating = rating;
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users: Vec<User> = self.read()?.users.values().cloned().collect();
        Ok(newest_first(users, |user| user.created_at))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.users.len() as u64)
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, StoreError> {
        Ok(self
            .read()?
            .users
            .values()
            .filter(|user| user.role == role)
            .count() as u64)
    }
}

#[async_trait]
impl DonationRepository for MemoryStore {
    async fn insert(&self, donation: &Donation) -> Result<(), StoreError> {
        self.write()?.donations.insert(donation.id, donation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Donation>, StoreError> {
        Ok(self.read()?.donations.get(id).cloned())
    }

    async fn list_by_donor(&self, donor_id: &Uuid) -> Result<Vec<Donation>, StoreError> {
        let owned: Vec<Donation> = self
            .read()?
            .donations
            .values()
            .filter(|donation| donation.donor_id == *donor_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |donation| donation.created_at))
    }

    async fn list(&self, status: Option<DonationStatus>) -> Result<Vec<Donation>, StoreError> {
        let matching: Vec<Donation> = self
            .read()?
            .donations
            .values()
            .filter(|donation| status.is_none_or(|wanted| donation.status == wanted))
            .cloned()
            .collect();
        Ok(newest_first(matching, |donation| donation.created_at))
    }

    async fn update_status<'a>(
        &self,
        id: &Uuid,
        status: DonationStatus,
        claim: Option<&'a VolunteerStamp>,
    ) -> Result<bool, StoreError> {
        let mut guard = self.write()?;
        let Some(donation) = guard.donations.get_mut(id) else {
            return Ok(false);
        };
        donation.status = status;
        if let Some(stamp) = claim {
            donation.volunteer_id = Some(stamp.id);
            donation.volunteer_name = Some(stamp.name.clone());
        }
        Ok(true)
    }

    async fn apply_quality_outcome(
        &self,
        id: &Uuid,
        status: DonationStatus,
    ) -> Result<(), StoreError> {
        let mut guard = self.write()?;
        // Filtered update: zero matches is a no-op, not an error.
        if let Some(donation) = guard.donations.get_mut(id) {
            donation.status = status;
            donation.quality_checked = Some(true);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.donations.len() as u64)
    }

    async fn count_by_status(&self) -> Result<BTreeMap<DonationStatus, u64>, StoreError> {
        let guard = self.read()?;
        let mut histogram: BTreeMap<DonationStatus, u64> =
            DonationStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        for donation in guard.donations.values() {
            if let Some(count) = histogram.get_mut(&donation.status) {
                *count += 1;
            }
        }
        Ok(histogram)
    }
}

#[async_trait]
impl MatchRepository for MemoryStore {
    async fn commit_match(
        &self,
        request_id: &Uuid,
        donation_id: &Uuid,
    ) -> Result<MatchCommit, StoreError> {
        let mut guard = self.write()?;

        // Preconditions checked under the same write guard that applies the
        // updates, so the availability check cannot race another matcher.
        let Some(receiver_id) = guard.requests.get(request_id).map(|request| request.receiver_id)
        else {
            return Ok(MatchCommit::RequestMissing);
        };
        let Some(donation) = guard.donations.get(donation_id) else {
            return Ok(MatchCommit::DonationMissing);
        };
        if donation.status != DonationStatus::Available {
            return Ok(MatchCommit::DonationUnavailable);
        }

        if let Some(request) = guard.requests.get_mut(request_id) {
            request.status = RequestStatus::Matched;
            request.matched_donation_id = Some(*donation_id);
        }
        if let Some(donation) = guard.donations.get_mut(donation_id) {
            donation.status = DonationStatus::Claimed;
            donation.receiver_id = Some(receiver_id);
        }
        Ok(MatchCommit::Committed)
    }
}

#[async_trait]
impl RequestRepository for MemoryStore {
    async fn insert(&self, request: &FoodRequest) -> Result<(), StoreError> {
        self.write()?.requests.insert(request.id, request.clone());
        Ok(())
    }

    async fn list_by_receiver(&self, receiver_id: &Uuid) -> Result<Vec<FoodRequest>, StoreError> {
        let owned: Vec<FoodRequest> = self
            .read()?
            .requests
            .values()
            .filter(|request| request.receiver_id == *receiver_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |request| request.created_at))
    }

    async fn list(&self) -> Result<Vec<FoodRequest>, StoreError> {
        let requests: Vec<FoodRequest> = self.read()?.requests.values().cloned().collect();
        Ok(newest_first(requests, |request| request.created_at))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.requests.len() as u64)
    }
}

#[async_trait]
impl QualityCheckRepository for MemoryStore {
    async fn insert(&self, check: &QualityCheck) -> Result<(), StoreError> {
        self.write()?.quality_checks.push(check.clone());
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn insert(&self, feedback: &Feedback) -> Result<(), StoreError> {
        self.write()?.feedback.push(feedback.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<Feedback>, StoreError> {
        let received: Vec<Feedback> = self
            .read()?
            .feedback
            .iter()
            .filter(|item| item.to_user_id == Some(*user_id))
            .cloned()
            .collect();
        Ok(newest_first(received, |item| item.created_at))
    }
}
