//! Stats aggregator: read-only rollup for administrative visibility.

use std::sync::Arc;

use crate::domain::ports::{DonationRepository, RequestRepository, UserRepository};
use crate::domain::stats::StatsReport;
use crate::domain::user::{Role, User, UserPublic};
use crate::domain::Error;

/// Aggregates counts over the other components. Admin role only.
#[derive(Clone)]
pub struct StatsService {
    users: Arc<dyn UserRepository>,
    donations: Arc<dyn DonationRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl StatsService {
    /// Create the service with the user, donation, and request repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        donations: Arc<dyn DonationRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self {
            users,
            donations,
            requests,
        }
    }

    /// Aggregate counts plus the per-status donation histogram.
    pub async fn report(&self, caller: &User) -> Result<StatsReport, Error> {
        require_admin(caller)?;
        Ok(StatsReport {
            total_donations: self.donations.count().await?,
            total_requests: self.requests.count().await?,
            total_users: self.users.count().await?,
            active_volunteers: self.users.count_by_role(Role::Volunteer).await?,
            donations_by_status: self.donations.count_by_status().await?,
        })
    }

    /// Every user with the password hash excluded.
    pub async fn list_users(&self, caller: &User) -> Result<Vec<UserPublic>, Error> {
        require_admin(caller)?;
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserPublic::from).collect())
    }
}

fn require_admin(caller: &User) -> Result<(), Error> {
    if caller.role != Role::Admin {
        return Err(Error::forbidden("admin access required"));
    }
    Ok(())
}
