//! Food-request lifecycle manager.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::RequestRepository;
use crate::domain::request::{FoodRequest, NewFoodRequest, RequestStatus};
use crate::domain::user::{Role, User};
use crate::domain::Error;

/// Owns food-request records and their status transitions.
#[derive(Clone)]
pub struct RequestService {
    requests: Arc<dyn RequestRepository>,
}

impl RequestService {
    /// Create the service with the request repository.
    pub fn new(requests: Arc<dyn RequestRepository>) -> Self {
        Self { requests }
    }

    /// Create a request. Receiver role only; the receiver's name is
    /// snapshotted onto the record.
    pub async fn create(&self, caller: &User, new: NewFoodRequest) -> Result<FoodRequest, Error> {
        if caller.role != Role::Receiver {
            return Err(Error::forbidden("only receivers can create requests"));
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

        let request = FoodRequest {
            id: Uuid::new_v4(),
            receiver_id: caller.id,
            receiver_name: caller.name.clone(),
            food_type: new.food_type,
            quantity: new.quantity,
            urgency: new.urgency,
            location: new.location,
            notes: new.notes,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            matched_donation_id: None,
        };
        self.requests.insert(&request).await?;
        Ok(request)
    }

    /// Role-scoped listing: a receiver sees only their own requests; any
    /// other role sees all requests, newest first.
    pub async fn list(&self, caller: &User) -> Result<Vec<FoodRequest>, Error> {
        let requests = if caller.role == Role::Receiver {
            self.requests.list_by_receiver(&caller.id).await?
        } else {
            self.requests.list().await?
        };
        Ok(requests)
    }
}
