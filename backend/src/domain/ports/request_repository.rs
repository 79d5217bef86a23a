//! Port for food-request persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::request::FoodRequest;

use super::StoreError;

/// Port for the `requests` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Insert a new food request.
    async fn insert(&self, request: &FoodRequest) -> Result<(), StoreError>;

    /// List requests created by a receiver, newest first.
    async fn list_by_receiver(&self, receiver_id: &Uuid) -> Result<Vec<FoodRequest>, StoreError>;

    /// List every request, newest first.
    async fn list(&self) -> Result<Vec<FoodRequest>, StoreError>;

    /// Count all requests.
    async fn count(&self) -> Result<u64, StoreError>;
}
