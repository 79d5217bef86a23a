//! Port for user persistence and rating updates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{Role, User};

use super::StoreError;

/// Outcome of inserting a user, distinguishing the email-uniqueness
/// violation so the check and the write happen atomically in the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInsert {
    Inserted,
    EmailTaken,
}

/// Port for the `users` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user unless the email is already registered.
    async fn insert(&self, user: &User) -> Result<UserInsert, StoreError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, StoreError>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a recomputed aggregate rating. No-op when the id is unknown.
    async fn set_rating(&self, id: &Uuid, rating: f64) -> Result<(), StoreError>;

    /// List every user, newest first.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Count all users.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Count users holding the given role.
    async fn count_by_role(&self, role: Role) -> Result<u64, StoreError>;
}
