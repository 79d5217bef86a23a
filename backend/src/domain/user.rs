//! User entity and role model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Default rating assigned to newly registered users.
pub const DEFAULT_RATING: f64 = 5.0;

/// Role assigned at registration. Roles are immutable; no operation exists
/// to change one after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Receiver,
    Volunteer,
    Admin,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Receiver => "receiver",
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user as held by the document store.
///
/// ## Invariants
/// - `email` is unique across the store.
/// - `rating` stays within [1, 5]: it is the mean of integer feedback
///   ratings in that range, seeded at [`DEFAULT_RATING`].
///
/// The password hash never leaves the domain; wire responses use
/// [`UserPublic`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// User representation exposed over the wire, with the password hash
/// stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            phone,
            rating,
            created_at,
            password_hash: _,
        } = user;
        Self {
            id,
            name,
            email,
            role,
            phone,
            rating,
            created_at,
        }
    }
}
