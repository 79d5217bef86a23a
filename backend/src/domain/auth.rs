//! Identity context: registration, login, and bearer-credential resolution.
//!
//! Passwords are hashed with Argon2id; credentials are HMAC-signed bearer
//! tokens (see [`crate::domain::token`]). Every other operation resolves
//! its caller through [`AuthService::authenticate`].

use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{UserInsert, UserRepository};
use crate::domain::token::TokenCodec;
use crate::domain::user::{Role, User, UserPublic, DEFAULT_RATING};
use crate::domain::Error;

/// Minimum accepted password length.
const PASSWORD_MIN: usize = 8;

/// Registration fields, validated by [`AuthService::register`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Token plus display profile returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user: UserPublic,
}

/// Resolves credentials to user records and issues new ones.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenCodec,
}

impl AuthService {
    /// Create the service with the user repository and token codec.
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenCodec) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and issue a session token.
    ///
    /// Fails Conflict when the email is already registered. Roles are fixed
    /// at this point; no later operation can change them.
    pub async fn register(&self, new: NewUser) -> Result<AuthSession, Error> {
        validate_name(&new.name)?;
        validate_email(&new.email)?;
        validate_password(&new.password)?;

        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: hash_password(&new.password)?,
            role: new.role,
            phone: new.phone,
            rating: DEFAULT_RATING,
            created_at: Utc::now(),
        };

        match self.users.insert(&user).await? {
            UserInsert::Inserted => {}
            UserInsert::EmailTaken => {
                return Err(Error::conflict("email already registered"));
            }
        }

        let token = self.tokens.issue(&user.id);
        Ok(AuthSession {
            token,
            user: user.into(),
        })
    }

    /// Exchange email and password for a fresh session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, Error> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or_else(|| Error::unauthorized("invalid email or password"))?;

        let token = self.tokens.issue(&user.id);
        Ok(AuthSession {
            token,
            user: user.into(),
        })
    }

    /// Resolve a bearer token to its user record.
    pub async fn authenticate(&self, token: &str) -> Result<User, Error> {
        let user_id = self
            .tokens
            .verify(token)
            .map_err(|err| Error::unauthorized(err.to_string()))?;
        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| Error::unauthorized("unknown token subject"))
    }
}

fn validate_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::invalid_request("name must not be empty"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), Error> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.split('.').count() >= 2
            && domain.split('.').all(|part| !part.is_empty())
            && !email.chars().any(char::is_whitespace)
    });
    if !valid {
        return Err(Error::invalid_request("email address is malformed"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), Error> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(Error::invalid_request(format!(
            "password must be at least {PASSWORD_MIN} characters"
        )));
    }
    Ok(())
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
