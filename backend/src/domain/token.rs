//! Signed bearer tokens carrying a user id and expiry.
//!
//! Token format: `<userId>.<expiryUnixSeconds>.<hex HMAC-SHA256 tag>`,
//! signed with the configured secret. Tokens are valid for seven days from
//! issuance, inclusive of the final second.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Token lifetime in seconds (seven days).
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token does not have the expected `id.exp.tag` shape.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the payload.
    #[error("invalid token signature")]
    BadSignature,
    /// The expiry timestamp has passed.
    #[error("token expired")]
    Expired,
}

/// Issues and verifies bearer tokens with a process-wide secret injected at
/// construction.
#[derive(Clone)]
pub struct TokenCodec {
    key: Vec<u8>,
}

impl TokenCodec {
    /// Build a codec around the signing secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { key: secret.into() }
    }

    /// Issue a token for `user_id`, valid for seven days from now.
    pub fn issue(&self, user_id: &Uuid) -> String {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token anchored at an explicit issuance instant.
    pub fn issue_at(&self, user_id: &Uuid, issued_at: DateTime<Utc>) -> String {
        let expiry = (issued_at + Duration::seconds(TOKEN_TTL_SECS)).timestamp();
        let payload = format!("{user_id}.{expiry}");
        let tag = self.sign(&payload);
        format!("{payload}.{}", hex::encode(tag))
    }

    /// Verify a token against the current time, returning the subject id.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit instant.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let mut parts = token.splitn(3, '.');
        let (id_part, exp_part, tag_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(exp), Some(tag)) => (id, exp, tag),
            _ => return Err(TokenError::Malformed),
        };

        let user_id = Uuid::parse_str(id_part).map_err(|_| TokenError::Malformed)?;
        let expiry: i64 = exp_part.parse().map_err(|_| TokenError::Malformed)?;
        let tag = hex::decode(tag_part).map_err(|_| TokenError::Malformed)?;

        let payload = format!("{id_part}.{exp_part}");
        let mut mac = Self::mac(&self.key);
        mac.update(payload.as_bytes());
        mac.verify_slice(&tag).map_err(|_| TokenError::BadSignature)?;

        if now.timestamp() > expiry {
            return Err(TokenError::Expired);
        }
        Ok(user_id)
    }

    fn sign(&self, payload: &str) -> Vec<u8> {
        let mut mac = Self::mac(&self.key);
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    fn mac(key: &[u8]) -> HmacSha256 {
        // HMAC accepts keys of any length, so this cannot fail.
        #[allow(clippy::expect_used)]
        HmacSha256::new_from_slice(key).expect("HMAC accepts any key length")
    }
}
