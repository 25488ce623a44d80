use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::permission::Role;
use crate::error::ApiError;
use crate::model::AdminUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Verified identity attached to a request.
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
            name: claims.name,
        }
    }
}

/// Process-wide signing key pair, built once at startup from the configured
/// secret. The secret itself is not retained.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Produce a signed session token for an authenticated user. Failure
    /// here is a signing misconfiguration, never a per-credential error.
    pub fn issue(&self, user: &AdminUser) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("session token signing failed: {}", e);
            ApiError::internal("An error occurred while processing your request")
        })
    }

    /// Verify a token and decode its principal. Every failure mode (bad
    /// signature, malformed structure, expired, unknown role) collapses to
    /// `None` so callers cannot distinguish why validation failed.
    pub fn verify(&self, token: &str) -> Option<Principal> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding, &validation)
            .ok()
            .map(|data| Principal::from(data.claims))
    }
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("encoding", &"<redacted>")
            .field("decoding", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
